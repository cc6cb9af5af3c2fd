use chrono::{DateTime, Local, NaiveDate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Assignment,
    Exam,
    Quiz,
    Meeting,
    Presentation,
}

impl Category {
    /// Exact, case-sensitive names; anything else falls back to Assignment.
    pub fn parse(s: &str) -> Self {
        match s {
            "Exam" => Category::Exam,
            "Quiz" => Category::Quiz,
            "Meeting" => Category::Meeting,
            "Presentation" => Category::Presentation,
            _ => Category::Assignment,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Assignment => "Assignment",
            Category::Exam => "Exam",
            Category::Quiz => "Quiz",
            Category::Meeting => "Meeting",
            Category::Presentation => "Presentation",
        }
    }
}

/// Computed at render time from the due instant, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    Approaching,
    Normal,
}

#[derive(Clone, Debug)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub due: DateTime<Local>,
    pub done: bool,
}

impl Task {
    /// Overdue when strictly past due; approaching within the next three
    /// days, inclusive at both ends. Done tasks are never classified.
    pub fn urgency(&self, now: DateTime<Local>) -> Urgency {
        if self.done {
            return Urgency::Normal;
        }
        let days = (self.due - now).num_seconds() as f64 / 86_400.0;
        if days < 0.0 {
            Urgency::Overdue
        } else if days <= 3.0 {
            Urgency::Approaching
        } else {
            Urgency::Normal
        }
    }
}

/// Parse a form `YYYY-MM-DD` due date, pinned to local noon (avoids DST
/// edges around midnight). `None` on anything malformed; the caller decides
/// the fallback.
pub fn parse_due_date(s: &str) -> Option<DateTime<Local>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .and_then(|naive| naive.and_local_timezone(Local).earliest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task(due: DateTime<Local>) -> Task {
        Task {
            id: 1,
            title: "essay".to_string(),
            description: String::new(),
            category: Category::Assignment,
            due,
            done: false,
        }
    }

    #[test]
    fn category_names_round_trip_and_default() {
        assert_eq!(Category::parse("Exam"), Category::Exam);
        assert_eq!(Category::parse("Presentation").as_str(), "Presentation");
        assert_eq!(Category::parse("exam"), Category::Assignment);
        assert_eq!(Category::parse(""), Category::Assignment);
    }

    #[test]
    fn urgency_windows() {
        let now = Local::now();
        assert_eq!(task(now + Duration::days(2)).urgency(now), Urgency::Approaching);
        assert_eq!(task(now + Duration::days(10)).urgency(now), Urgency::Normal);
        assert_eq!(task(now - Duration::days(1)).urgency(now), Urgency::Overdue);
    }

    #[test]
    fn urgency_window_edges() {
        let now = Local::now();
        assert_eq!(task(now).urgency(now), Urgency::Approaching);
        assert_eq!(task(now + Duration::days(3)).urgency(now), Urgency::Approaching);
        assert_eq!(
            task(now + Duration::days(3) + Duration::seconds(1)).urgency(now),
            Urgency::Normal
        );
    }

    #[test]
    fn due_dates_parse_to_local_noon() {
        let due = parse_due_date("2026-09-15").unwrap();
        assert_eq!(due.format("%Y-%m-%d %H:%M").to_string(), "2026-09-15 12:00");
    }

    #[test]
    fn malformed_due_dates_are_none() {
        assert!(parse_due_date("next tuesday").is_none());
        assert!(parse_due_date("2026-13-40").is_none());
        assert!(parse_due_date("").is_none());
    }
}
