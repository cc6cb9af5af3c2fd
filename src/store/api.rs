use crate::store::item::Category;
use chrono::{DateTime, Local, NaiveDate};
use serde_json::{Value, json};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemStatus {
    Pending,
    Done,
}

impl ItemStatus {
    fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Pending => "Pending",
            ItemStatus::Done => "Done",
        }
    }
}

/// An item on the JSON surface. Identity is a global id (not per-user), and
/// the due date stays the ISO-8601 string the client sent.
#[derive(Clone, Debug)]
pub struct ApiItem {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub due_date: String,
    pub status: ItemStatus,
}

impl ApiItem {
    /// `OVERDUE`, `DUE_SOON` or empty, from the date component of the due
    /// string. Done items never carry a badge.
    pub fn badge(&self, now: DateTime<Local>) -> &'static str {
        if self.status == ItemStatus::Done {
            return "";
        }
        let days = days_until(&self.due_date, now);
        if days < 0 {
            "OVERDUE"
        } else if days <= 3 {
            "DUE_SOON"
        } else {
            ""
        }
    }

    pub fn to_json(&self, now: DateTime<Local>) -> Value {
        json!({
            "id": self.id,
            "userId": self.user_id,
            "title": self.title,
            "description": self.description,
            "category": self.category.as_str(),
            "dueDate": self.due_date,
            "status": self.status.as_str(),
            "badge": self.badge(now),
        })
    }
}

/// Whole days between now and local midnight of the due date, truncated
/// toward zero. Anything too short or unparseable counts as far future
/// (no badge).
fn days_until(due_iso: &str, now: DateTime<Local>) -> i64 {
    let due = due_iso
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .and_then(|naive| naive.and_local_timezone(Local).earliest());
    match due {
        Some(due) => (due - now).num_seconds() / 86_400,
        None => 9999,
    }
}

/// The global item collection behind `/api/items`.
pub struct ApiStore {
    items: Vec<ApiItem>,
    next_id: i64,
}

impl Default for ApiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn list(&self, user_id: i64) -> impl Iterator<Item = &ApiItem> {
        self.items.iter().filter(move |it| it.user_id == user_id)
    }

    pub fn create(
        &mut self,
        user_id: i64,
        title: String,
        description: String,
        category: Category,
        due_date: String,
    ) -> &ApiItem {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ApiItem {
            id,
            user_id,
            title,
            description,
            category,
            due_date,
            status: ItemStatus::Pending,
        });
        self.items.last().unwrap()
    }

    /// Marking done deletes the item outright; done items are not retained.
    /// True when an item was removed.
    pub fn mark_done(&mut self, id: i64) -> bool {
        match self.items.iter().position(|it| it.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Any status other than `Done` resets the item to pending.
    pub fn reset_pending(&mut self, id: i64) -> Option<&ApiItem> {
        let item = self.items.iter_mut().find(|it| it.id == id)?;
        item.status = ItemStatus::Pending;
        Some(item)
    }

    pub fn delete(&mut self, id: i64) -> bool {
        match self.items.iter().position(|it| it.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn iso_in_days(offset: i64) -> String {
        let date = if offset >= 0 {
            Local::now().date_naive() + Days::new(offset as u64)
        } else {
            Local::now().date_naive() - Days::new((-offset) as u64)
        };
        format!("{}T12:00:00", date.format("%Y-%m-%d"))
    }

    fn store_with(due: String) -> ApiStore {
        let mut store = ApiStore::new();
        store.create(
            1,
            "report".to_string(),
            String::new(),
            Category::Assignment,
            due,
        );
        store
    }

    #[test]
    fn badge_windows() {
        let now = Local::now();
        let soon = store_with(iso_in_days(2));
        assert_eq!(soon.list(1).next().unwrap().badge(now), "DUE_SOON");

        let far = store_with(iso_in_days(10));
        assert_eq!(far.list(1).next().unwrap().badge(now), "");

        let late = store_with(iso_in_days(-1));
        assert_eq!(late.list(1).next().unwrap().badge(now), "OVERDUE");
    }

    #[test]
    fn unparseable_due_dates_get_no_badge() {
        let now = Local::now();
        assert_eq!(store_with("2026".to_string()).list(1).next().unwrap().badge(now), "");
        assert_eq!(
            store_with("yyyy-mm-ddT00:00:00".to_string())
                .list(1)
                .next()
                .unwrap()
                .badge(now),
            ""
        );
    }

    #[test]
    fn list_filters_by_user() {
        let mut store = ApiStore::new();
        store.create(1, "a".into(), String::new(), Category::Quiz, iso_in_days(5));
        store.create(2, "b".into(), String::new(), Category::Exam, iso_in_days(5));
        assert_eq!(store.list(1).count(), 1);
        assert_eq!(store.list(1).next().unwrap().title, "a");
        assert_eq!(store.list(3).count(), 0);
    }

    #[test]
    fn mark_done_removes_and_reports() {
        let mut store = store_with(iso_in_days(5));
        assert!(store.mark_done(1));
        assert_eq!(store.list(1).count(), 0);
        assert!(!store.mark_done(1));
    }

    #[test]
    fn mark_done_on_unknown_id_leaves_others_alone() {
        let mut store = store_with(iso_in_days(5));
        assert!(!store.mark_done(99));
        assert_eq!(store.list(1).count(), 1);
    }

    #[test]
    fn reset_pending_keeps_the_item() {
        let mut store = store_with(iso_in_days(5));
        assert!(store.reset_pending(1).is_some());
        assert_eq!(store.list(1).count(), 1);
        assert!(store.reset_pending(99).is_none());
    }

    #[test]
    fn item_json_shape() {
        let store = store_with(iso_in_days(2));
        let value = store.list(1).next().unwrap().to_json(Local::now());
        assert_eq!(value["id"], 1);
        assert_eq!(value["userId"], 1);
        assert_eq!(value["category"], "Assignment");
        assert_eq!(value["status"], "Pending");
        assert_eq!(value["badge"], "DUE_SOON");
    }

    #[test]
    fn ids_are_global_across_users() {
        let mut store = ApiStore::new();
        let first = store
            .create(1, "a".into(), String::new(), Category::Quiz, iso_in_days(5))
            .id;
        let second = store
            .create(2, "b".into(), String::new(), Category::Quiz, iso_in_days(5))
            .id;
        assert_eq!((first, second), (1, 2));
    }
}
