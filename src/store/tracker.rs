use crate::store::item::{Category, Task};
use chrono::{DateTime, Local};

/// One user's task list. Ids are per-list, starting at 1.
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u32,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    pub fn add(
        &mut self,
        title: String,
        description: String,
        category: Category,
        due: DateTime<Local>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title,
            description,
            category,
            due,
            done: false,
        });
        id
    }

    /// Marking done removes the task outright; done items are not retained.
    /// False when the id matches nothing (and nothing else is touched).
    pub fn mark_done(&mut self, id: u32) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn add_one(list: &mut TaskList, title: &str) -> u32 {
        list.add(
            title.to_string(),
            String::new(),
            Category::Quiz,
            Local::now() + Duration::days(5),
        )
    }

    #[test]
    fn ids_start_at_one_and_increment() {
        let mut list = TaskList::new();
        assert_eq!(add_one(&mut list, "a"), 1);
        assert_eq!(add_one(&mut list, "b"), 2);
        assert_eq!(list.active().count(), 2);
    }

    #[test]
    fn done_removes_from_the_active_list() {
        let mut list = TaskList::new();
        let id = add_one(&mut list, "a");
        assert!(list.mark_done(id));
        assert_eq!(list.active().count(), 0);
    }

    #[test]
    fn done_on_unknown_id_mutates_nothing() {
        let mut list = TaskList::new();
        add_one(&mut list, "a");
        assert!(!list.mark_done(42));
        assert_eq!(list.active().count(), 1);
    }
}
