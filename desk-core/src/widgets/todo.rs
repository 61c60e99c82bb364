use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub done: bool,
    /// Lists saved before priorities existed load as medium.
    #[serde(default)]
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Priority::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Active => !item.done,
            TodoFilter::Completed => item.done,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub items: Vec<TodoItem>,
}

fn clean_text(text: &str) -> DeskResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DeskError::invalid("Task text cannot be empty"));
    }
    Ok(text.to_string())
}

impl TodoList {
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> DeskResult<String> {
        self.add_with_priority(text, Priority::default(), now)
    }

    pub fn add_with_priority(
        &mut self,
        text: &str,
        priority: Priority,
        now: DateTime<Utc>,
    ) -> DeskResult<String> {
        let text = clean_text(text)?;
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(TodoItem {
            id: id.clone(),
            text,
            done: false,
            priority,
            created_at: now,
        });
        Ok(id)
    }

    pub fn toggle(&mut self, id: &str) -> DeskResult<bool> {
        let item = self.item_mut(id)?;
        item.done = !item.done;
        Ok(item.done)
    }

    pub fn edit(&mut self, id: &str, text: &str) -> DeskResult<()> {
        let text = clean_text(text)?;
        self.item_mut(id)?.text = text;
        Ok(())
    }

    pub fn set_priority(&mut self, id: &str, priority: Priority) -> DeskResult<()> {
        self.item_mut(id)?.priority = priority;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Returns how many items were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.done);
        before - self.items.len()
    }

    /// Mark everything done, or everything open when all are already done.
    pub fn toggle_all(&mut self) {
        let all_done = !self.items.is_empty() && self.items.iter().all(|item| item.done);
        for item in &mut self.items {
            item.done = !all_done;
        }
    }

    pub fn filtered(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Filtered items, highest priority first. Open tasks come before done
    /// ones of the same priority, then oldest first.
    pub fn by_priority(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        let mut items = self.filtered(filter);
        items.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then(a.done.cmp(&b.done))
                .then(a.created_at.cmp(&b.created_at))
        });
        items
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    fn item_mut(&mut self, id: &str) -> DeskResult<&mut TodoItem> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DeskError::invalid(format!("Unknown task: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut list = TodoList::default();
        let id = list.add("  buy milk ", now()).unwrap();
        assert_eq!(list.items[0].text, "buy milk");
        assert_eq!(list.items[0].id, id);
        assert!(matches!(list.add("   ", now()), Err(DeskError::InvalidInput(_))));
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn filters_and_remaining_count() {
        let mut list = TodoList::default();
        let a = list.add("a", now()).unwrap();
        list.add("b", now()).unwrap();
        list.add("c", now()).unwrap();
        assert!(list.toggle(&a).unwrap());

        assert_eq!(list.remaining(), 2);
        assert_eq!(list.filtered(TodoFilter::All).len(), 3);
        assert_eq!(list.filtered(TodoFilter::Active).len(), 2);
        let done = list.filtered(TodoFilter::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].text, "a");
    }

    #[test]
    fn edit_keeps_id_and_validates() {
        let mut list = TodoList::default();
        let id = list.add("draft", now()).unwrap();
        list.edit(&id, " final ").unwrap();
        assert_eq!(list.items[0].text, "final");
        assert!(list.edit(&id, "").is_err());
        assert!(list.edit("missing", "x").is_err());
    }

    #[test]
    fn clear_completed_reports_count() {
        let mut list = TodoList::default();
        let a = list.add("a", now()).unwrap();
        let b = list.add("b", now()).unwrap();
        list.add("c", now()).unwrap();
        list.toggle(&a).unwrap();
        list.toggle(&b).unwrap();
        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn toggle_all_flips_between_all_done_and_all_open() {
        let mut list = TodoList::default();
        let a = list.add("a", now()).unwrap();
        list.add("b", now()).unwrap();
        list.toggle(&a).unwrap();

        list.toggle_all();
        assert_eq!(list.remaining(), 0);
        list.toggle_all();
        assert_eq!(list.remaining(), 2);
    }

    #[test]
    fn sorts_high_priority_first_then_open_then_oldest() {
        let t0 = now();
        let later = t0 + chrono::Duration::seconds(5);
        let mut list = TodoList::default();
        let low = list.add_with_priority("low", Priority::Low, t0).unwrap();
        let med_new = list.add("medium new", later).unwrap();
        let med_old = list.add("medium old", t0).unwrap();
        let high_done = list.add_with_priority("high done", Priority::High, later).unwrap();
        let high = list.add_with_priority("high", Priority::High, later).unwrap();
        list.toggle(&high_done).unwrap();

        let order: Vec<&str> = list
            .by_priority(TodoFilter::All)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                high.as_str(),
                high_done.as_str(),
                med_old.as_str(),
                med_new.as_str(),
                low.as_str(),
            ]
        );

        let active: Vec<&str> = list
            .by_priority(TodoFilter::Active)
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(active, vec!["high", "medium old", "medium new", "low"]);
    }

    #[test]
    fn set_priority_updates_and_rejects_unknown() {
        let mut list = TodoList::default();
        let id = list.add("a", now()).unwrap();
        assert_eq!(list.items[0].priority, Priority::Medium);
        list.set_priority(&id, Priority::High).unwrap();
        assert_eq!(list.items[0].priority, Priority::High);
        assert!(list.set_priority("missing", Priority::Low).is_err());
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn items_saved_without_priority_load_as_medium() {
        let json = r#"{"items":[{"id":"1","text":"old","done":false,"created_at":"2024-01-01T00:00:00Z"}]}"#;
        let list: TodoList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items[0].priority, Priority::Medium);

        let saved = serde_json::to_string(&list).unwrap();
        assert!(saved.contains(r#""priority":"medium""#));
    }

    #[test]
    fn remove_unknown_is_false() {
        let mut list = TodoList::default();
        let a = list.add("a", now()).unwrap();
        assert!(list.remove(&a));
        assert!(!list.remove(&a));
    }
}
