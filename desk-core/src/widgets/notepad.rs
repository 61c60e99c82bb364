use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            UNTITLED
        } else {
            title
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
}

pub fn stats(body: &str) -> TextStats {
    TextStats {
        words: body.split_whitespace().count(),
        chars: body.chars().count(),
        lines: if body.is_empty() { 0 } else { body.lines().count() },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notepad {
    pub notes: Vec<Note>,
    #[serde(default)]
    pub selected: Option<String>,
}

impl Notepad {
    pub fn create(&mut self, now: DateTime<Utc>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.notes.push(Note {
            id: id.clone(),
            title: UNTITLED.to_string(),
            body: String::new(),
            updated_at: now,
        });
        self.selected = Some(id.clone());
        id
    }

    pub fn update(
        &mut self,
        id: &str,
        title: &str,
        body: &str,
        now: DateTime<Utc>,
    ) -> DeskResult<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| DeskError::invalid(format!("Unknown note: {id}")))?;
        note.title = title.to_string();
        note.body = body.to_string();
        note.updated_at = now;
        Ok(())
    }

    pub fn select(&mut self, id: &str) -> bool {
        if self.note(id).is_some() {
            self.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    /// Delete a note. If it was selected, selection moves to the most
    /// recently edited remaining note.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = self.most_recent().map(|n| n.id.clone());
        }
        true
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected.as_deref().and_then(|id| self.note(id))
    }

    pub fn most_recent(&self) -> Option<&Note> {
        self.notes.iter().max_by_key(|n| n.updated_at)
    }

    /// Case-insensitive match on title or body, newest first. A blank query
    /// lists everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let query = query.trim().to_lowercase();
        let mut hits: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| {
                query.is_empty()
                    || n.title.to_lowercase().contains(&query)
                    || n.body.to_lowercase().contains(&query)
            })
            .collect();
        hits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(mins: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap() + Duration::minutes(mins)
    }

    #[test]
    fn create_selects_new_untitled_note() {
        let mut pad = Notepad::default();
        let id = pad.create(t(0));
        assert_eq!(pad.selected.as_deref(), Some(id.as_str()));
        assert_eq!(pad.selected_note().unwrap().title, UNTITLED);
    }

    #[test]
    fn remove_moves_selection_to_most_recent() {
        let mut pad = Notepad::default();
        let a = pad.create(t(0));
        let b = pad.create(t(1));
        let c = pad.create(t(2));
        pad.update(&a, "a", "", t(10)).unwrap();

        assert_eq!(pad.selected.as_deref(), Some(c.as_str()));
        assert!(pad.remove(&c));
        assert_eq!(pad.selected.as_deref(), Some(a.as_str()));

        assert!(pad.select(&b));
        assert!(pad.remove(&a));
        assert_eq!(pad.selected.as_deref(), Some(b.as_str()));
        assert!(pad.remove(&b));
        assert_eq!(pad.selected, None);
        assert!(!pad.remove(&b));
    }

    #[test]
    fn search_is_case_insensitive_newest_first() {
        let mut pad = Notepad::default();
        let a = pad.create(t(0));
        let b = pad.create(t(0));
        let c = pad.create(t(0));
        pad.update(&a, "Groceries", "milk, eggs", t(1)).unwrap();
        pad.update(&b, "Ideas", "buy more MILK", t(5)).unwrap();
        pad.update(&c, "Travel", "passport", t(3)).unwrap();

        let hits: Vec<_> = pad.search("milk").iter().map(|n| n.id.clone()).collect();
        assert_eq!(hits, vec![b.clone(), a.clone()]);
        assert_eq!(pad.search("  ").len(), 3);
        assert!(pad.search("nothing").is_empty());
    }

    #[test]
    fn update_unknown_note_fails() {
        let mut pad = Notepad::default();
        assert!(pad.update("nope", "t", "b", t(0)).is_err());
    }

    #[test]
    fn stats_count_words_chars_lines() {
        assert_eq!(stats(""), TextStats::default());
        let s = stats("héllo world\nsecond line\n");
        assert_eq!(s.words, 4);
        assert_eq!(s.chars, 24);
        assert_eq!(s.lines, 2);
    }

    #[test]
    fn display_title_falls_back() {
        let mut pad = Notepad::default();
        let id = pad.create(t(0));
        pad.update(&id, "   ", "", t(1)).unwrap();
        assert_eq!(pad.note(&id).unwrap().display_title(), UNTITLED);
    }
}
