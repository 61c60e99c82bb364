//! Daily habit tracker with streaks.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    /// Completed days, sorted ascending without duplicates
    #[serde(default)]
    pub completed: Vec<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Habit {
    pub fn is_done(&self, date: NaiveDate) -> bool {
        self.completed.binary_search(&date).is_ok()
    }

    /// Consecutive completed days ending today, or ending yesterday when
    /// today has not been ticked yet.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let start = if self.is_done(today) {
            today
        } else {
            match today.pred_opt() {
                Some(yesterday) if self.is_done(yesterday) => yesterday,
                _ => return 0,
            }
        };

        let mut streak = 0;
        let mut day = start;
        while self.is_done(day) {
            streak += 1;
            match day.pred_opt() {
                Some(prev) => day = prev,
                None => break,
            }
        }
        streak
    }

    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut prev: Option<NaiveDate> = None;
        for &day in &self.completed {
            run = match prev {
                Some(p) if p.succ_opt() == Some(day) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            prev = Some(day);
        }
        longest
    }

    /// The last seven days, oldest first, with their completion flag.
    pub fn week(&self, today: NaiveDate) -> Vec<(NaiveDate, bool)> {
        (0..7u64)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|day| (day, self.is_done(day)))
            .collect()
    }

    /// Share of the last `days` days (today included) that were completed.
    pub fn completion_rate(&self, days: u32, today: NaiveDate) -> f64 {
        if days == 0 {
            return 0.0;
        }
        let done = (0..u64::from(days))
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .filter(|&day| self.is_done(day))
            .count();
        done as f64 / f64::from(days)
    }

    fn toggle(&mut self, date: NaiveDate) -> bool {
        match self.completed.binary_search(&date) {
            Ok(idx) => {
                self.completed.remove(idx);
                false
            }
            Err(idx) => {
                self.completed.insert(idx, date);
                true
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitTracker {
    pub habits: Vec<Habit>,
}

impl HabitTracker {
    pub fn add(&mut self, name: &str, now: DateTime<Utc>) -> DeskResult<String> {
        let name = self.check_name(name, None)?;
        let id = uuid::Uuid::new_v4().to_string();
        self.habits.push(Habit {
            id: id.clone(),
            name,
            completed: Vec::new(),
            created_at: now,
        });
        Ok(id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        self.habits.len() != before
    }

    pub fn rename(&mut self, id: &str, name: &str) -> DeskResult<()> {
        let name = self.check_name(name, Some(id))?;
        self.habit_mut(id)?.name = name;
        Ok(())
    }

    /// Flip completion for `date`; returns the new state.
    pub fn toggle(&mut self, id: &str, date: NaiveDate) -> DeskResult<bool> {
        Ok(self.habit_mut(id)?.toggle(date))
    }

    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Restore the sorted/unique invariant on data loaded from storage.
    pub fn normalize(&mut self) {
        for habit in &mut self.habits {
            habit.completed.sort_unstable();
            habit.completed.dedup();
        }
    }

    fn habit_mut(&mut self, id: &str) -> DeskResult<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| DeskError::invalid(format!("Unknown habit: {id}")))
    }

    fn check_name(&self, name: &str, ignore_id: Option<&str>) -> DeskResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeskError::invalid("Habit name cannot be empty"));
        }
        let lowered = name.to_lowercase();
        let taken = self
            .habits
            .iter()
            .filter(|h| Some(h.id.as_str()) != ignore_id)
            .any(|h| h.name.to_lowercase() == lowered);
        if taken {
            return Err(DeskError::invalid(format!("Habit \"{name}\" already exists")));
        }
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn tracker_with_days(days: &[u32]) -> (HabitTracker, String) {
        let mut tracker = HabitTracker::default();
        let id = tracker.add("Read", Utc::now()).unwrap();
        for &d in days {
            tracker.toggle(&id, day(d)).unwrap();
        }
        (tracker, id)
    }

    #[test]
    fn names_are_trimmed_and_unique_ignoring_case() {
        let mut tracker = HabitTracker::default();
        tracker.add("  Stretch ", Utc::now()).unwrap();
        assert_eq!(tracker.habits[0].name, "Stretch");
        assert!(tracker.add("stretch", Utc::now()).is_err());
        assert!(tracker.add("", Utc::now()).is_err());
    }

    #[test]
    fn rename_allows_own_name_but_not_anothers() {
        let mut tracker = HabitTracker::default();
        let a = tracker.add("Walk", Utc::now()).unwrap();
        tracker.add("Run", Utc::now()).unwrap();
        tracker.rename(&a, "WALK").unwrap();
        assert_eq!(tracker.habit(&a).unwrap().name, "WALK");
        assert!(tracker.rename(&a, "run").is_err());
    }

    #[test]
    fn toggle_keeps_dates_sorted_and_unique() {
        let (mut tracker, id) = tracker_with_days(&[5, 1, 3]);
        assert_eq!(tracker.habit(&id).unwrap().completed, vec![day(1), day(3), day(5)]);
        assert!(!tracker.toggle(&id, day(3)).unwrap());
        assert_eq!(tracker.habit(&id).unwrap().completed, vec![day(1), day(5)]);
    }

    #[test]
    fn current_streak_counts_from_today_or_yesterday() {
        let (tracker, id) = tracker_with_days(&[7, 8, 9]);
        let habit = tracker.habit(&id).unwrap();
        assert_eq!(habit.current_streak(day(9)), 3);
        // Today not ticked yet; streak still alive through yesterday.
        assert_eq!(habit.current_streak(day(10)), 3);
        assert_eq!(habit.current_streak(day(11)), 0);
    }

    #[test]
    fn longest_streak_finds_best_run() {
        let (tracker, id) = tracker_with_days(&[1, 2, 4, 5, 6, 9]);
        assert_eq!(tracker.habit(&id).unwrap().longest_streak(), 3);
        assert_eq!(HabitTracker::default().habits.len(), 0);
    }

    #[test]
    fn week_and_completion_rate() {
        let (tracker, id) = tracker_with_days(&[4, 6, 10]);
        let habit = tracker.habit(&id).unwrap();
        let week = habit.week(day(10));
        assert_eq!(week.len(), 7);
        assert_eq!(week[0], (day(4), true));
        assert_eq!(week[6], (day(10), true));
        assert_eq!(week.iter().filter(|(_, done)| *done).count(), 3);

        assert!((habit.completion_rate(10, day(10)) - 0.3).abs() < 1e-9);
        assert_eq!(habit.completion_rate(0, day(10)), 0.0);
    }

    #[test]
    fn normalize_repairs_loaded_data() {
        let (mut tracker, id) = tracker_with_days(&[]);
        tracker.habits[0].completed = vec![day(3), day(1), day(3)];
        tracker.normalize();
        assert_eq!(tracker.habit(&id).unwrap().completed, vec![day(1), day(3)]);
    }
}
