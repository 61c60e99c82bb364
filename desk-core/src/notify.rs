//! Transient toast notifications shared by every widget.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    fn ttl(self) -> Duration {
        match self {
            ToastLevel::Info | ToastLevel::Success => Duration::seconds(4),
            ToastLevel::Error => Duration::seconds(6),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>, now: DateTime<Utc>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            expires_at: now + level.ttl(),
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts; returns true when anything was removed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let mut n = Notifications::new();
        let a = n.push(ToastLevel::Info, "a", t0());
        let b = n.push(ToastLevel::Error, "b", t0());
        assert!(b > a);
        assert_eq!(n.toasts().len(), 2);
    }

    #[test]
    fn errors_outlive_info_toasts() {
        let mut n = Notifications::new();
        n.push(ToastLevel::Info, "saved", t0());
        n.push(ToastLevel::Error, "fetch failed", t0());

        assert!(n.prune(t0() + Duration::seconds(5)));
        assert_eq!(n.toasts().len(), 1);
        assert_eq!(n.toasts()[0].level, ToastLevel::Error);

        assert!(n.prune(t0() + Duration::seconds(7)));
        assert!(n.is_empty());
    }

    #[test]
    fn oldest_toasts_are_dropped_past_capacity() {
        let mut n = Notifications::new();
        for i in 0..7 {
            n.push(ToastLevel::Info, format!("toast {i}"), t0());
        }
        assert_eq!(n.toasts().len(), MAX_TOASTS);
        assert_eq!(n.toasts()[0].message, "toast 2");
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut n = Notifications::new();
        let id = n.push(ToastLevel::Success, "copied", t0());
        n.dismiss(id);
        assert!(n.is_empty());
        assert!(!n.prune(t0()));
    }
}
