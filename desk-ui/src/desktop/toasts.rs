//! Widget-facing handle onto the shared toast queue.

use chrono::Utc;
use desk_core::{Notifications, ToastLevel};
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Toaster(Signal<Notifications>);

impl Toaster {
    pub fn new(queue: Signal<Notifications>) -> Self {
        Self(queue)
    }

    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        self.0.write().push(level, message, Utc::now())
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    /// Log and surface a failure.
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        dioxus_logger::tracing::warn!("{}", message);
        self.push(ToastLevel::Error, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.0.write().dismiss(id);
    }
}

/// Toaster provided by the desktop shell.
pub fn use_toaster() -> Toaster {
    Toaster::new(use_context::<Signal<Notifications>>())
}
