//! Window operations dispatched from the shell's callbacks.
//!
//! Unknown window ids are logged and ignored; they only occur when a stale
//! event arrives for a window that was just closed.

use desk_core::{DeskResult, WindowManager};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use shared_types::WindowBounds;

use crate::desktop::toasts::Toaster;

fn apply(
    mut manager: Signal<WindowManager>,
    action: &str,
    op: impl FnOnce(&mut WindowManager) -> DeskResult<()>,
) {
    if let Err(e) = op(&mut *manager.write()) {
        warn!("Failed to {}: {}", action, e);
    }
}

pub fn open_app_window(mut manager: Signal<WindowManager>, mut toaster: Toaster, app_id: &str) {
    let result = manager.write().open_app(app_id);
    match result {
        Ok(window_id) => debug!("Opened {} in {}", app_id, window_id),
        Err(e) => toaster.error(format!("Could not open {app_id}: {e}")),
    }
}

pub fn activate_app_action(mut manager: Signal<WindowManager>, mut toaster: Toaster, app_id: &str) {
    let result = manager.write().activate_app(app_id);
    if let Err(e) = result {
        toaster.error(format!("Could not open {app_id}: {e}"));
    }
}

pub fn close_window_action(manager: Signal<WindowManager>, window_id: &str) {
    apply(manager, "close window", |m| m.close(window_id));
}

pub fn focus_window_action(manager: Signal<WindowManager>, window_id: &str) {
    if manager.peek().active_window() == Some(window_id) {
        return;
    }
    apply(manager, "focus window", |m| m.focus(window_id));
}

pub fn minimize_window_action(manager: Signal<WindowManager>, window_id: &str) {
    apply(manager, "minimize window", |m| m.minimize(window_id));
}

pub fn maximize_window_action(manager: Signal<WindowManager>, window_id: &str, canvas: (u32, u32)) {
    apply(manager, "maximize window", |m| m.maximize(window_id, canvas));
}

pub fn restore_window_action(manager: Signal<WindowManager>, window_id: &str) {
    apply(manager, "restore window", |m| m.restore(window_id));
}

pub fn set_window_bounds_action(
    manager: Signal<WindowManager>,
    window_id: &str,
    bounds: WindowBounds,
) {
    let unchanged = manager
        .peek()
        .window(window_id)
        .is_some_and(|w| w.bounds() == bounds);
    if unchanged {
        return;
    }
    apply(manager, "update window bounds", |m| m.set_bounds(window_id, bounds));
}

pub fn toggle_show_desktop_action(mut manager: Signal<WindowManager>) {
    manager.write().toggle_show_desktop();
}

pub fn cycle_focus_action(mut manager: Signal<WindowManager>) {
    if let Some(window_id) = manager.write().cycle_focus() {
        debug!("Cycled focus to {}", window_id);
    }
}
