use desk_core::{Notifications, ToastLevel};
use dioxus::prelude::*;

use crate::desktop::toasts::Toaster;

fn accent(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Info => "var(--accent-bg, #3b82f6)",
        ToastLevel::Success => "var(--success-bg, #10b981)",
        ToastLevel::Error => "var(--danger-bg, #ef4444)",
    }
}

#[component]
pub fn ToastStack(notifications: Signal<Notifications>) -> Element {
    let mut toaster = Toaster::new(notifications);
    let toasts = notifications.read().toasts().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            role: "status",
            "aria-live": "polite",
            style: "position: fixed; right: 1rem; bottom: 4.5rem; z-index: 20000; display: flex; flex-direction: column; gap: 0.5rem; max-width: min(90vw, 360px);",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: "toast toast-{toast.level.as_str()}",
                    style: "display: flex; align-items: flex-start; gap: 0.5rem; padding: 0.6rem 0.75rem; background: var(--window-bg, #1f2937); color: var(--text-primary, white); border: 1px solid var(--border-color, #374151); border-left: 4px solid {accent(toast.level)}; border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); font-size: 0.85rem;",
                    span { style: "flex: 1; word-break: break-word;", "{toast.message}" }
                    button {
                        style: "background: transparent; border: none; color: var(--text-muted, #64748b); cursor: pointer; font-size: 1rem; line-height: 1;",
                        "aria-label": "Dismiss",
                        onclick: move |_| toaster.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
