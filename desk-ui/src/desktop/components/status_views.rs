use dioxus::prelude::*;

#[component]
pub fn EmptyDesktopHint(showing_desktop: bool) -> Element {
    let message = if showing_desktop {
        "Windows are hidden. Use the dock's desktop button to bring them back."
    } else {
        "Double-click an icon or pick an app from the dock."
    };
    rsx! {
        div {
            class: "empty-desktop-hint",
            style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none; color: var(--text-muted, #6b7280); font-size: 0.875rem;",
            "{message}"
        }
    }
}
