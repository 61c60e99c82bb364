use dioxus::prelude::*;
use shared_types::{AppDefinition, WindowState};

use super::clock::Clock;

#[derive(Clone, Copy, PartialEq)]
enum DockStatus {
    Closed,
    Minimized,
    Open,
    Active,
}

fn dock_status(app_id: &str, windows: &[WindowState], active_window: Option<&str>) -> DockStatus {
    match windows.iter().find(|w| w.app_id == app_id) {
        None => DockStatus::Closed,
        Some(w) if w.minimized => DockStatus::Minimized,
        Some(w) if active_window == Some(w.id.as_str()) => DockStatus::Active,
        Some(_) => DockStatus::Open,
    }
}

#[component]
pub fn Dock(
    is_mobile: bool,
    apps: Vec<AppDefinition>,
    windows: Vec<WindowState>,
    active_window: Option<String>,
    showing_desktop: bool,
    on_activate_app: Callback<String>,
    on_show_desktop: Callback<()>,
    current_theme: String,
    on_toggle_theme: Callback<()>,
) -> Element {
    let running = windows.len();

    rsx! {
        div {
            class: "dock",
            style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem 1rem; background: var(--promptbar-bg, #111827); border-top: 1px solid var(--border-color, #374151); position: relative; z-index: 10001;",

            button {
                class: "dock-theme-btn",
                style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: var(--window-bg, #1f2937); color: var(--text-secondary, #9ca3af); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0;",
                onclick: move |_| on_toggle_theme.call(()),
                title: "Toggle theme",
                if current_theme == "dark" { "☀️" } else { "🌙" }
            }

            div {
                class: "dock-apps",
                style: "flex: 1; display: flex; align-items: center; justify-content: center; gap: 0.25rem; overflow-x: auto; min-width: 0;",
                for app in apps.iter() {
                    DockButton {
                        key: "{app.id}",
                        app: app.clone(),
                        status: dock_status(&app.id, &windows, active_window.as_deref()),
                        compact: is_mobile,
                        on_activate: on_activate_app,
                    }
                }
            }

            Clock { compact: is_mobile }

            button {
                class: "dock-show-desktop",
                style: if showing_desktop {
                    "height: 32px; padding: 0 0.6rem; background: var(--accent-bg, #3b82f6); color: var(--accent-text, white); border: none; border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0; font-size: 0.75rem;"
                } else {
                    "height: 32px; padding: 0 0.6rem; background: var(--window-bg, #1f2937); color: var(--text-secondary, #9ca3af); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer; flex-shrink: 0; font-size: 0.75rem;"
                },
                disabled: running == 0,
                title: if showing_desktop { "Restore windows" } else { "Show desktop" },
                onclick: move |_| on_show_desktop.call(()),
                if is_mobile { "▭" } else if showing_desktop { "Restore windows" } else { "Show desktop" }
            }
        }
    }
}

#[component]
fn DockButton(
    app: AppDefinition,
    status: DockStatus,
    compact: bool,
    on_activate: Callback<String>,
) -> Element {
    let background = match status {
        DockStatus::Active => "var(--accent-bg, #3b82f6)",
        DockStatus::Open | DockStatus::Minimized => "var(--window-bg, #1f2937)",
        DockStatus::Closed => "transparent",
    };
    let indicator = match status {
        DockStatus::Closed => "transparent",
        DockStatus::Minimized => "var(--text-muted, #64748b)",
        DockStatus::Open | DockStatus::Active => "var(--accent-text, #ffffff)",
    };
    let size = if compact { "32px" } else { "38px" };
    let app_id = app.id.clone();

    rsx! {
        button {
            class: if status == DockStatus::Closed { "running-app" } else { "running-app open" },
            style: "position: relative; width: {size}; height: {size}; flex-shrink: 0; display: flex; align-items: center; justify-content: center; background: {background}; border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 1.25rem;",
            title: "{app.name}",
            "aria-pressed": if status == DockStatus::Active { "true" } else { "false" },
            onclick: move |_| on_activate.call(app_id.clone()),
            "{app.icon}"
            span {
                style: "position: absolute; bottom: 2px; left: 50%; transform: translateX(-50%); width: 4px; height: 4px; border-radius: 999px; background: {indicator};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: &str, app_id: &str, minimized: bool) -> WindowState {
        WindowState {
            id: id.to_string(),
            app_id: app_id.to_string(),
            title: app_id.to_string(),
            x: 0,
            y: 0,
            width: 300,
            height: 200,
            z_index: 100,
            minimized,
            maximized: false,
            restore_bounds: None,
        }
    }

    #[test]
    fn dock_status_reflects_window_lifecycle() {
        let windows = vec![window("w1", "todo", false), window("w2", "notepad", true)];
        assert!(matches!(dock_status("todo", &windows, Some("w1")), DockStatus::Active));
        assert!(matches!(dock_status("todo", &windows, None), DockStatus::Open));
        assert!(matches!(dock_status("notepad", &windows, Some("w1")), DockStatus::Minimized));
        assert!(matches!(dock_status("weather", &windows, Some("w1")), DockStatus::Closed));
    }
}
