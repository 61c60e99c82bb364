use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use desk_core::{core_apps, is_mobile_viewport, Notifications, WindowManager};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::WindowBounds;

use crate::components::styles::WIDGET_STYLES;
use crate::desktop::actions;
use crate::desktop::components::dock::Dock;
use crate::desktop::components::toast_stack::ToastStack;
use crate::desktop::components::workspace_canvas::WorkspaceCanvas;
use crate::desktop::effects;
use crate::desktop::theme::{
    apply_theme_to_document, next_theme, set_cached_theme_preference, DEFAULT_THEME,
};
use crate::desktop::toasts::Toaster;
use crate::interop::{get_viewport_size, get_window_canvas_size};

const TOAST_PRUNE_INTERVAL_MS: u32 = 500;

#[component]
pub fn DesktopShell() -> Element {
    // Toast queue - provided to every widget through `use_toaster`
    let mut notifications = use_context_provider(|| Signal::new(Notifications::new()));
    let toaster = Toaster::new(notifications);

    let manager = use_signal(|| WindowManager::new(core_apps()));
    let viewport = use_signal(get_viewport_size);
    let theme_initialized = use_signal(|| false);
    let mut current_theme = use_signal(|| DEFAULT_THEME.to_string());
    let toast_pump_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let toast_pump_alive = toast_pump_alive.clone();
        use_drop(move || {
            toast_pump_alive.set(false);
        });
    }

    use_effect(move || {
        spawn(async move {
            effects::track_viewport(viewport).await;
        });
    });

    use_effect(move || {
        effects::initialize_theme(theme_initialized, current_theme);
    });

    use_effect(move || {
        effects::apply_document_layout(is_mobile_viewport(*viewport.read()));
    });

    {
        let toast_pump_alive = toast_pump_alive.clone();
        use_effect(move || {
            let alive = toast_pump_alive.clone();
            spawn(async move {
                while alive.get() {
                    TimeoutFuture::new(TOAST_PRUNE_INTERVAL_MS).await;
                    let now = Utc::now();
                    let expired = notifications
                        .peek()
                        .toasts()
                        .iter()
                        .any(|t| t.expires_at <= now);
                    if expired {
                        notifications.write().prune(now);
                    }
                }
            });
        });
    }

    let toggle_theme = use_callback(move |_| {
        let next = next_theme(&current_theme());
        current_theme.set(next.clone());
        apply_theme_to_document(&next);
        set_cached_theme_preference(&next);
    });

    let open_app_cb = use_callback(move |app_id: String| {
        actions::open_app_window(manager, toaster, &app_id);
    });

    let activate_app_cb = use_callback(move |app_id: String| {
        actions::activate_app_action(manager, toaster, &app_id);
    });

    let close_window_cb = use_callback(move |window_id: String| {
        actions::close_window_action(manager, &window_id);
    });

    let focus_window_cb = use_callback(move |window_id: String| {
        actions::focus_window_action(manager, &window_id);
    });

    let bounds_window_cb = use_callback(move |(window_id, bounds): (String, WindowBounds)| {
        actions::set_window_bounds_action(manager, &window_id, bounds);
    });

    let minimize_window_cb = use_callback(move |window_id: String| {
        actions::minimize_window_action(manager, &window_id);
    });

    let maximize_window_cb = use_callback(move |window_id: String| {
        let canvas = get_window_canvas_size().unwrap_or_else(|| *viewport.peek());
        actions::maximize_window_action(manager, &window_id, canvas);
    });

    let restore_window_cb = use_callback(move |window_id: String| {
        actions::restore_window_action(manager, &window_id);
    });

    let show_desktop_cb = use_callback(move |_| {
        actions::toggle_show_desktop_action(manager);
    });

    let on_shell_keydown = move |e: KeyboardEvent| {
        let modifiers = e.modifiers();
        if modifiers.alt() && e.code() == Code::Backquote {
            e.prevent_default();
            actions::cycle_focus_action(manager);
        } else if modifiers.ctrl() && modifiers.alt() && e.code() == Code::KeyD {
            e.prevent_default();
            actions::toggle_show_desktop_action(manager);
        }
    };

    let is_mobile = is_mobile_viewport(*viewport.read());
    let (apps, windows, active_window, showing_desktop) = {
        let manager = manager.read();
        (
            manager.apps().to_vec(),
            manager.state().windows.clone(),
            manager.active_window().map(str::to_string),
            manager.is_showing_desktop(),
        )
    };

    rsx! {
        style { {DEFAULT_TOKENS} }
        style { {WIDGET_STYLES} }

        div {
            class: "desktop-shell",
            style: "width: 100vw; height: 100dvh; min-height: 100dvh; max-height: 100dvh; display: flex; flex-direction: column; overflow: hidden;",
            onkeydown: on_shell_keydown,

            WorkspaceCanvas {
                apps: apps.clone(),
                on_open_app: open_app_cb,
                is_mobile,
                manager,
                viewport,
                on_close: close_window_cb,
                on_focus: focus_window_cb,
                on_bounds: bounds_window_cb,
                on_minimize: minimize_window_cb,
                on_maximize: maximize_window_cb,
                on_restore: restore_window_cb,
            }

            Dock {
                is_mobile,
                apps,
                windows,
                active_window,
                showing_desktop,
                on_activate_app: activate_app_cb,
                on_show_desktop: show_desktop_cb,
                current_theme: current_theme(),
                on_toggle_theme: toggle_theme,
            }
        }

        ToastStack { notifications }
    }
}

const DEFAULT_TOKENS: &str = r#"
:root {
    /* Colors */
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
    --accent-text: #ffffff;
    --border-color: #334155;

    /* Semantic colors */
    --window-bg: var(--bg-secondary);
    --titlebar-bg: var(--bg-primary);
    --dock-bg: rgba(30, 41, 59, 0.8);
    --promptbar-bg: var(--bg-primary);
    --input-bg: var(--bg-primary);
    --hover-bg: rgba(255, 255, 255, 0.1);
    --danger-bg: #ef4444;
    --danger-text: #ef4444;
    --success-bg: #10b981;
    --warning-bg: #f59e0b;

    /* Spacing & Radius */
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;

    /* Shadows */
    --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.3);
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

:root[data-theme="light"] {
    --bg-primary: #f8fafc;
    --bg-secondary: #ffffff;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #64748b;
    --accent-bg: #2563eb;
    --accent-bg-hover: #1d4ed8;
    --accent-text: #ffffff;
    --border-color: #cbd5e1;
    --window-bg: var(--bg-secondary);
    --titlebar-bg: #e2e8f0;
    --dock-bg: rgba(255, 255, 255, 0.9);
    --promptbar-bg: #e2e8f0;
    --input-bg: #f1f5f9;
    --hover-bg: rgba(15, 23, 42, 0.08);
    --danger-bg: #dc2626;
    --danger-text: #b91c1c;
    --success-bg: #059669;
    --warning-bg: #d97706;
}

* {
    box-sizing: border-box;
}

html, body, #main {
    width: 100%;
    height: 100%;
    overflow: hidden;
    overscroll-behavior: none;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}

.desktop-icon:hover {
    background: var(--hover-bg, rgba(255, 255, 255, 0.1));
}

.running-app:hover {
    filter: brightness(1.15);
}

@media (max-width: 1024px) {
    .desktop-icons {
        gap: 0.5rem !important;
    }

    .dock {
        padding: 0.5rem !important;
    }
}
"#;
