use desk_core::WindowManager;
use dioxus::prelude::*;
use shared_types::{AppDefinition, WindowBounds};

use crate::desktop::components::desktop_icons::DesktopIcons;
use crate::desktop::components::status_views::EmptyDesktopHint;
use crate::desktop_window::FloatingWindow;

#[component]
pub fn WorkspaceCanvas(
    apps: Vec<AppDefinition>,
    on_open_app: Callback<String>,
    is_mobile: bool,
    manager: Signal<WindowManager>,
    viewport: Signal<(u32, u32)>,
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_bounds: Callback<(String, WindowBounds)>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_restore: Callback<String>,
) -> Element {
    let viewport_value = *viewport.read();
    let (windows, active_window, showing_desktop) = {
        let manager = manager.read();
        let windows: Vec<_> = manager.visible_windows().into_iter().cloned().collect();
        (
            windows,
            manager.active_window().map(str::to_string),
            manager.is_showing_desktop(),
        )
    };

    rsx! {
        div {
            class: "desktop-workspace",
            style: "flex: 1; display: flex; flex-direction: column; overflow: hidden; position: relative;",

            DesktopIcons {
                apps,
                on_open_app,
                is_mobile,
            }

            div {
                class: "window-canvas",
                style: "flex: 1; position: relative; overflow: hidden;",

                if windows.is_empty() {
                    EmptyDesktopHint { showing_desktop }
                }

                for window in windows.iter() {
                    FloatingWindow {
                        key: "{window.id}",
                        window: window.clone(),
                        is_active: active_window.as_ref() == Some(&window.id),
                        viewport: viewport_value,
                        on_close,
                        on_focus,
                        on_bounds,
                        on_minimize,
                        on_maximize,
                        on_restore,
                    }
                }
            }
        }
    }
}
