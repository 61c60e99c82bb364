use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::AppDefinition;

/// Clicks closer together than this open the app only once.
const OPEN_DEBOUNCE_MS: i64 = 500;

#[component]
pub fn DesktopIcons(
    apps: Vec<AppDefinition>,
    on_open_app: Callback<String>,
    is_mobile: bool,
) -> Element {
    let columns = if is_mobile { 3 } else { 2 };
    let icon_size = if is_mobile { "4rem" } else { "5rem" };

    rsx! {
        div {
            class: "desktop-icons",
            style: "position: absolute; top: 1rem; left: 1rem; z-index: 1; display: grid; grid-template-columns: repeat({columns}, {icon_size}); gap: 1rem; padding: 0.5rem;",

            for app in apps {
                DesktopIcon {
                    key: "{app.id}",
                    app: app.clone(),
                    on_open_app,
                    is_mobile,
                }
            }
        }
    }
}

#[component]
pub fn DesktopIcon(app: AppDefinition, on_open_app: Callback<String>, is_mobile: bool) -> Element {
    let icon_size = if is_mobile { "3rem" } else { "3.5rem" };
    let font_size = if is_mobile { "2rem" } else { "2.25rem" };
    let mut last_open_ms = use_signal(|| 0i64);
    let mut is_pressed = use_signal(|| false);

    let app_id = app.id.clone();
    let handle_open = move |_| {
        let now = js_sys::Date::now() as i64;
        if now - last_open_ms() >= OPEN_DEBOUNCE_MS {
            on_open_app.call(app_id.clone());
            last_open_ms.set(now);
        }

        is_pressed.set(true);
        spawn(async move {
            TimeoutFuture::new(150).await;
            is_pressed.set(false);
        });
    };

    let pressed = is_pressed();
    let scale = if pressed { "0.95" } else { "1.0" };
    let border_color = if pressed { "#60a5fa" } else { "var(--border-color, #334155)" };

    rsx! {
        button {
            class: "desktop-icon",
            title: "Open {app.name}",
            style: "display: flex; flex-direction: column; align-items: center; gap: 0.4rem; padding: 0.5rem; background: transparent; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; transition: transform 0.15s ease-out; transform: scale({scale});",
            ondoubleclick: handle_open,
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    on_open_app.call(app.id.clone());
                }
            },
            onmouseleave: move |_| is_pressed.set(false),

            div {
                style: "width: {icon_size}; height: {icon_size}; display: flex; align-items: center; justify-content: center; background: var(--dock-bg, rgba(30, 41, 59, 0.8)); border-radius: var(--radius-lg, 12px); backdrop-filter: blur(8px); border: 1px solid {border_color};",
                span { style: "font-size: {font_size}; pointer-events: none; user-select: none;", "{app.icon}" }
            }
            span {
                style: "font-size: 0.75rem; color: var(--text-secondary, #94a3b8); text-align: center; max-width: 100%; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; text-shadow: 0 1px 2px rgba(0,0,0,0.5); pointer-events: none; user-select: none;",
                "{app.name}"
            }
        }
    }
}
