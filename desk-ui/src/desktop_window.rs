use desk_core::{clamp_bounds, get_app_icon, is_mobile_viewport};
use dioxus::prelude::*;
use dioxus_web::WebEventExt;
use shared_types::{WindowBounds, WindowState};
use wasm_bindgen::JsCast;

use crate::components::{
    CurrencyView, HabitsView, JsonToolsView, KanbanView, MixerView, NotepadView, PasswordView,
    PomodoroView, TodoView, UuidSlugView, VideoView, WeatherView,
};

const DRAG_THRESHOLD_PX: i32 = 4;
const KEYBOARD_STEP_PX: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
enum InteractionMode {
    Drag,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct InteractionState {
    mode: InteractionMode,
    pointer_id: i32,
    start_x: i32,
    start_y: i32,
    start_bounds: WindowBounds,
}

impl InteractionState {
    /// Bounds for the pointer at (`x`, `y`), or `None` while still inside the
    /// drag threshold.
    fn bounds_at(&self, x: i32, y: i32) -> Option<WindowBounds> {
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        if dx.abs() < DRAG_THRESHOLD_PX && dy.abs() < DRAG_THRESHOLD_PX {
            return None;
        }
        let start = self.start_bounds;
        Some(match self.mode {
            InteractionMode::Drag => WindowBounds {
                x: start.x + dx,
                y: start.y + dy,
                ..start
            },
            InteractionMode::Resize => WindowBounds {
                width: start.width + dx,
                height: start.height + dy,
                ..start
            },
        })
    }
}

/// Alt+arrows move, Alt+Shift+arrows resize.
fn keyboard_nudge(bounds: WindowBounds, key: &Key, resize: bool) -> Option<WindowBounds> {
    let mut next = bounds;
    let (dx, dy) = match key {
        Key::ArrowLeft => (-KEYBOARD_STEP_PX, 0),
        Key::ArrowRight => (KEYBOARD_STEP_PX, 0),
        Key::ArrowUp => (0, -KEYBOARD_STEP_PX),
        Key::ArrowDown => (0, KEYBOARD_STEP_PX),
        _ => return None,
    };
    if resize {
        next.width += dx;
        next.height += dy;
    } else {
        next.x += dx;
        next.y += dy;
    }
    Some(next)
}

fn pointer_point(e: &PointerEvent) -> (i32, i32) {
    if let Some((x, y)) = e.data().try_as_web_event().and_then(|event| {
        event
            .dyn_ref::<web_sys::PointerEvent>()
            .map(|pointer| (pointer.client_x(), pointer.client_y()))
    }) {
        return (x, y);
    }

    let point = e.data().client_coordinates();
    (point.x as i32, point.y as i32)
}

fn pointer_buttons(e: &PointerEvent) -> u16 {
    e.data()
        .try_as_web_event()
        .and_then(|event| {
            event
                .dyn_ref::<web_sys::PointerEvent>()
                .map(|pointer| pointer.buttons())
        })
        .unwrap_or(1)
}

fn pointer_target_is_window_control(e: &PointerEvent) -> bool {
    e.data()
        .try_as_web_event()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| {
            element.closest("button").ok().flatten().is_some()
                || element.closest(".window-controls").ok().flatten().is_some()
        })
        .unwrap_or(false)
}

fn set_window_pointer_capture(e: &PointerEvent, pointer_id: i32, capture: bool) {
    let Some(window) = e
        .data()
        .try_as_web_event()
        .and_then(|event| event.current_target())
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest(".floating-window").ok().flatten())
    else {
        return;
    };
    let _ = if capture {
        window.set_pointer_capture(pointer_id)
    } else {
        window.release_pointer_capture(pointer_id)
    };
}

#[component]
pub fn FloatingWindow(
    window: WindowState,
    is_active: bool,
    viewport: (u32, u32),
    on_close: Callback<String>,
    on_focus: Callback<String>,
    on_bounds: Callback<(String, WindowBounds)>,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_restore: Callback<String>,
) -> Element {
    let window_id = window.id.clone();
    let is_mobile = is_mobile_viewport(viewport);
    let committed = clamp_bounds(window.bounds(), viewport, is_mobile);

    let mut interaction = use_signal(|| None::<InteractionState>);
    let mut live_bounds = use_signal(|| None::<WindowBounds>);

    let bounds = if interaction().is_some() {
        live_bounds().unwrap_or(committed)
    } else {
        committed
    };

    let window_id_for_focus = window_id.clone();
    let window_id_for_keyboard = window_id.clone();
    let window_id_for_pointer_move = window_id.clone();
    let window_id_for_pointer_up = window_id.clone();
    let window_id_for_pointer_cancel = window_id.clone();
    let window_id_for_title = window_id.clone();
    let window_id_for_resize_pointer = window_id.clone();

    let z_index = window.z_index;
    let active_outline = if is_active && !window.maximized {
        "2px solid var(--accent-bg, #3b82f6)"
    } else {
        "none"
    };
    let window_style = if window.maximized {
        format!(
            "position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: {z_index}; \
             display: flex; flex-direction: column; background: var(--window-bg, #1f2937); \
             border: none; border-radius: 0; overflow: hidden; box-shadow: none;"
        )
    } else {
        format!(
            "position: absolute; left: {}px; top: {}px; width: {}px; height: {}px; z-index: \
             {z_index}; display: flex; flex-direction: column; background: var(--window-bg, \
             #1f2937); border: 1px solid var(--border-color, #374151); border-radius: \
             var(--radius-lg, 12px); overflow: hidden; box-shadow: var(--shadow-lg, 0 10px 40px \
             rgba(0,0,0,0.5)); outline: {active_outline};",
            bounds.x, bounds.y, bounds.width, bounds.height
        )
    };

    // Pull windows back on screen after the viewport shrinks.
    {
        let window_id_for_sync = window_id.clone();
        let stored = window.bounds();
        let maximized = window.maximized;
        use_effect(use_reactive!(|(committed, stored, maximized)| {
            if interaction.peek().is_some() || maximized {
                return;
            }
            if committed != stored {
                on_bounds.call((window_id_for_sync.clone(), committed));
            }
        }));
    }

    let mut finish_interaction = move |e: &PointerEvent, window_id: &str, commit: bool| {
        let Some(active) = interaction() else {
            return;
        };
        if e.data().pointer_id() != active.pointer_id {
            return;
        }
        set_window_pointer_capture(e, active.pointer_id, false);
        if commit {
            if let Some(final_bounds) = live_bounds() {
                on_bounds.call((window_id.to_string(), final_bounds));
            }
        }
        live_bounds.set(None);
        interaction.set(None);
    };

    let on_window_keydown = move |e: KeyboardEvent| {
        let key = e.key();
        let modifiers = e.modifiers();

        if key == Key::F4 && modifiers.alt() {
            e.prevent_default();
            on_close.call(window_id_for_keyboard.clone());
            return;
        }

        if key == Key::Escape {
            if interaction().is_some() {
                e.prevent_default();
                live_bounds.set(None);
                interaction.set(None);
            }
            return;
        }

        if key == Key::Character("m".to_string()) && modifiers.ctrl() {
            e.prevent_default();
            if !modifiers.shift() {
                on_minimize.call(window_id_for_keyboard.clone());
            } else if window.maximized {
                on_restore.call(window_id_for_keyboard.clone());
            } else {
                on_maximize.call(window_id_for_keyboard.clone());
            }
            return;
        }

        if modifiers.alt() && !window.maximized {
            if let Some(next) = keyboard_nudge(bounds, &key, modifiers.shift()) {
                e.prevent_default();
                let next = clamp_bounds(next, viewport, is_mobile);
                on_bounds.call((window_id_for_keyboard.clone(), next));
            }
        }
    };

    let content = window_content(&window.app_id);

    rsx! {
        div {
            class: if is_active { "floating-window active" } else { "floating-window" },
            role: "dialog",
            "aria-label": window.title.clone(),
            tabindex: "0",
            style: "{window_style}",
            onpointerdown: move |_| {
                if !is_active {
                    on_focus.call(window_id_for_focus.clone());
                }
            },
            onkeydown: on_window_keydown,
            onpointermove: move |e| {
                let Some(active) = interaction() else {
                    return;
                };
                if e.data().pointer_id() != active.pointer_id {
                    return;
                }

                // Pointer capture can be lost across browser focus changes; a
                // move with no buttons held ends the gesture.
                if pointer_buttons(&e) == 0 {
                    finish_interaction(&e, &window_id_for_pointer_move, true);
                    return;
                }

                let (x, y) = pointer_point(&e);
                if let Some(next) = active.bounds_at(x, y) {
                    live_bounds.set(Some(clamp_bounds(next, viewport, is_mobile)));
                }
            },
            onpointerup: move |e| finish_interaction(&e, &window_id_for_pointer_up, true),
            onpointercancel: move |e| finish_interaction(&e, &window_id_for_pointer_cancel, false),

            if !window.maximized {
                div {
                    class: "window-titlebar",
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 0.6rem 0.9rem; background: var(--titlebar-bg, #111827); border-bottom: 1px solid var(--border-color, #374151); cursor: grab; user-select: none; touch-action: none;",
                    ondoubleclick: move |_| on_maximize.call(window_id_for_title.clone()),
                    onpointerdown: move |e| {
                        if is_mobile || pointer_target_is_window_control(&e) {
                            return;
                        }
                        e.prevent_default();
                        let pointer_id = e.data().pointer_id();
                        set_window_pointer_capture(&e, pointer_id, true);

                        let (start_x, start_y) = pointer_point(&e);
                        interaction.set(Some(InteractionState {
                            mode: InteractionMode::Drag,
                            pointer_id,
                            start_x,
                            start_y,
                            start_bounds: bounds,
                        }));
                    },

                    div {
                        style: "display: flex; align-items: center; gap: 0.5rem; min-width: 0;",
                        span { style: "font-size: 1rem;", {get_app_icon(&window.app_id)} }
                        span { style: "font-weight: 500; color: var(--text-primary, white); overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{window.title}" }
                    }

                    WindowControls {
                        maximized: false,
                        window_id: window_id.clone(),
                        on_minimize,
                        on_maximize,
                        on_restore,
                        on_close,
                    }
                }
            } else {
                div {
                    style: "position: absolute; top: 0.5rem; right: 0.75rem; z-index: 10;",
                    WindowControls {
                        maximized: true,
                        window_id: window_id.clone(),
                        on_minimize,
                        on_maximize,
                        on_restore,
                        on_close,
                    }
                }
            }

            div {
                class: "window-content",
                style: "flex: 1; overflow: auto; min-height: 0;",
                {content}
            }

            if !is_mobile && !window.maximized {
                div {
                    class: "resize-handle",
                    style: "position: absolute; right: 0; bottom: 0; width: 16px; height: 16px; cursor: se-resize; touch-action: none;",
                    onpointerdown: move |e| {
                        if !is_active {
                            on_focus.call(window_id_for_resize_pointer.clone());
                        }
                        e.prevent_default();
                        e.stop_propagation();
                        let pointer_id = e.data().pointer_id();
                        set_window_pointer_capture(&e, pointer_id, true);

                        let (start_x, start_y) = pointer_point(&e);
                        interaction.set(Some(InteractionState {
                            mode: InteractionMode::Resize,
                            pointer_id,
                            start_x,
                            start_y,
                            start_bounds: bounds,
                        }));
                    },
                }
            }
        }
    }
}

fn window_content(app_id: &str) -> Element {
    match app_id {
        "mixer" => rsx! { MixerView {} },
        "pomodoro" => rsx! { PomodoroView {} },
        "todo" => rsx! { TodoView {} },
        "kanban" => rsx! { KanbanView {} },
        "habits" => rsx! { HabitsView {} },
        "notepad" => rsx! { NotepadView {} },
        "weather" => rsx! { WeatherView {} },
        "currency" => rsx! { CurrencyView {} },
        "video" => rsx! { VideoView {} },
        "password" => rsx! { PasswordView {} },
        "json" => rsx! { JsonToolsView {} },
        "uuid" => rsx! { UuidSlugView {} },
        _ => rsx! {
            div {
                style: "display: flex; align-items: center; justify-content: center; height: 100%; color: var(--text-muted, #6b7280); padding: 1rem;",
                "Unknown app: {app_id}"
            }
        },
    }
}

#[component]
fn WindowControls(
    maximized: bool,
    window_id: String,
    on_minimize: Callback<String>,
    on_maximize: Callback<String>,
    on_restore: Callback<String>,
    on_close: Callback<String>,
) -> Element {
    let window_id_for_minimize = window_id.clone();
    let window_id_for_max_restore = window_id.clone();
    let window_id_for_close = window_id;
    let button_style = "width: 24px; height: 24px; display: flex; align-items: center; justify-content: center; background: transparent; border: none; border-radius: var(--radius-sm, 4px); cursor: pointer;";

    rsx! {
        div {
            class: "window-controls",
            style: "display: flex; align-items: center; gap: 0.25rem;",
            button {
                style: "{button_style} color: #facc15;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Minimize",
                onclick: move |e| {
                    e.stop_propagation();
                    on_minimize.call(window_id_for_minimize.clone());
                },
                "−"
            }
            button {
                style: "{button_style} color: #22c55e;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": if maximized { "Restore" } else { "Maximize" },
                onclick: move |e| {
                    e.stop_propagation();
                    if maximized {
                        on_restore.call(window_id_for_max_restore.clone());
                    } else {
                        on_maximize.call(window_id_for_max_restore.clone());
                    }
                },
                if maximized { "❐" } else { "□" }
            }
            button {
                class: "window-close",
                style: "{button_style} color: #ef4444; font-size: 1.25rem; line-height: 1;",
                onpointerdown: move |e| e.stop_propagation(),
                "aria-label": "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(window_id_for_close.clone());
                },
                "×"
            }
        }
    }
}
