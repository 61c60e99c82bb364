use std::cell::Cell;
use std::rc::Rc;

use desk_core::widgets::pomodoro::{Phase, PomodoroSettings, PomodoroState};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use shared_types::STORAGE_KEY_POMODORO;
use wasm_bindgen_futures::JsFuture;

use super::use_persisted;
use crate::desktop::{use_toaster, Toaster};
use crate::interop::media_element;

const TICK_MS: u32 = 1000;
const CHIME_ID: &str = "pomodoro-chime";
const CHIME_SRC: &str = "/sounds/chime.mp3";

fn play_chime(mut toaster: Toaster) {
    let Some(el) = media_element(CHIME_ID) else {
        return;
    };
    el.set_current_time(0.0);
    match el.play() {
        Ok(promise) => {
            spawn(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    let reason = e
                        .as_string()
                        .unwrap_or_else(|| "playback was blocked".to_string());
                    toaster.error(format!("Could not play the chime: {reason}"));
                }
            });
        }
        Err(_) => toaster.error("Could not play the chime"),
    }
}

#[component]
pub fn PomodoroView() -> Element {
    let mut timer = use_persisted::<PomodoroState>(STORAGE_KEY_POMODORO);
    let mut toaster = use_toaster();
    let mut show_settings = use_signal(|| false);
    let mut draft = use_signal(|| timer.peek().settings.clone());
    let ticker_alive = use_hook(|| Rc::new(Cell::new(true)));

    {
        let ticker_alive = ticker_alive.clone();
        use_drop(move || {
            ticker_alive.set(false);
        });
    }

    {
        let ticker_alive = ticker_alive.clone();
        use_effect(move || {
            let alive = ticker_alive.clone();
            spawn(async move {
                while alive.get() {
                    TimeoutFuture::new(TICK_MS).await;
                    if !alive.get() || !timer.peek().running {
                        continue;
                    }
                    if let Some(done) = timer.write().tick(1) {
                        let message = match done.finished {
                            Phase::Work => format!("Focus session done. Time for a {}.", done.next.label().to_lowercase()),
                            _ => "Break over. Back to work!".to_string(),
                        };
                        toaster.success(message);
                        play_chime(toaster);
                    }
                }
            });
        });
    }

    let state = timer.read().clone();
    let progress = (state.progress() * 100.0).round();
    let accent = match state.phase {
        Phase::Work => "var(--accent-danger, #ef4444)",
        Phase::ShortBreak => "var(--accent-success, #22c55e)",
        Phase::LongBreak => "var(--accent-primary, #3b82f6)",
    };

    rsx! {
        div { class: "widget", style: "align-items: center;",
            audio { id: CHIME_ID, src: CHIME_SRC, preload: "auto" }
            div { class: "widget-muted", "{state.phase.label()}" }
            div {
                class: "widget-mono",
                style: "font-size: 3rem; font-weight: 700; color: {accent};",
                "{state.remaining_label()}"
            }
            div { class: "widget-progress", style: "width: 100%;",
                div { style: "width: {progress}%; background: {accent};" }
            }
            div { class: "widget-muted",
                "Sessions completed: {state.completed_sessions}"
            }

            div { class: "widget-row",
                button {
                    class: "widget-btn primary",
                    onclick: move |_| timer.write().toggle(),
                    if state.running { "Pause" } else { "Start" }
                }
                button {
                    class: "widget-btn",
                    onclick: move |_| timer.write().reset(),
                    "Reset"
                }
                button {
                    class: "widget-btn",
                    title: "Skip to the next phase",
                    onclick: move |_| {
                        let next = timer.write().skip();
                        toaster.info(format!("Skipped to {}", next.label()));
                    },
                    "Skip"
                }
                button {
                    class: if show_settings() { "widget-btn icon selected" } else { "widget-btn icon" },
                    title: "Settings",
                    onclick: move |_| {
                        if !show_settings() {
                            draft.set(timer.peek().settings.clone());
                        }
                        show_settings.toggle();
                    },
                    "⚙"
                }
            }

            if show_settings() {
                div { class: "widget-card", style: "width: 100%;",
                    MinutesField {
                        label: "Focus (min)",
                        value: draft().work_minutes,
                        on_change: move |v| draft.write().work_minutes = v,
                    }
                    MinutesField {
                        label: "Short break (min)",
                        value: draft().short_break_minutes,
                        on_change: move |v| draft.write().short_break_minutes = v,
                    }
                    MinutesField {
                        label: "Long break (min)",
                        value: draft().long_break_minutes,
                        on_change: move |v| draft.write().long_break_minutes = v,
                    }
                    MinutesField {
                        label: "Sessions before long break",
                        value: draft().sessions_until_long_break,
                        on_change: move |v| draft.write().sessions_until_long_break = v,
                    }
                    label { class: "widget-row",
                        input {
                            r#type: "checkbox",
                            checked: draft().auto_start,
                            onchange: move |e| draft.write().auto_start = e.checked(),
                        }
                        "Start the next phase automatically"
                    }
                    div { class: "widget-row",
                        button {
                            class: "widget-btn primary",
                            onclick: move |_| {
                                match timer.write().update_settings(draft()) {
                                    Ok(()) => {
                                        show_settings.set(false);
                                        toaster.success("Timer settings saved");
                                    }
                                    Err(e) => toaster.error(e.to_string()),
                                }
                            },
                            "Save"
                        }
                        button {
                            class: "widget-btn",
                            onclick: move |_| draft.set(PomodoroSettings::default()),
                            "Defaults"
                        }
                        span { class: "widget-grow" }
                        button {
                            class: "widget-btn danger",
                            onclick: move |_| {
                                timer.write().reset_all();
                                show_settings.set(false);
                            },
                            "Reset all"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MinutesField(label: &'static str, value: u32, on_change: EventHandler<u32>) -> Element {
    rsx! {
        label { class: "widget-row",
            span { class: "widget-grow", "{label}" }
            input {
                class: "widget-input",
                r#type: "number",
                min: "1",
                style: "width: 5rem;",
                value: "{value}",
                oninput: move |e| {
                    if let Ok(v) = e.value().trim().parse::<u32>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}
