use desk_core::widgets::mixer::{MixerState, SoundKind, MAX_VOLUME};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_MIXER;
use wasm_bindgen_futures::JsFuture;

use super::use_persisted;
use crate::desktop::{use_toaster, Toaster};
use crate::interop::media_element;

fn audio_id(kind: SoundKind) -> String {
    format!("mixer-audio-{}", kind.label().to_lowercase().replace(' ', "-"))
}

/// Push the mixer model onto the rendered `<audio>` elements.
fn sync_audio(mut mixer: Signal<MixerState>, mut toaster: Toaster) {
    let state = mixer.read();
    for channel in &state.channels {
        let Some(el) = media_element(&audio_id(channel.kind)) else {
            continue;
        };
        el.set_volume(state.effective_volume(channel.kind));
        if channel.playing && el.paused() {
            let kind = channel.kind;
            match el.play() {
                Ok(promise) => {
                    spawn(async move {
                        if let Err(e) = JsFuture::from(promise).await {
                            let reason = e
                                .as_string()
                                .unwrap_or_else(|| "playback was blocked".to_string());
                            toaster.error(format!("Could not play {}: {reason}", kind.label()));
                            if mixer.peek().channel(kind).is_some_and(|c| c.playing) {
                                mixer.write().toggle_playing(kind);
                            }
                        }
                    });
                }
                Err(_) => toaster.error(format!("Could not play {}", kind.label())),
            }
        } else if !channel.playing && !el.paused() {
            if let Err(e) = el.pause() {
                dioxus_logger::tracing::warn!("Failed to pause {:?}: {:?}", channel.kind, e);
            }
        }
    }
}

#[component]
pub fn MixerView() -> Element {
    let mut mixer = use_persisted::<MixerState>(STORAGE_KEY_MIXER);
    let mut toaster = use_toaster();
    let mut preset_name = use_signal(String::new);

    use_effect(move || sync_audio(mixer, toaster));

    let mut save_preset = move || {
        let name = preset_name();
        match mixer.write().save_preset(&name) {
            Ok(()) => {
                toaster.success(format!("Saved preset \"{}\"", name.trim()));
                preset_name.set(String::new());
            }
            Err(e) => toaster.error(e.to_string()),
        }
    };

    let state = mixer.read().clone();
    let any_playing = state.any_playing();

    rsx! {
        div { class: "widget",
            for kind in SoundKind::ALL {
                audio {
                    key: "{audio_id(kind)}",
                    id: audio_id(kind),
                    src: kind.asset_path(),
                    r#loop: true,
                    preload: "none",
                }
            }

            div { class: "widget-row",
                span { "Master" }
                input {
                    class: "widget-grow",
                    r#type: "range",
                    min: "0",
                    max: "{MAX_VOLUME}",
                    value: "{state.master}",
                    "aria-label": "Master volume",
                    oninput: move |e| {
                        if let Ok(v) = e.value().parse::<u8>() {
                            mixer.write().set_master(v);
                        }
                    },
                }
                span { class: "widget-mono", "{state.master}%" }
                button {
                    class: "widget-btn danger",
                    disabled: !any_playing,
                    onclick: move |_| mixer.write().stop_all(),
                    "Stop all"
                }
            }

            div { class: "widget-list widget-grow",
                for channel in state.channels.iter().cloned() {
                    div {
                        key: "{audio_id(channel.kind)}",
                        class: "mixer-channel widget-card",
                        button {
                            class: if channel.playing { "widget-btn icon selected" } else { "widget-btn icon" },
                            title: if channel.playing { "Pause" } else { "Play" },
                            onclick: move |_| {
                                mixer.write().toggle_playing(channel.kind);
                            },
                            "{channel.kind.icon()}"
                        }
                        span { style: "width: 6rem;", "{channel.kind.label()}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{MAX_VOLUME}",
                            value: "{channel.volume}",
                            "aria-label": "{channel.kind.label()} volume",
                            oninput: move |e| {
                                if let Ok(v) = e.value().parse::<u8>() {
                                    mixer.write().set_volume(channel.kind, v);
                                }
                            },
                        }
                        button {
                            class: if channel.muted { "widget-btn icon selected" } else { "widget-btn icon" },
                            title: if channel.muted { "Unmute" } else { "Mute" },
                            onclick: move |_| {
                                mixer.write().toggle_muted(channel.kind);
                            },
                            if channel.muted { "🔇" } else { "🔊" }
                        }
                    }
                }
            }

            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    placeholder: "Preset name",
                    value: "{preset_name}",
                    oninput: move |e| preset_name.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            save_preset();
                        }
                    },
                }
                button {
                    class: "widget-btn primary",
                    onclick: move |_| save_preset(),
                    "Save preset"
                }
            }
            if !state.presets.is_empty() {
                div { class: "widget-row", style: "flex-wrap: wrap;",
                    for preset in state.presets.iter().cloned() {
                        span {
                            key: "{preset.name}",
                            class: "widget-card widget-row",
                            button {
                                class: "widget-btn",
                                onclick: {
                                    let name = preset.name.clone();
                                    move |_| {
                                        if let Err(e) = mixer.write().apply_preset(&name) {
                                            toaster.error(e.to_string());
                                        }
                                    }
                                },
                                "{preset.name}"
                            }
                            button {
                                class: "widget-btn icon danger",
                                "aria-label": "Delete preset",
                                onclick: {
                                    let name = preset.name.clone();
                                    move |_| {
                                        mixer.write().delete_preset(&name);
                                    }
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}
