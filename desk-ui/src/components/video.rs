use desk_core::widgets::video::{parse_video_url, search_catalog, RecentVideos};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_VIDEO;

use super::use_persisted;
use crate::desktop::use_toaster;

#[component]
pub fn VideoView() -> Element {
    let mut recent = use_persisted::<RecentVideos>(STORAGE_KEY_VIDEO);
    let mut toaster = use_toaster();
    let mut link = use_signal(|| recent.peek().current.clone().unwrap_or_default());
    let mut query = use_signal(String::new);

    let mut open_link = move |url: String| match parse_video_url(&url) {
        Ok(_) => {
            recent.write().push(&url);
            link.set(url.trim().to_string());
        }
        Err(e) => toaster.error(e.to_string()),
    };

    let history = recent.read().urls.clone();
    let playing = recent.read().current_source();
    let catalog = search_catalog(&query());

    rsx! {
        div { class: "widget",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    r#type: "url",
                    placeholder: "YouTube, Vimeo or .mp4/.webm link",
                    value: "{link}",
                    oninput: move |e| link.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            open_link(link());
                        }
                    },
                }
                button {
                    class: "widget-btn primary",
                    onclick: move |_| open_link(link()),
                    "Play"
                }
                if playing.is_some() {
                    button {
                        class: "widget-btn",
                        onclick: move |_| recent.write().close(),
                        "Close"
                    }
                }
            }

            div {
                class: "widget-grow",
                style: "min-height: 180px; background: #000; border-radius: 8px; overflow: hidden; display: flex;",
                match playing {
                    Some(source) if source.is_embedded_player() => rsx! {
                        iframe {
                            src: source.embed_url(),
                            style: "flex: 1; border: 0;",
                            allow: "accelerometer; autoplay; encrypted-media; picture-in-picture; fullscreen",
                            allowfullscreen: true,
                            title: "Video player",
                        }
                    },
                    Some(source) => rsx! {
                        video {
                            src: source.embed_url(),
                            style: "flex: 1; width: 100%;",
                            controls: true,
                            autoplay: true,
                        }
                    },
                    None => rsx! {
                        p { class: "widget-muted", style: "margin: auto;", "Paste a link to start watching." }
                    },
                }
            }

            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    r#type: "search",
                    placeholder: "Search lofi streams",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
                if !query.read().is_empty() {
                    button { class: "widget-btn", onclick: move |_| query.set(String::new()), "Clear" }
                }
            }
            ul { class: "widget-list", style: "max-height: 160px;",
                if catalog.is_empty() {
                    li { class: "widget-muted", "No streams match \"{query}\"." }
                }
                for video in catalog {
                    li {
                        key: "{video.id}",
                        class: "widget-card",
                        style: "cursor: pointer;",
                        title: "{video.title}",
                        onclick: move |_| open_link(video.url()),
                        div { style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{video.title}" }
                        div { class: "widget-muted", "{video.channel}" }
                    }
                }
            }

            if !history.is_empty() {
                div { class: "widget-row",
                    span { class: "widget-muted widget-grow", "Recent" }
                    button {
                        class: "widget-btn",
                        onclick: move |_| recent.write().clear(),
                        "Clear"
                    }
                }
                ul { class: "widget-list", style: "max-height: 140px;",
                    for url in history {
                        li {
                            key: "{url}",
                            class: "widget-card widget-mono",
                            style: "cursor: pointer; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                            title: "{url}",
                            onclick: {
                                let url = url.clone();
                                move |_| open_link(url.clone())
                            },
                            "{url}"
                        }
                    }
                }
            }
        }
    }
}
