use chrono::{Local, Utc};
use desk_core::widgets::notepad::{stats, Notepad};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_NOTES;

use super::use_persisted;
use crate::desktop::use_toaster;

#[component]
pub fn NotepadView() -> Element {
    let mut notepad = use_persisted::<Notepad>(STORAGE_KEY_NOTES);
    let mut toaster = use_toaster();
    let mut query = use_signal(String::new);

    let book = notepad.read();
    let listed: Vec<(String, String, String)> = book
        .search(&query())
        .into_iter()
        .map(|n| {
            (
                n.id.clone(),
                n.display_title().to_string(),
                n.updated_at.with_timezone(&Local).format("%b %-d, %H:%M").to_string(),
            )
        })
        .collect();
    let selected = book.selected_note().cloned();
    let total = book.notes.len();
    drop(book);

    rsx! {
        div { class: "widget widget-row", style: "align-items: stretch;",
            div { class: "widget", style: "flex: 0 0 200px; padding: 0;",
                div { class: "widget-row",
                    input {
                        class: "widget-input widget-grow",
                        r#type: "search",
                        placeholder: "Search notes",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                    button {
                        class: "widget-btn primary icon",
                        title: "New note",
                        onclick: move |_| {
                            notepad.write().create(Utc::now());
                            query.set(String::new());
                        },
                        "+"
                    }
                }
                ul { class: "widget-list widget-grow",
                    if total == 0 {
                        li { class: "widget-muted", "No notes yet." }
                    } else if listed.is_empty() {
                        li { class: "widget-muted", "No matches." }
                    }
                    for (id, title, updated) in listed {
                        li {
                            key: "{id}",
                            class: if selected.as_ref().is_some_and(|n| n.id == id) { "widget-card widget-btn selected" } else { "widget-card widget-btn" },
                            style: "display: block; text-align: left;",
                            onclick: {
                                let id = id.clone();
                                move |_| {
                                    notepad.write().select(&id);
                                }
                            },
                            div { style: "font-weight: 600;", "{title}" }
                            div { class: "widget-muted", style: "font-size: 0.75rem;", "{updated}" }
                        }
                    }
                }
            }

            if let Some(note) = selected {
                NoteEditor {
                    key: "{note.id}",
                    id: note.id.clone(),
                    title: note.title.clone(),
                    body: note.body.clone(),
                    on_change: move |(id, title, body): (String, String, String)| {
                        if let Err(e) = notepad.write().update(&id, &title, &body, Utc::now()) {
                            toaster.error(e.to_string());
                        }
                    },
                    on_delete: move |id: String| {
                        if notepad.write().remove(&id) {
                            toaster.info("Note deleted");
                        }
                    },
                }
            } else {
                div { class: "widget widget-grow widget-muted",
                    style: "align-items: center; justify-content: center;",
                    "Select a note or create a new one."
                }
            }
        }
    }
}

#[component]
fn NoteEditor(
    id: String,
    title: String,
    body: String,
    on_change: EventHandler<(String, String, String)>,
    on_delete: EventHandler<String>,
) -> Element {
    let text = stats(&body);

    rsx! {
        div { class: "widget widget-grow", style: "padding: 0;",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: {
                        let id = id.clone();
                        let body = body.clone();
                        move |e: FormEvent| on_change.call((id.clone(), e.value(), body.clone()))
                    },
                }
                button {
                    class: "widget-btn danger",
                    onclick: {
                        let id = id.clone();
                        move |_| on_delete.call(id.clone())
                    },
                    "Delete"
                }
            }
            textarea {
                class: "widget-textarea widget-grow",
                placeholder: "Start writing...",
                value: "{body}",
                oninput: {
                    let id = id.clone();
                    let title = title.clone();
                    move |e: FormEvent| on_change.call((id.clone(), title.clone(), e.value()))
                },
            }
            div { class: "widget-row widget-muted", style: "font-size: 0.75rem;",
                span { "{text.words} words" }
                span { "{text.chars} characters" }
                span { "{text.lines} lines" }
            }
        }
    }
}
