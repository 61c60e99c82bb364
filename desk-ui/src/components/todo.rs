use chrono::Utc;
use desk_core::widgets::todo::{Priority, TodoFilter, TodoList};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_TODOS;

use super::use_persisted;
use crate::desktop::use_toaster;

const FILTERS: [(TodoFilter, &str); 3] = [
    (TodoFilter::All, "All"),
    (TodoFilter::Active, "Active"),
    (TodoFilter::Completed, "Completed"),
];

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "var(--accent-danger, #ef4444)",
        Priority::Medium => "var(--accent-warning, #f59e0b)",
        Priority::Low => "var(--accent-primary, #3b82f6)",
    }
}

#[component]
pub fn TodoView() -> Element {
    let mut todos = use_persisted::<TodoList>(STORAGE_KEY_TODOS);
    let mut toaster = use_toaster();
    let mut draft = use_signal(String::new);
    let mut filter = use_signal(TodoFilter::default);
    let mut priority = use_signal(Priority::default);
    let mut sort_by_priority = use_signal(|| true);
    let mut editing = use_signal(|| None::<(String, String)>);

    let mut add_task = move || {
        let text = draft();
        match todos.write().add_with_priority(&text, priority(), Utc::now()) {
            Ok(_) => draft.set(String::new()),
            Err(e) => toaster.error(e.to_string()),
        }
    };

    let mut commit_edit = move || {
        let Some((id, text)) = editing() else {
            return;
        };
        if let Err(e) = todos.write().edit(&id, &text) {
            toaster.error(e.to_string());
            return;
        }
        editing.set(None);
    };

    let list = todos.read();
    let visible: Vec<_> = if sort_by_priority() {
        list.by_priority(filter())
    } else {
        list.filtered(filter())
    }
    .into_iter()
    .cloned()
    .collect();
    let remaining = list.remaining();
    let total = list.items.len();
    drop(list);

    rsx! {
        div { class: "widget",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow",
                    placeholder: "What needs doing?",
                    value: "{draft}",
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            add_task();
                        }
                    },
                }
                select {
                    class: "widget-select",
                    "aria-label": "Priority",
                    onchange: move |e| {
                        if let Some(p) = Priority::parse(&e.value()) {
                            priority.set(p);
                        }
                    },
                    for p in Priority::ALL {
                        option { value: p.as_str(), selected: priority() == p, "{p.label()}" }
                    }
                }
                button { class: "widget-btn primary", onclick: move |_| add_task(), "Add" }
            }

            div { class: "widget-row",
                for (value, label) in FILTERS {
                    button {
                        class: if filter() == value { "widget-btn selected" } else { "widget-btn" },
                        onclick: move |_| filter.set(value),
                        "{label}"
                    }
                }
                span { class: "widget-grow" }
                button {
                    class: if sort_by_priority() { "widget-btn selected" } else { "widget-btn" },
                    title: "Sort by priority",
                    onclick: move |_| sort_by_priority.toggle(),
                    "Priority"
                }
                button {
                    class: "widget-btn",
                    disabled: total == 0,
                    title: "Mark all complete or incomplete",
                    onclick: move |_| todos.write().toggle_all(),
                    "Toggle all"
                }
            }

            ul { class: "widget-list widget-grow",
                if visible.is_empty() {
                    li { class: "widget-muted", "Nothing here." }
                }
                for item in visible {
                    li {
                        key: "{item.id}",
                        class: "widget-card widget-row",
                        input {
                            r#type: "checkbox",
                            checked: item.done,
                            onchange: {
                                let id = item.id.clone();
                                move |_| {
                                    if let Err(e) = todos.write().toggle(&id) {
                                        toaster.error(e.to_string());
                                    }
                                }
                            },
                        }
                        if editing().as_ref().is_some_and(|(id, _)| *id == item.id) {
                            input {
                                class: "widget-input widget-grow",
                                value: editing().map(|(_, text)| text).unwrap_or_default(),
                                autofocus: true,
                                oninput: move |e| {
                                    if let Some((id, _)) = editing() {
                                        editing.set(Some((id, e.value())));
                                    }
                                },
                                onkeydown: move |e| match e.key() {
                                    Key::Enter => commit_edit(),
                                    Key::Escape => editing.set(None),
                                    _ => {}
                                },
                                onblur: move |_| commit_edit(),
                            }
                        } else {
                            span {
                                class: "widget-grow",
                                style: if item.done { "text-decoration: line-through; color: var(--text-muted, #64748b);" } else { "" },
                                ondoubleclick: {
                                    let id = item.id.clone();
                                    let text = item.text.clone();
                                    move |_| editing.set(Some((id.clone(), text.clone())))
                                },
                                "{item.text}"
                            }
                        }
                        select {
                            class: "widget-select",
                            "aria-label": "Task priority",
                            style: "color: {priority_color(item.priority)};",
                            onchange: {
                                let id = item.id.clone();
                                move |e: Event<FormData>| {
                                    let Some(p) = Priority::parse(&e.value()) else {
                                        return;
                                    };
                                    if let Err(e) = todos.write().set_priority(&id, p) {
                                        toaster.error(e.to_string());
                                    }
                                }
                            },
                            for p in Priority::ALL {
                                option { value: p.as_str(), selected: item.priority == p, "{p.label()}" }
                            }
                        }
                        button {
                            class: "widget-btn icon danger",
                            "aria-label": "Delete task",
                            onclick: {
                                let id = item.id.clone();
                                move |_| {
                                    todos.write().remove(&id);
                                }
                            },
                            "×"
                        }
                    }
                }
            }

            div { class: "widget-row widget-muted",
                span { class: "widget-grow",
                    if remaining == 1 { "1 task left" } else { "{remaining} tasks left" }
                }
                button {
                    class: "widget-btn",
                    disabled: total == remaining,
                    onclick: move |_| {
                        let cleared = todos.write().clear_completed();
                        toaster.info(format!("Cleared {cleared} completed"));
                    },
                    "Clear completed"
                }
            }
        }
    }
}
