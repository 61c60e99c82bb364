use desk_core::widgets::uuid_slug::{generate_uuids, slugify, SlugOptions, MAX_UUIDS};
use dioxus::prelude::*;

use super::copy_with_toast;
use crate::desktop::use_toaster;

const SEPARATORS: [(char, &str); 3] = [('-', "Hyphen"), ('_', "Underscore"), ('.', "Dot")];

#[component]
pub fn UuidSlugView() -> Element {
    rsx! {
        div { class: "widget",
            UuidSection {}
            hr { style: "border: none; border-top: 1px solid var(--border-color, #334155); width: 100%;" }
            SlugSection {}
        }
    }
}

#[component]
fn UuidSection() -> Element {
    let mut toaster = use_toaster();
    let mut count = use_signal(|| 1usize);
    let mut uppercase = use_signal(|| false);
    let mut hyphens = use_signal(|| true);
    let mut uuids = use_signal(|| generate_uuids(1, false, true).unwrap_or_default());

    let mut generate = move || match generate_uuids(count(), uppercase(), hyphens()) {
        Ok(list) => uuids.set(list),
        Err(e) => toaster.error(e.to_string()),
    };

    let list = uuids();
    let joined = list.join("\n");

    rsx! {
        div { class: "widget-row", style: "flex-wrap: wrap;",
            strong { class: "widget-grow", "UUID v4" }
            label { class: "widget-row",
                "Count"
                input {
                    class: "widget-input",
                    r#type: "number",
                    min: "1",
                    max: "{MAX_UUIDS}",
                    style: "width: 4.5rem;",
                    value: "{count}",
                    oninput: move |e| {
                        if let Ok(n) = e.value().trim().parse::<usize>() {
                            count.set(n.clamp(1, MAX_UUIDS));
                        }
                    },
                }
            }
            label { class: "widget-row",
                input {
                    r#type: "checkbox",
                    checked: uppercase(),
                    onchange: move |e| uppercase.set(e.checked()),
                }
                "Uppercase"
            }
            label { class: "widget-row",
                input {
                    r#type: "checkbox",
                    checked: hyphens(),
                    onchange: move |e| hyphens.set(e.checked()),
                }
                "Hyphens"
            }
        }
        div { class: "widget-row",
            button { class: "widget-btn primary", onclick: move |_| generate(), "Generate" }
            button {
                class: "widget-btn",
                disabled: list.is_empty(),
                onclick: move |_| {
                    let label = if joined.contains('\n') { "UUIDs" } else { "UUID" };
                    copy_with_toast(toaster, joined.clone(), label);
                },
                if list.len() > 1 { "Copy all" } else { "Copy" }
            }
        }
        ul { class: "widget-list", style: "max-height: 180px;",
            for (i, id) in list.iter().cloned().enumerate() {
                li {
                    key: "{i}-{id}",
                    class: "widget-card widget-row widget-mono",
                    span { class: "widget-grow", style: "overflow-wrap: anywhere;", "{id}" }
                    button {
                        class: "widget-btn icon",
                        title: "Copy",
                        onclick: {
                            let id = id.clone();
                            move |_| copy_with_toast(toaster, id.clone(), "UUID")
                        },
                        "⧉"
                    }
                }
            }
        }
    }
}

#[component]
fn SlugSection() -> Element {
    let toaster = use_toaster();
    let mut text = use_signal(String::new);
    let mut options = use_signal(SlugOptions::default);

    let opts = options();
    let slug = slugify(&text(), &opts);

    rsx! {
        div { class: "widget-row",
            strong { class: "widget-grow", "Slugify" }
        }
        input {
            class: "widget-input",
            placeholder: "Text to turn into a URL slug",
            value: "{text}",
            oninput: move |e| text.set(e.value()),
        }
        div { class: "widget-row widget-muted", style: "flex-wrap: wrap;",
            label { class: "widget-row",
                "Separator"
                select {
                    class: "widget-select",
                    onchange: move |e| {
                        if let Some(sep) = e.value().chars().next() {
                            options.write().separator = sep;
                        }
                    },
                    for (sep, name) in SEPARATORS {
                        option {
                            value: "{sep}",
                            selected: opts.separator == sep,
                            "{name} ({sep})"
                        }
                    }
                }
            }
            label { class: "widget-row",
                input {
                    r#type: "checkbox",
                    checked: opts.lowercase,
                    onchange: move |e| options.write().lowercase = e.checked(),
                }
                "Lowercase"
            }
            label { class: "widget-row",
                "Max length"
                input {
                    class: "widget-input",
                    r#type: "number",
                    min: "0",
                    style: "width: 4.5rem;",
                    title: "0 keeps the whole slug",
                    value: "{opts.max_len}",
                    oninput: move |e| {
                        let raw = e.value();
                        let raw = raw.trim();
                        if raw.is_empty() {
                            options.write().max_len = 0;
                        } else if let Ok(n) = raw.parse::<usize>() {
                            options.write().max_len = n;
                        }
                    },
                }
            }
        }
        div { class: "widget-row",
            code {
                class: "widget-card widget-mono widget-grow",
                style: "overflow-wrap: anywhere;",
                if slug.is_empty() {
                    span { class: "widget-muted", "slug-appears-here" }
                } else {
                    "{slug}"
                }
            }
            button {
                class: "widget-btn primary",
                disabled: slug.is_empty(),
                onclick: {
                    let slug = slug.clone();
                    move |_| copy_with_toast(toaster, slug.clone(), "Slug")
                },
                "Copy"
            }
        }
    }
}
