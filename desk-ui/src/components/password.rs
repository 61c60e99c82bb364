use desk_core::widgets::password::{
    estimate_strength, generate_password, PasswordOptions, Strength, MAX_LENGTH, MIN_LENGTH,
};
use dioxus::prelude::*;
use shared_types::STORAGE_KEY_PASSWORD;

use super::{copy_with_toast, use_persisted};
use crate::desktop::use_toaster;

fn strength_color(strength: Strength) -> &'static str {
    match strength {
        Strength::Weak => "var(--accent-danger, #ef4444)",
        Strength::Fair => "var(--accent-warning, #f59e0b)",
        _ => "var(--accent-success, #22c55e)",
    }
}

#[component]
pub fn PasswordView() -> Element {
    let mut options = use_persisted::<PasswordOptions>(STORAGE_KEY_PASSWORD);
    let toaster = use_toaster();
    let mut password = use_signal(String::new);
    let mut problem = use_signal(|| None::<String>);

    let mut regenerate = move || {
        let opts = options.read().clone();
        match generate_password(&opts, &mut rand::rng()) {
            Ok(pw) => {
                problem.set(None);
                password.set(pw);
            }
            Err(e) => {
                problem.set(Some(e.to_string()));
                password.set(String::new());
            }
        }
    };

    // New password whenever the options change.
    use_effect(move || regenerate());

    let opts = options.read().clone();
    let current = password();
    let estimate = (!current.is_empty()).then(|| estimate_strength(&current));

    rsx! {
        div { class: "widget",
            div { class: "widget-row",
                input {
                    class: "widget-input widget-grow widget-mono",
                    readonly: true,
                    value: "{current}",
                    "aria-label": "Generated password",
                }
                button {
                    class: "widget-btn icon",
                    title: "Generate another",
                    onclick: move |_| regenerate(),
                    "↻"
                }
                button {
                    class: "widget-btn primary",
                    disabled: current.is_empty(),
                    onclick: {
                        let current = current.clone();
                        move |_| copy_with_toast(toaster, current.clone(), "Password")
                    },
                    "Copy"
                }
            }

            if let Some(message) = problem() {
                p { class: "widget-error", "{message}" }
            }

            if let Some(estimate) = estimate {
                div { class: "widget-row",
                    div { class: "widget-progress widget-grow",
                        div {
                            style: "width: {(estimate.entropy_bits / 128.0 * 100.0).min(100.0):.0}%; background: {strength_color(estimate.strength)};",
                        }
                    }
                    span { style: "color: {strength_color(estimate.strength)};",
                        "{estimate.strength.label()}"
                    }
                    span { class: "widget-muted widget-mono", "{estimate.entropy_bits:.0} bits" }
                }
            }

            div { class: "widget-card",
                label { class: "widget-row",
                    span { "Length" }
                    input {
                        class: "widget-grow",
                        r#type: "range",
                        min: "{MIN_LENGTH}",
                        max: "{MAX_LENGTH}",
                        value: "{opts.length}",
                        oninput: move |e| {
                            if let Ok(len) = e.value().parse::<usize>() {
                                options.write().length = len;
                            }
                        },
                    }
                    span { class: "widget-mono", style: "width: 2.5rem; text-align: right;", "{opts.length}" }
                }
                OptionToggle {
                    label: "Lowercase (a-z)",
                    checked: opts.lowercase,
                    on_change: move |v| options.write().lowercase = v,
                }
                OptionToggle {
                    label: "Uppercase (A-Z)",
                    checked: opts.uppercase,
                    on_change: move |v| options.write().uppercase = v,
                }
                OptionToggle {
                    label: "Digits (0-9)",
                    checked: opts.digits,
                    on_change: move |v| options.write().digits = v,
                }
                OptionToggle {
                    label: "Symbols (!@#…)",
                    checked: opts.symbols,
                    on_change: move |v| options.write().symbols = v,
                }
                OptionToggle {
                    label: "Exclude look-alikes (I l 1 O 0 o)",
                    checked: opts.exclude_ambiguous,
                    on_change: move |v| options.write().exclude_ambiguous = v,
                }
            }
        }
    }
}

#[component]
fn OptionToggle(label: &'static str, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        label { class: "widget-row",
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| on_change.call(e.checked()),
            }
            "{label}"
        }
    }
}
