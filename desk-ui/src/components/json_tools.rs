use desk_core::widgets::json_tools::{
    format_json, json_to_yaml, minify_json, validate_json, yaml_to_json, FormatOptions,
    DEFAULT_INDENT,
};
use desk_core::{DeskError, DeskResult};
use dioxus::prelude::*;

use super::copy_with_toast;
use crate::desktop::use_toaster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Format,
    Minify,
    Validate,
    ToYaml,
    FromYaml,
}

impl Operation {
    const ALL: [Operation; 5] = [
        Operation::Format,
        Operation::Minify,
        Operation::Validate,
        Operation::ToYaml,
        Operation::FromYaml,
    ];

    fn label(self) -> &'static str {
        match self {
            Operation::Format => "Format",
            Operation::Minify => "Minify",
            Operation::Validate => "Validate",
            Operation::ToYaml => "JSON → YAML",
            Operation::FromYaml => "YAML → JSON",
        }
    }

    fn run(self, input: &str, options: FormatOptions) -> DeskResult<String> {
        match self {
            Operation::Format => format_json(input, options),
            Operation::Minify => minify_json(input, options.sort_keys),
            Operation::Validate => validate_json(input).map(|()| "Valid JSON ✓".to_string()),
            Operation::ToYaml => json_to_yaml(input, options.sort_keys),
            Operation::FromYaml => yaml_to_json(input, options),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Output(String),
    Problem {
        message: String,
        position: Option<(usize, usize)>,
    },
}

impl From<DeskError> for Outcome {
    fn from(err: DeskError) -> Self {
        match err {
            DeskError::Parse {
                format,
                line,
                column,
                message,
            } => Outcome::Problem {
                message: format!("{format}: {message}"),
                position: Some((line, column)),
            },
            other => Outcome::Problem {
                message: other.to_string(),
                position: None,
            },
        }
    }
}

#[component]
pub fn JsonToolsView() -> Element {
    let toaster = use_toaster();
    let mut input = use_signal(String::new);
    let mut indent = use_signal(|| DEFAULT_INDENT);
    let mut sort_keys = use_signal(|| false);
    let mut outcome = use_signal(|| None::<Outcome>);

    let mut run = move |op: Operation| {
        let options = FormatOptions {
            indent: indent(),
            sort_keys: sort_keys(),
        };
        let result = match op.run(&input.peek(), options) {
            Ok(text) => Outcome::Output(text),
            Err(e) => e.into(),
        };
        outcome.set(Some(result));
    };

    let output = match outcome() {
        Some(Outcome::Output(text)) => Some(text),
        _ => None,
    };

    rsx! {
        div { class: "widget",
            textarea {
                class: "widget-textarea widget-grow widget-mono",
                placeholder: "Paste JSON or YAML here",
                spellcheck: false,
                value: "{input}",
                oninput: move |e| input.set(e.value()),
            }

            div { class: "widget-row", style: "flex-wrap: wrap;",
                for op in Operation::ALL {
                    button {
                        class: if op == Operation::Format { "widget-btn primary" } else { "widget-btn" },
                        onclick: move |_| run(op),
                        "{op.label()}"
                    }
                }
            }

            div { class: "widget-row widget-muted",
                label { class: "widget-row",
                    "Indent"
                    select {
                        class: "widget-select",
                        onchange: move |e| {
                            if let Ok(n) = e.value().parse::<usize>() {
                                indent.set(n);
                            }
                        },
                        for n in [2usize, 4, 8] {
                            option { value: "{n}", selected: indent() == n, "{n} spaces" }
                        }
                    }
                }
                label { class: "widget-row",
                    input {
                        r#type: "checkbox",
                        checked: sort_keys(),
                        onchange: move |e| sort_keys.set(e.checked()),
                    }
                    "Sort keys"
                }
                span { class: "widget-grow" }
                button {
                    class: "widget-btn",
                    disabled: input.read().is_empty() && outcome().is_none(),
                    onclick: move |_| {
                        input.set(String::new());
                        outcome.set(None);
                    },
                    "Clear"
                }
            }

            match outcome() {
                Some(Outcome::Problem { message, position }) => rsx! {
                    div { class: "widget-card widget-error",
                        if let Some((line, column)) = position {
                            strong { "Line {line}, column {column}: " }
                        }
                        "{message}"
                    }
                },
                Some(Outcome::Output(text)) => rsx! {
                    pre {
                        class: "widget-card widget-mono widget-grow",
                        style: "margin: 0; overflow: auto; white-space: pre; max-height: 40%;",
                        "{text}"
                    }
                },
                None => rsx! {},
            }

            if let Some(text) = output {
                div { class: "widget-row",
                    span { class: "widget-grow" }
                    button {
                        class: "widget-btn",
                        title: "Replace the input with this result",
                        onclick: {
                            let text = text.clone();
                            move |_| {
                                input.set(text.clone());
                                outcome.set(None);
                            }
                        },
                        "Use as input"
                    }
                    button {
                        class: "widget-btn primary",
                        onclick: move |_| copy_with_toast(toaster, text.clone(), "Output"),
                        "Copy"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_keep_position() {
        let outcome: Outcome = Operation::Validate
            .run("{\n  \"a\": }", FormatOptions::default())
            .unwrap_err()
            .into();
        match outcome {
            Outcome::Problem { message, position } => {
                assert!(message.starts_with("JSON"));
                assert_eq!(position.map(|(line, _)| line), Some(2));
            }
            other => panic!("expected a problem, got {other:?}"),
        }
    }

    #[test]
    fn validate_reports_success() {
        let out = Operation::Validate
            .run(r#"{"ok":true}"#, FormatOptions::default())
            .unwrap();
        assert_eq!(out, "Valid JSON ✓");
    }
}
