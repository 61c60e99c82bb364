//! JSON formatting, validation and JSON/YAML conversion.
//!
//! Object key order is preserved unless `sort_keys` is requested.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{DeskError, DeskResult};

pub const DEFAULT_INDENT: usize = 2;
const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub indent: usize,
    pub sort_keys: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            sort_keys: false,
        }
    }
}

fn non_empty(input: &str) -> DeskResult<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DeskError::invalid("Input is empty"));
    }
    Ok(trimmed)
}

fn parse_json(input: &str) -> DeskResult<Value> {
    Ok(serde_json::from_str(non_empty(input)?)?)
}

/// Recursively order object keys.
pub fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

pub fn format_json(input: &str, options: FormatOptions) -> DeskResult<String> {
    render_pretty(parse_json(input)?, options)
}

fn render_pretty(mut value: Value, options: FormatOptions) -> DeskResult<String> {
    if options.sort_keys {
        value = sort_keys(value);
    }
    let indent = " ".repeat(options.indent.min(MAX_INDENT));
    let mut out = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    String::from_utf8(out).map_err(|e| DeskError::invalid(e.to_string()))
}

pub fn minify_json(input: &str, sort: bool) -> DeskResult<String> {
    let mut value = parse_json(input)?;
    if sort {
        value = sort_keys(value);
    }
    Ok(serde_json::to_string(&value)?)
}

/// `Ok` for well-formed JSON; otherwise a `Parse` error with line/column.
pub fn validate_json(input: &str) -> DeskResult<()> {
    parse_json(input).map(|_| ())
}

pub fn json_to_yaml(input: &str, sort: bool) -> DeskResult<String> {
    let mut value = parse_json(input)?;
    if sort {
        value = sort_keys(value);
    }
    Ok(serde_yaml_ng::to_string(&value)?)
}

pub fn yaml_to_json(input: &str, options: FormatOptions) -> DeskResult<String> {
    let value: Value = serde_yaml_ng::from_str(non_empty(input)?)?;
    render_pretty(value, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_uses_requested_indent() {
        let out = format_json(r#"{"a":[1,2]}"#, FormatOptions { indent: 4, sort_keys: false }).unwrap();
        assert_eq!(out, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
    }

    #[test]
    fn key_order_preserved_unless_sorted() {
        let input = r#"{"b":1,"a":{"d":2,"c":3}}"#;
        assert_eq!(minify_json(input, false).unwrap(), input);
        assert_eq!(
            minify_json(input, true).unwrap(),
            r#"{"a":{"c":3,"d":2},"b":1}"#
        );
    }

    #[test]
    fn validate_reports_position() {
        assert!(validate_json(r#"{"ok": true}"#).is_ok());
        match validate_json("{\n  \"a\": 1,\n  oops\n}") {
            Err(DeskError::Parse { format, line, column, message }) => {
                assert_eq!(format, "JSON");
                assert_eq!(line, 3);
                assert!(column > 0);
                assert!(!message.contains("at line"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_invalid_input() {
        assert!(matches!(validate_json("   "), Err(DeskError::InvalidInput(_))));
        assert!(matches!(
            yaml_to_json("", FormatOptions::default()),
            Err(DeskError::InvalidInput(_))
        ));
    }

    #[test]
    fn json_yaml_round_trip() {
        let yaml = json_to_yaml(r#"{"name":"desk","tags":["a","b"],"n":3}"#, false).unwrap();
        assert_eq!(yaml, "name: desk\ntags:\n- a\n- b\nn: 3\n");

        let json = yaml_to_json(&yaml, FormatOptions::default()).unwrap();
        assert_eq!(
            json,
            "{\n  \"name\": \"desk\",\n  \"tags\": [\n    \"a\",\n    \"b\"\n  ],\n  \"n\": 3\n}"
        );
    }

    #[test]
    fn yaml_errors_are_parse_errors() {
        let err = yaml_to_json("a: [1, 2\nb: 3", FormatOptions::default()).unwrap_err();
        assert!(matches!(err, DeskError::Parse { format: "YAML", .. }));
    }
}
