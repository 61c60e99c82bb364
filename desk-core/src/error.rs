// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum DeskError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{format} parse error at line {line}, column {column}: {message}")]
    Parse {
        format: &'static str,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("App not found: {0}")]
    AppNotFound(String),

    #[error("Window not found: {0}")]
    WindowNotFound(String),

    #[error("Invalid size {width}x{height} (minimum is {min_width}x{min_height})")]
    InvalidSize {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}

impl DeskError {
    pub fn invalid(message: impl Into<String>) -> Self {
        DeskError::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(e: serde_json::Error) -> Self {
        DeskError::Parse {
            format: "JSON",
            line: e.line(),
            column: e.column(),
            message: strip_position_suffix(&e.to_string()),
        }
    }
}

impl From<serde_yaml_ng::Error> for DeskError {
    fn from(e: serde_yaml_ng::Error) -> Self {
        let (line, column) = e
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((0, 0));
        DeskError::Parse {
            format: "YAML",
            line,
            column,
            message: strip_position_suffix(&e.to_string()),
        }
    }
}

/// serde error strings end with " at line X column Y", which the Parse
/// variant already carries.
fn strip_position_suffix(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

pub type DeskResult<T> = Result<T, DeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_carries_position() {
        let err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        match DeskError::from(err) {
            DeskError::Parse {
                format,
                line,
                column,
                message,
            } => {
                assert_eq!(format, "JSON");
                assert_eq!(line, 2);
                assert!(column > 0);
                assert!(!message.contains(" at line "));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_size_message_names_minimum() {
        let err = DeskError::InvalidSize {
            width: 10,
            height: 10,
            min_width: 200,
            min_height: 160,
        };
        assert_eq!(
            err.to_string(),
            "Invalid size 10x10 (minimum is 200x160)"
        );
    }
}
