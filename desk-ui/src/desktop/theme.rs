use shared_types::STORAGE_KEY_THEME;

use crate::storage::{load_raw, save_raw};

pub const DEFAULT_THEME: &str = "dark";

pub fn next_theme(current: &str) -> String {
    if current == "light" {
        "dark".to_string()
    } else {
        "light".to_string()
    }
}

fn is_known_theme(theme: &str) -> bool {
    matches!(theme, "dark" | "light")
}

/// Set `data-theme` on the root element; the token stylesheet keys off it.
pub fn apply_theme_to_document(theme: &str) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(e) = root.set_attribute("data-theme", theme) {
        dioxus_logger::tracing::warn!("Failed to apply theme {}: {:?}", theme, e);
    }
}

pub fn get_cached_theme_preference() -> Option<String> {
    load_raw(STORAGE_KEY_THEME).filter(|theme| is_known_theme(theme))
}

pub fn set_cached_theme_preference(theme: &str) {
    save_raw(STORAGE_KEY_THEME, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_alternate() {
        assert_eq!(next_theme("dark"), "light");
        assert_eq!(next_theme("light"), "dark");
        assert_eq!(next_theme("unknown"), "light");
        assert!(is_known_theme(DEFAULT_THEME));
    }
}
