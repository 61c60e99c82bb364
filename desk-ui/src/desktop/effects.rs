use dioxus::prelude::{ReadableExt, Signal, WritableExt};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::desktop::theme::{apply_theme_to_document, get_cached_theme_preference, DEFAULT_THEME};

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let Some(window) = web_sys::window() else {
        return;
    };

    let callback = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
    let _ = window
        .add_event_listener_with_callback("orientationchange", callback.as_ref().unchecked_ref());

    // Keep listener alive for app lifetime.
    callback.forget();
}

fn current_viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

pub fn initialize_theme(mut theme_initialized: Signal<bool>, mut current_theme: Signal<String>) {
    if *theme_initialized.peek() {
        return;
    }
    theme_initialized.set(true);

    let theme = get_cached_theme_preference().unwrap_or_else(|| DEFAULT_THEME.to_string());
    apply_theme_to_document(&theme);
    current_theme.set(theme);
}

/// Lock page scrolling and pick the viewport meta for the current layout.
pub fn apply_document_layout(is_mobile: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Ok(Some(meta)) = document.query_selector("meta[name='viewport']") {
        let content = if is_mobile {
            "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no, viewport-fit=cover"
        } else {
            "width=device-width, initial-scale=1"
        };
        let _ = meta.set_attribute("content", content);
    }

    if let Some(body) = document.body() {
        let style = if is_mobile {
            "margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; overscroll-behavior: none; position: fixed; inset: 0;"
        } else {
            "margin: 0; padding: 0; width: 100%; height: 100%; overflow: hidden; overscroll-behavior: none;"
        };
        let _ = body.set_attribute("style", style);
    }
}
