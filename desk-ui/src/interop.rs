use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

/// Get the browser viewport dimensions, or a desktop-sized fallback when no
/// window is available.
pub fn get_viewport_size() -> (u32, u32) {
    let Some(window) = window() else {
        return (1280, 800);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1280.0) as u32;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0) as u32;
    (width, height)
}

/// Get the current workspace canvas size in CSS pixels.
pub fn get_window_canvas_size() -> Option<(u32, u32)> {
    let window = window()?;
    let document = window.document()?;
    let canvas = document.query_selector(".window-canvas").ok()??;
    let width = canvas.client_width();
    let height = canvas.client_height();
    if width > 0 && height > 0 {
        Some((width as u32, height as u32))
    } else {
        None
    }
}

/// Copy text through the async clipboard API.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or("No browser window")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| {
            e.as_string()
                .unwrap_or_else(|| "Clipboard access was denied".to_string())
        })
}

/// Look up an `<audio>`/`<video>` element rendered by a component.
pub fn media_element(id: &str) -> Option<web_sys::HtmlMediaElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlMediaElement>()
        .ok()
}
