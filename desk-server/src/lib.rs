pub mod api;
pub mod config;
pub mod error;
pub mod providers;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// API routes plus the built UI. Unknown paths fall back to `index.html` so
/// client-side routes survive a reload.
pub fn app(state: api::ApiState, frontend_dist: &str) -> Router {
    let static_files =
        ServeDir::new(frontend_dist).fallback(ServeFile::new(format!("{frontend_dist}/index.html")));

    api::router()
        .with_state(state)
        .fallback_service(static_files)
}
