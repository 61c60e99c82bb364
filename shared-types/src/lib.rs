//! Shared types between frontend and backend
//!
//! These types are used by both:
//! - the axum service (native Rust)
//! - Dioxus components (WASM)
//!
//! Serializable with serde for JSON over HTTP and browser storage

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ============================================================================
// UI State
// ============================================================================

/// Desktop state - all windows and their positions
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct DesktopState {
    pub windows: Vec<WindowState>,
    pub active_window: Option<String>,
    pub apps: Vec<AppDefinition>,
}

/// Position and size of a window on the canvas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Individual window state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct WindowState {
    pub id: String,
    pub app_id: String, // "todo", "weather", "pomodoro", etc.
    pub title: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    /// Bounds to return to when a maximized window is restored
    #[serde(default)]
    pub restore_bounds: Option<WindowBounds>,
}

impl WindowState {
    pub fn bounds(&self) -> WindowBounds {
        WindowBounds {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_bounds(&mut self, bounds: WindowBounds) {
        self.x = bounds.x;
        self.y = bounds.y;
        self.width = bounds.width;
        self.height = bounds.height;
    }
}

/// App definition shown in the dock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct AppDefinition {
    pub id: String,
    pub name: String,
    pub icon: String, // emoji
    pub default_width: i32,
    pub default_height: i32,
    /// Launching an already open single-instance app focuses its window
    pub single_instance: bool,
}

// ============================================================================
// Widget API Types
// ============================================================================

/// Current conditions for one location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct WeatherReport {
    pub location: String,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub apparent_temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub wind_speed_kmh: f64,
    /// WMO weather interpretation code
    pub weather_code: u16,
    pub description: String,
    pub observed_at: DateTime<Utc>,
}

/// Exchange rates relative to `base` (1 base = rate units of the quote)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../../desk-ui/src/types/generated.ts")]
pub struct ExchangeRates {
    pub base: String,
    pub rates: BTreeMap<String, f64>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// API Types
// ============================================================================

/// Generic API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Collapse the envelope into a Result, treating `success=false` as an error
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "API returned success=false".to_string())),
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Prefix for every browser storage key owned by the desktop
pub const STORAGE_PREFIX: &str = "deskhub";

pub const STORAGE_KEY_THEME: &str = "deskhub.theme";
pub const STORAGE_KEY_MIXER: &str = "deskhub.mixer";
pub const STORAGE_KEY_POMODORO: &str = "deskhub.pomodoro";
pub const STORAGE_KEY_TODOS: &str = "deskhub.todos";
pub const STORAGE_KEY_KANBAN: &str = "deskhub.kanban";
pub const STORAGE_KEY_HABITS: &str = "deskhub.habits";
pub const STORAGE_KEY_NOTES: &str = "deskhub.notes";
pub const STORAGE_KEY_WEATHER: &str = "deskhub.weather";
pub const STORAGE_KEY_CURRENCY: &str = "deskhub.currency";
pub const STORAGE_KEY_VIDEO: &str = "deskhub.video";
pub const STORAGE_KEY_PASSWORD: &str = "deskhub.password";

// ============================================================================
// Tests
// ============================================================================
