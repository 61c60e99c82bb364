//! HTTP API routes for the Deskhub server

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;

pub mod rates;
pub mod weather;

use crate::config::Config;
use crate::providers::{
    self, MockRatesProvider, MockWeatherProvider, SharedRatesProvider, SharedWeatherProvider,
};

#[derive(Clone)]
pub struct ApiState {
    pub weather: SharedWeatherProvider,
    pub rates: SharedRatesProvider,
}

impl ApiState {
    pub fn new(weather: SharedWeatherProvider, rates: SharedRatesProvider) -> Self {
        Self { weather, rates }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let (weather, rates) = providers::from_config(config)?;
        Ok(Self::new(weather, rates))
    }

    /// Canned providers, no network
    pub fn mock() -> Self {
        Self::new(
            Arc::new(MockWeatherProvider::new()),
            Arc::new(MockRatesProvider::new()),
        )
    }
}

/// Configure all API routes
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/weather", get(weather::get_weather))
        .route("/api/rates", get(rates::get_rates))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "deskhub-server",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
