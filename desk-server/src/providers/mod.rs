//! Upstream data sources for the weather and currency widgets.
//!
//! Each concern is a trait so the router can run against canned data in tests
//! and local development, and against the public APIs in production.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{ExchangeRates, WeatherReport};

use crate::config::{Config, ProviderMode};

pub mod live;
pub mod mock;

pub use live::{LiveRatesProvider, LiveWeatherProvider};
pub use mock::{MockRatesProvider, MockWeatherProvider};

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Unexpected upstream response: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city name (already trimmed, non-empty).
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}

#[async_trait]
pub trait RatesProvider: Send + Sync {
    /// Latest rates quoted against `base` (upper-case ISO 4217 code).
    async fn latest_rates(&self, base: &str) -> Result<ExchangeRates, ProviderError>;
}

pub type SharedWeatherProvider = Arc<dyn WeatherProvider>;
pub type SharedRatesProvider = Arc<dyn RatesProvider>;

/// Build the provider pair selected by `DESKHUB_PROVIDER`.
pub fn from_config(config: &Config) -> anyhow::Result<(SharedWeatherProvider, SharedRatesProvider)> {
    match config.provider_mode {
        ProviderMode::Mock => Ok((
            Arc::new(MockWeatherProvider::new()),
            Arc::new(MockRatesProvider::new()),
        )),
        ProviderMode::Live => {
            let http = reqwest::Client::builder()
                .timeout(config.http_timeout)
                .user_agent("Deskhub/0.1")
                .build()?;
            Ok((
                Arc::new(LiveWeatherProvider::new(
                    http.clone(),
                    config.geocoding_url.clone(),
                    config.forecast_url.clone(),
                )),
                Arc::new(LiveRatesProvider::new(http, config.exchange_rates_url.clone())),
            ))
        }
    }
}
