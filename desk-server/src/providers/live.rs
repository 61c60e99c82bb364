//! Providers backed by public HTTP APIs (Open-Meteo, open.er-api.com).

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use desk_core::widgets::weather::describe_weather_code;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::{ExchangeRates, WeatherReport};

use super::{ProviderError, RatesProvider, WeatherProvider};

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    time: String,
    temperature_2m: f64,
    #[serde(default)]
    apparent_temperature: Option<f64>,
    #[serde(default)]
    relative_humidity_2m: Option<f64>,
    wind_speed_10m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    result: String,
    #[serde(default)]
    base_code: Option<String>,
    #[serde(default)]
    time_last_update_unix: Option<i64>,
    #[serde(default)]
    rates: BTreeMap<String, f64>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
}

async fn get_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    source: &str,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::Upstream(format!("{source}: {e}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Upstream(format!("{source} returned {status}")));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::InvalidResponse(format!("{source}: {e}")))
}

/// Open-Meteo reports local ISO times without seconds ("2024-05-01T14:15").
fn parse_observed_at(raw: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_else(|_| Utc::now())
}

pub struct LiveWeatherProvider {
    http: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
}

impl LiveWeatherProvider {
    pub fn new(http: reqwest::Client, geocoding_url: String, forecast_url: String) -> Self {
        Self {
            http,
            geocoding_url,
            forecast_url,
        }
    }
}

#[async_trait]
impl WeatherProvider for LiveWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let geo: GeocodingResponse = get_json(
            self.http.get(&self.geocoding_url).query(&[
                ("name", city),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ]),
            "geocoding",
        )
        .await?;
        let place = geo
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::NotFound(format!("City '{city}'")))?;

        tracing::debug!(
            city,
            resolved = %place.name,
            latitude = place.latitude,
            longitude = place.longitude,
            "Resolved city"
        );

        let forecast: ForecastResponse = get_json(
            self.http.get(&self.forecast_url).query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                (
                    "current",
                    "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,wind_speed_10m"
                        .to_string(),
                ),
                ("timezone", "UTC".to_string()),
            ]),
            "forecast",
        )
        .await?;

        let current = forecast.current;
        let (description, _) = describe_weather_code(current.weather_code);
        Ok(WeatherReport {
            location: place.name,
            country: place.country_code,
            latitude: place.latitude,
            longitude: place.longitude,
            temperature_c: current.temperature_2m,
            apparent_temperature_c: current.apparent_temperature,
            humidity_pct: current.relative_humidity_2m,
            wind_speed_kmh: current.wind_speed_10m,
            weather_code: current.weather_code,
            description: description.to_string(),
            observed_at: parse_observed_at(&current.time),
        })
    }
}

pub struct LiveRatesProvider {
    http: reqwest::Client,
    base_url: String,
}

impl LiveRatesProvider {
    pub fn new(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl RatesProvider for LiveRatesProvider {
    async fn latest_rates(&self, base: &str) -> Result<ExchangeRates, ProviderError> {
        let url = format!("{}/{base}", self.base_url.trim_end_matches('/'));
        let body: RatesResponse = get_json(self.http.get(&url), "exchange rates").await?;
        into_exchange_rates(body, base)
    }
}

fn into_exchange_rates(body: RatesResponse, base: &str) -> Result<ExchangeRates, ProviderError> {
    if body.result != "success" {
        let kind = body.error_type.unwrap_or_else(|| "unknown".to_string());
        return Err(if kind == "unsupported-code" {
            ProviderError::NotFound(format!("Currency '{base}'"))
        } else {
            ProviderError::Upstream(format!("exchange rates: {kind}"))
        });
    }
    if body.rates.is_empty() {
        return Err(ProviderError::InvalidResponse(
            "exchange rates: empty rate table".to_string(),
        ));
    }
    let updated_at = body
        .time_last_update_unix
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .unwrap_or_else(Utc::now);
    Ok(ExchangeRates {
        base: body.base_code.unwrap_or_else(|| base.to_string()),
        rates: body.rates,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_open_meteo_timestamps() {
        let ts = parse_observed_at("2024-05-01T14:15");
        assert_eq!(ts.to_rfc3339(), "2024-05-01T14:15:00+00:00");
    }

    #[test]
    fn rates_payload_maps_errors() {
        let unsupported: RatesResponse =
            serde_json::from_str(r#"{"result":"error","error-type":"unsupported-code"}"#).unwrap();
        assert!(matches!(
            into_exchange_rates(unsupported, "XYZ"),
            Err(ProviderError::NotFound(_))
        ));

        let limited: RatesResponse =
            serde_json::from_str(r#"{"result":"error","error-type":"quota-reached"}"#).unwrap();
        assert!(matches!(
            into_exchange_rates(limited, "USD"),
            Err(ProviderError::Upstream(_))
        ));
    }

    #[test]
    fn rates_payload_success() {
        let ok: RatesResponse = serde_json::from_str(
            r#"{"result":"success","base_code":"USD","time_last_update_unix":1700000000,"rates":{"USD":1,"EUR":0.92}}"#,
        )
        .unwrap();
        let rates = into_exchange_rates(ok, "USD").unwrap();
        assert_eq!(rates.base, "USD");
        assert_eq!(rates.rates["EUR"], 0.92);
        assert_eq!(rates.updated_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn geocoding_without_results_deserializes() {
        let geo: GeocodingResponse = serde_json::from_str(r#"{"generationtime_ms":0.5}"#).unwrap();
        assert!(geo.results.is_empty());
    }
}
