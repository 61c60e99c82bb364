//! Canned providers used by default and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use desk_core::widgets::weather::describe_weather_code;
use shared_types::{ExchangeRates, WeatherReport};

use super::{ProviderError, RatesProvider, WeatherProvider};

struct MockCity {
    name: &'static str,
    aliases: &'static [&'static str],
    country: &'static str,
    latitude: f64,
    longitude: f64,
    temperature_c: f64,
    apparent_temperature_c: f64,
    humidity_pct: f64,
    wind_speed_kmh: f64,
    weather_code: u16,
}

const CITIES: &[MockCity] = &[
    MockCity {
        name: "São Paulo",
        aliases: &["sao paulo"],
        country: "BR",
        latitude: -23.55,
        longitude: -46.63,
        temperature_c: 24.0,
        apparent_temperature_c: 25.1,
        humidity_pct: 68.0,
        wind_speed_kmh: 9.0,
        weather_code: 2,
    },
    MockCity {
        name: "London",
        aliases: &[],
        country: "GB",
        latitude: 51.51,
        longitude: -0.13,
        temperature_c: 11.5,
        apparent_temperature_c: 9.8,
        humidity_pct: 81.0,
        wind_speed_kmh: 17.0,
        weather_code: 61,
    },
    MockCity {
        name: "New York",
        aliases: &["nyc"],
        country: "US",
        latitude: 40.71,
        longitude: -74.01,
        temperature_c: 16.2,
        apparent_temperature_c: 15.4,
        humidity_pct: 55.0,
        wind_speed_kmh: 14.0,
        weather_code: 1,
    },
    MockCity {
        name: "Tokyo",
        aliases: &[],
        country: "JP",
        latitude: 35.69,
        longitude: 139.69,
        temperature_c: 19.8,
        apparent_temperature_c: 19.5,
        humidity_pct: 62.0,
        wind_speed_kmh: 8.0,
        weather_code: 3,
    },
    MockCity {
        name: "Berlin",
        aliases: &[],
        country: "DE",
        latitude: 52.52,
        longitude: 13.41,
        temperature_c: 9.4,
        apparent_temperature_c: 7.0,
        humidity_pct: 74.0,
        wind_speed_kmh: 12.0,
        weather_code: 45,
    },
    MockCity {
        name: "Sydney",
        aliases: &[],
        country: "AU",
        latitude: -33.87,
        longitude: 151.21,
        temperature_c: 22.7,
        apparent_temperature_c: 22.9,
        humidity_pct: 59.0,
        wind_speed_kmh: 21.0,
        weather_code: 0,
    },
];

/// Units of each currency per US dollar
const USD_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 151.4),
    ("CHF", 0.9),
    ("CAD", 1.36),
    ("AUD", 1.52),
    ("CNY", 7.23),
    ("INR", 83.3),
    ("BRL", 5.03),
    ("MXN", 16.9),
    ("SEK", 10.6),
];

#[derive(Debug, Default, Clone)]
pub struct MockWeatherProvider;

impl MockWeatherProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let wanted = city.trim().to_lowercase();
        let found = CITIES
            .iter()
            .find(|c| c.name.to_lowercase() == wanted || c.aliases.contains(&wanted.as_str()))
            .ok_or_else(|| ProviderError::NotFound(format!("City '{}'", city.trim())))?;

        let (description, _) = describe_weather_code(found.weather_code);
        Ok(WeatherReport {
            location: found.name.to_string(),
            country: Some(found.country.to_string()),
            latitude: found.latitude,
            longitude: found.longitude,
            temperature_c: found.temperature_c,
            apparent_temperature_c: Some(found.apparent_temperature_c),
            humidity_pct: Some(found.humidity_pct),
            wind_speed_kmh: found.wind_speed_kmh,
            weather_code: found.weather_code,
            description: description.to_string(),
            observed_at: Utc::now(),
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct MockRatesProvider;

impl MockRatesProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RatesProvider for MockRatesProvider {
    async fn latest_rates(&self, base: &str) -> Result<ExchangeRates, ProviderError> {
        let base_per_usd = USD_RATES
            .iter()
            .find(|(code, _)| *code == base)
            .map(|(_, rate)| *rate)
            .ok_or_else(|| ProviderError::NotFound(format!("Currency '{base}'")))?;

        let rates: BTreeMap<String, f64> = USD_RATES
            .iter()
            .map(|(code, per_usd)| {
                let cross = per_usd / base_per_usd;
                (code.to_string(), (cross * 1_000_000.0).round() / 1_000_000.0)
            })
            .collect();

        Ok(ExchangeRates {
            base: base.to_string(),
            rates,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn weather_lookup_is_case_insensitive() {
        let provider = MockWeatherProvider::new();
        let report = provider.current_weather("  berlin ").await.unwrap();
        assert_eq!(report.location, "Berlin");
        assert_eq!(report.description, "Fog");

        let alias = provider.current_weather("Sao Paulo").await.unwrap();
        assert_eq!(alias.location, "São Paulo");
    }

    #[tokio::test]
    async fn unknown_city_is_not_found() {
        let err = MockWeatherProvider::new()
            .current_weather("Atlantis")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn rates_are_rebased() {
        let provider = MockRatesProvider::new();
        let eur = provider.latest_rates("EUR").await.unwrap();
        assert_eq!(eur.base, "EUR");
        assert_eq!(eur.rates["EUR"], 1.0);
        assert!((eur.rates["USD"] - 1.0 / 0.92).abs() < 1e-5);

        assert!(matches!(
            provider.latest_rates("XYZ").await,
            Err(ProviderError::NotFound(_))
        ));
    }
}
