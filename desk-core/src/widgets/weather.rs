use serde::{Deserialize, Serialize};
use shared_types::WeatherReport;

use crate::error::{DeskError, DeskResult};

/// Human text and icon for a WMO weather interpretation code.
pub fn describe_weather_code(code: u16) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "☀️"),
        1 => ("Mainly clear", "🌤️"),
        2 => ("Partly cloudy", "⛅"),
        3 => ("Overcast", "☁️"),
        45 | 48 => ("Fog", "🌫️"),
        51 | 53 | 55 => ("Drizzle", "🌦️"),
        56 | 57 => ("Freezing drizzle", "🌧️"),
        61 => ("Light rain", "🌦️"),
        63 => ("Rain", "🌧️"),
        65 => ("Heavy rain", "🌧️"),
        66 | 67 => ("Freezing rain", "🌧️"),
        71 => ("Light snow", "🌨️"),
        73 => ("Snow", "🌨️"),
        75 => ("Heavy snow", "❄️"),
        77 => ("Snow grains", "🌨️"),
        80..=82 => ("Rain showers", "🌦️"),
        85 | 86 => ("Snow showers", "🌨️"),
        95 => ("Thunderstorm", "⛈️"),
        96 | 99 => ("Thunderstorm with hail", "⛈️"),
        _ => ("Unknown", "🌡️"),
    }
}

pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn format(self, celsius: f64) -> String {
        match self {
            TemperatureUnit::Celsius => format!("{celsius:.1}°C"),
            TemperatureUnit::Fahrenheit => format!("{:.1}°F", to_fahrenheit(celsius)),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }
}

pub fn validate_city(input: &str) -> DeskResult<String> {
    let city = input.trim();
    if city.is_empty() {
        return Err(DeskError::invalid("Enter a city name"));
    }
    Ok(city.to_string())
}

/// Persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherPrefs {
    #[serde(default)]
    pub last_city: Option<String>,
    #[serde(default)]
    pub unit: TemperatureUnit,
}

impl WeatherPrefs {
    pub fn remember(&mut self, city: &str) {
        self.last_city = Some(city.to_string());
    }
}

/// One-line summary used by the widget header, e.g. "Berlin, DE · 12.3°C".
pub fn summary_line(report: &WeatherReport, unit: TemperatureUnit) -> String {
    let place = match &report.country {
        Some(country) if !country.is_empty() => format!("{}, {country}", report.location),
        _ => report.location.clone(),
    };
    format!("{place} · {}", unit.format(report.temperature_c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn known_and_unknown_codes() {
        assert_eq!(describe_weather_code(0).0, "Clear sky");
        assert_eq!(describe_weather_code(81).0, "Rain showers");
        assert_eq!(describe_weather_code(99).0, "Thunderstorm with hail");
        assert_eq!(describe_weather_code(42).0, "Unknown");
    }

    #[test]
    fn fahrenheit_conversion() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(TemperatureUnit::Fahrenheit.format(-40.0), "-40.0°F");
        assert_eq!(TemperatureUnit::Celsius.toggled(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn city_must_not_be_blank() {
        assert_eq!(validate_city("  Oslo ").unwrap(), "Oslo");
        assert!(matches!(validate_city("   "), Err(DeskError::InvalidInput(_))));
    }

    #[test]
    fn summary_includes_country_when_known() {
        let mut report = WeatherReport {
            location: "Berlin".into(),
            country: Some("DE".into()),
            latitude: 52.52,
            longitude: 13.41,
            temperature_c: 12.34,
            apparent_temperature_c: None,
            humidity_pct: None,
            wind_speed_kmh: 5.0,
            weather_code: 3,
            description: "Overcast".into(),
            observed_at: Utc::now(),
        };
        assert_eq!(summary_line(&report, TemperatureUnit::Celsius), "Berlin, DE · 12.3°C");
        report.country = None;
        assert_eq!(summary_line(&report, TemperatureUnit::Celsius), "Berlin · 12.3°C");
    }

    #[test]
    fn prefs_round_trip_through_defaults() {
        let prefs: WeatherPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, WeatherPrefs::default());
        let mut prefs = prefs;
        prefs.remember("Lima");
        assert_eq!(prefs.last_city.as_deref(), Some("Lima"));
    }
}
