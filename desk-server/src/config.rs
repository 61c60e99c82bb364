use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderMode {
    /// Canned, deterministic data; no network access
    Mock,
    /// Open-Meteo and open.er-api.com
    Live,
}

impl ProviderMode {
    fn from_env(value: &str) -> anyhow::Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "live" => Ok(Self::Live),
            other => Err(anyhow::anyhow!(
                "Invalid DESKHUB_PROVIDER '{other}'. Expected 'mock' or 'live'"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the server listens on
    pub port: u16,
    /// Built UI bundle (`dx build` output)
    pub frontend_dist: String,
    pub provider_mode: ProviderMode,
    /// Timeout applied to every upstream request
    pub http_timeout: Duration,
    /// Extra CORS origins allowed to call the API (the UI dev server)
    pub allowed_origins: Vec<String>,
    pub geocoding_url: String,
    pub forecast_url: String,
    pub exchange_rates_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env_parse("DESKHUB_PORT", 8080)?,
            frontend_dist: frontend_dist_from_env(),
            provider_mode: ProviderMode::from_env(&env_str("DESKHUB_PROVIDER", "mock"))?,
            http_timeout: Duration::from_secs(env_parse("DESKHUB_HTTP_TIMEOUT_SECS", 10)?),
            allowed_origins: env_csv(
                "DESKHUB_ALLOWED_ORIGINS",
                &["http://localhost:8080", "http://127.0.0.1:8080"],
            ),
            geocoding_url: env_str(
                "OPEN_METEO_GEOCODING_URL",
                "https://geocoding-api.open-meteo.com/v1/search",
            ),
            forecast_url: env_str(
                "OPEN_METEO_FORECAST_URL",
                "https://api.open-meteo.com/v1/forecast",
            ),
            exchange_rates_url: env_str("EXCHANGE_RATES_URL", "https://open.er-api.com/v6/latest"),
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

fn env_csv(key: &str, default: &[&str]) -> Vec<String> {
    match std::env::var(key) {
        Ok(raw) => parse_csv(&raw),
        Err(_) => default.iter().map(|s| (*s).to_string()).collect(),
    }
}

fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Resolve the UI dist directory.
///
/// If `FRONTEND_DIST` is set, that value is used as-is. Otherwise resolve the
/// `dx build` debug output from the workspace root so the server works when
/// launched from the repository root or from `desk-server/`.
pub fn frontend_dist_from_env() -> String {
    if let Ok(path) = std::env::var("FRONTEND_DIST") {
        return path;
    }

    let workspace_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    workspace_root
        .join("desk-ui/target/dx/desk-ui/debug/web/public")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_mode_parsing() {
        assert_eq!(ProviderMode::from_env("mock").unwrap(), ProviderMode::Mock);
        assert_eq!(ProviderMode::from_env(" LIVE ").unwrap(), ProviderMode::Live);
        assert!(ProviderMode::from_env("cached").is_err());
    }

    #[test]
    fn csv_skips_blank_entries() {
        assert_eq!(
            parse_csv(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
