use std::sync::OnceLock;

use gloo_net::http::Request;
use shared_types::{ApiResponse, ExchangeRates, WeatherReport};

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: use same origin (the server also serves the UI bundle)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        "".to_string()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

async fn describe_http_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return format!("HTTP error: {status}");
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return error.to_string();
        }
    }

    format!("HTTP error: {status} ({body})")
}

async fn get_envelope<T>(request: gloo_net::http::RequestBuilder) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let data: ApiResponse<T> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    data.into_result()
}

/// Current conditions for `city` (already validated as non-blank).
pub async fn fetch_weather(city: &str) -> Result<WeatherReport, String> {
    let url = format!("{}/api/weather", api_base());
    get_envelope(Request::get(&url).query([("city", city)])).await
}

pub async fn fetch_rates(base: &str) -> Result<ExchangeRates, String> {
    let url = format!("{}/api/rates", api_base());
    get_envelope(Request::get(&url).query([("base", base)])).await
}
