//! Current weather for the weather widget.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use shared_types::{ApiResponse, WeatherReport};

use crate::api::ApiState;
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub city: Option<String>,
}

pub async fn get_weather(
    State(state): State<ApiState>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<WeatherReport> {
    let city = query.city.as_deref().map(str::trim).unwrap_or_default();
    if city.is_empty() {
        return Err(ApiError::BadRequest(
            "query parameter 'city' is required".to_string(),
        ));
    }

    let report = state.weather.current_weather(city).await?;
    tracing::debug!(city, location = %report.location, "Weather lookup");
    Ok(Json(ApiResponse::ok(report)))
}
