//! Exchange rates for the currency widget.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use shared_types::{ApiResponse, ExchangeRates};

use crate::api::ApiState;
use crate::error::{ApiError, ApiResult};

const DEFAULT_BASE: &str = "USD";

#[derive(Debug, Deserialize)]
pub struct RatesQuery {
    #[serde(default)]
    pub base: Option<String>,
}

/// Normalise a currency code to upper case; it must be three ASCII letters.
pub fn normalize_base(raw: Option<&str>) -> Result<String, ApiError> {
    let code = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_BASE);
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ApiError::BadRequest(format!(
            "'{code}' is not a three-letter currency code"
        )));
    }
    Ok(code.to_ascii_uppercase())
}

pub async fn get_rates(
    State(state): State<ApiState>,
    Query(query): Query<RatesQuery>,
) -> ApiResult<ExchangeRates> {
    let base = normalize_base(query.base.as_deref())?;
    let rates = state.rates.latest_rates(&base).await?;
    tracing::debug!(base = %base, count = rates.rates.len(), "Exchange rates lookup");
    Ok(Json(ApiResponse::ok(rates)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_defaults_and_uppercases() {
        assert_eq!(normalize_base(None).unwrap(), "USD");
        assert_eq!(normalize_base(Some("  ")).unwrap(), "USD");
        assert_eq!(normalize_base(Some("eur")).unwrap(), "EUR");
        assert!(normalize_base(Some("EURO")).is_err());
        assert!(normalize_base(Some("U$D")).is_err());
    }
}
