//! Currency conversion against a single-base rate table.

use serde::{Deserialize, Serialize};
use shared_types::ExchangeRates;

use crate::error::{DeskError, DeskResult};

/// Offered in the pickers; anything else the rate table knows is still
/// accepted by `convert`.
pub const COMMON_CURRENCIES: &[(&str, &str)] = &[
    ("USD", "US Dollar"),
    ("EUR", "Euro"),
    ("GBP", "British Pound"),
    ("JPY", "Japanese Yen"),
    ("CHF", "Swiss Franc"),
    ("CAD", "Canadian Dollar"),
    ("AUD", "Australian Dollar"),
    ("CNY", "Chinese Yuan"),
    ("INR", "Indian Rupee"),
    ("BRL", "Brazilian Real"),
    ("MXN", "Mexican Peso"),
    ("SEK", "Swedish Krona"),
];

fn rate_for(rates: &ExchangeRates, code: &str) -> DeskResult<f64> {
    if code.eq_ignore_ascii_case(&rates.base) {
        return Ok(1.0);
    }
    rates
        .rates
        .get(&code.to_ascii_uppercase())
        .copied()
        .filter(|r| r.is_finite() && *r > 0.0)
        .ok_or_else(|| DeskError::invalid(format!("Unknown currency: {code}")))
}

/// Convert `amount` of `from` into `to`, going through the table's base.
pub fn convert(amount: f64, from: &str, to: &str, rates: &ExchangeRates) -> DeskResult<f64> {
    let from_rate = rate_for(rates, from)?;
    let to_rate = rate_for(rates, to)?;
    Ok(amount / from_rate * to_rate)
}

/// Accepts thousands separators ("1,234.56"); rejects negative and
/// non-finite values.
pub fn parse_amount(input: &str) -> DeskResult<f64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(DeskError::invalid("Enter an amount"));
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| DeskError::invalid(format!("Not a number: {}", input.trim())))?;
    if !value.is_finite() {
        return Err(DeskError::invalid("Amount must be a finite number"));
    }
    if value < 0.0 {
        return Err(DeskError::invalid("Amount cannot be negative"));
    }
    Ok(value)
}

/// Two decimals with comma thousands separators.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Selected pair and last amount, persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPair {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub amount: String,
}

impl Default for CurrencyPair {
    fn default() -> Self {
        Self {
            from: "USD".into(),
            to: "EUR".into(),
            amount: "1".into(),
        }
    }
}

impl CurrencyPair {
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn table() -> ExchangeRates {
        let mut rates = BTreeMap::new();
        rates.insert("EUR".to_string(), 0.5);
        rates.insert("JPY".to_string(), 100.0);
        ExchangeRates {
            base: "USD".into(),
            rates,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn converts_through_base() {
        let t = table();
        assert_eq!(convert(10.0, "USD", "EUR", &t).unwrap(), 5.0);
        assert_eq!(convert(5.0, "EUR", "USD", &t).unwrap(), 10.0);
        assert_eq!(convert(1.0, "eur", "JPY", &t).unwrap(), 200.0);
        assert_eq!(convert(3.0, "USD", "USD", &t).unwrap(), 3.0);
    }

    #[test]
    fn unknown_currency_is_invalid_input() {
        let err = convert(1.0, "USD", "XYZ", &table()).unwrap_err();
        assert!(matches!(err, DeskError::InvalidInput(ref m) if m.contains("XYZ")));
    }

    #[test]
    fn parse_amount_rules() {
        assert_eq!(parse_amount("1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount(" 0 ").unwrap(), 0.0);
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1500.0), "-1,500.00");
        assert_eq!(format_amount(123.4), "123.40");
    }

    #[test]
    fn swap_exchanges_pair() {
        let mut pair = CurrencyPair::default();
        pair.swap();
        assert_eq!((pair.from.as_str(), pair.to.as_str()), ("EUR", "USD"));
    }
}
