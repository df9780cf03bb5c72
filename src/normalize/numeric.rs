use tracing::{debug, warn};

use crate::error::{AppError, Result};

/// Parse a nullable numeric string, mapping anything that is not a finite
/// number to `None`.
pub fn number_or_null(value: Option<&str>) -> Option<f64> {
    let raw = value?;
    match parse_finite(raw) {
        Some(n) => Some(n),
        None => {
            debug!(value = raw, "[NORMALIZE] non-numeric value mapped to null");
            None
        }
    }
}

/// Parse a decimal field that the subgraph always populates.
pub(crate) fn parse_decimal(field: &'static str, value: &str) -> Result<f64> {
    parse_finite(value).ok_or_else(|| invalid(field, value))
}

/// Parse a count, block number or unix timestamp.
pub(crate) fn parse_integer(field: &'static str, value: &str) -> Result<u64> {
    value.trim().parse::<u64>().map_err(|_| invalid(field, value))
}

/// `f64::from_str` accepts "NaN" and "inf"; neither is a usable amount.
fn parse_finite(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn invalid(field: &'static str, value: &str) -> AppError {
    warn!(field, value, "[NORMALIZE] malformed numeric field");
    AppError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}
