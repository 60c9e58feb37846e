//! Reply formatters.
//!
//! Pure functions from decoded reply payloads to text blocks ready for the
//! terminal view:
//! - weather.rs: current conditions table
//! - stock.rs: quote table
//! - table.rs: bordered, centred text tables

mod stock;
mod table;
mod weather;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::ReplyError;

pub use stock::{format_stock, parse_stock};
pub use weather::{format_weather, parse_weather};

const UNIT_BASE: f64 = 10_000.0;
const UNIT_LABELS: [&str; 4] = ["", "万", "亿", "万亿"];

/// Round to cents with ties away from zero. `{:.2}` alone rounds an exact
/// tie like 1.125 to even.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Abbreviate a large magnitude on a base-10,000 ladder with 2 decimals.
pub fn currency_format(value: f64) -> String {
    let mut tier = 0;
    let mut scaled = value;
    while tier + 1 < UNIT_LABELS.len() && scaled.abs() >= UNIT_BASE {
        scaled /= UNIT_BASE;
        tier += 1;
    }
    format!("{:.2}{}", round_cents(scaled), UNIT_LABELS[tier])
}

/// A JSON value that upstream services send as either a number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(value) => write!(f, "{value}"),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// Decode a reply payload that may arrive as JSON text or as a JSON value.
pub(crate) fn decode_payload<T: DeserializeOwned>(
    topic: &'static str,
    payload: &Value,
) -> Result<T, ReplyError> {
    let decoded = match payload {
        Value::String(text) => serde_json::from_str(text),
        other => T::deserialize(other),
    };
    decoded.map_err(|err| ReplyError::malformed(topic, err))
}
