//! Stock quote decoding and the quote table.

use serde::Deserialize;
use serde_json::Value;

use super::table::{render_table, NORC};
use super::{currency_format, decode_payload, round_cents};
use crate::errors::ReplyError;

const HEADERS: [&str; 9] = [
    "公司",
    "盘前价格",
    "涨跌幅度",
    "市场价格",
    "市价范围",
    "成交量",
    "52周范围",
    "市值",
    "单位",
];

/// Shown when there is no pre-market trade yet.
pub const PRE_MARKET_PLACEHOLDER: &str = "暂无成交";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub display_name: String,
    #[serde(default)]
    pub pre_market_price: Option<f64>,
    pub regular_market_change_percent: f64,
    pub regular_market_price: f64,
    pub regular_market_day_range: String,
    pub regular_market_volume: f64,
    pub fifty_two_week_range: String,
    pub market_cap: f64,
    pub currency: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteEnvelope {
    quote_response: QuoteResponse,
}

#[derive(Deserialize)]
struct QuoteResponse {
    #[serde(default)]
    result: Vec<Quote>,
    #[serde(default)]
    error: Option<Value>,
}

/// Decode a `stock` reply and pick the first quote.
///
/// A non-null `error` field is reported as an upstream error.
pub fn parse_stock(payload: &Value) -> Result<Quote, ReplyError> {
    let envelope = decode_payload::<QuoteEnvelope>("stock", payload)?;
    let response = envelope.quote_response;
    if let Some(error) = response.error {
        return Err(ReplyError::Upstream {
            topic: "stock",
            message: upstream_message(&error),
        });
    }
    response
        .result
        .into_iter()
        .next()
        .ok_or_else(|| ReplyError::malformed("stock", "no quote in result"))
}

fn upstream_message(error: &Value) -> String {
    error
        .get("description")
        .and_then(Value::as_str)
        .or_else(|| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| error.to_string())
}

pub fn format_stock(quote: &Quote) -> String {
    let header = HEADERS.iter().map(|cell| cell.to_string()).collect();
    let company = quote
        .display_name
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string();
    let pre_market = match quote.pre_market_price {
        Some(price) if price != 0.0 && !price.is_nan() => price.to_string(),
        _ => PRE_MARKET_PLACEHOLDER.to_string(),
    };
    let values = vec![
        company,
        pre_market,
        format!("{:.2}%", round_cents(quote.regular_market_change_percent)),
        quote.regular_market_price.to_string(),
        quote.regular_market_day_range.replacen('-', "~", 1),
        format!("{}股", currency_format(quote.regular_market_volume)),
        quote.fifty_two_week_range.replacen('-', "~", 1),
        currency_format(quote.market_cap),
        quote.currency.clone(),
    ];
    render_table(&[header, values], &NORC)
}
