//! Current weather decoding and the conditions table.

use serde::Deserialize;
use serde_json::Value;

use super::table::{render_table, RAMAC};
use super::{decode_payload, Scalar};
use crate::errors::ReplyError;

const HEADERS: [&str; 7] = ["AQI", "空气", "温度", "湿度", "天气", "风向", "风力"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherReport {
    pub air: AirQuality,
    pub observe: Observation,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AirQuality {
    pub aqi: Scalar,
    pub aqi_name: Scalar,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub degree: Scalar,
    pub humidity: Scalar,
    pub weather: Scalar,
    pub wind_direction: Scalar,
    pub wind_power: Scalar,
}

#[derive(Deserialize)]
struct WeatherEnvelope {
    data: WeatherReport,
}

/// Decode a `weather` reply: `{ data: { air: {..}, observe: {..} } }`.
pub fn parse_weather(payload: &Value) -> Result<WeatherReport, ReplyError> {
    decode_payload::<WeatherEnvelope>("weather", payload).map(|envelope| envelope.data)
}

pub fn format_weather(report: &WeatherReport) -> String {
    let header = HEADERS.iter().map(|cell| cell.to_string()).collect();
    let observe = &report.observe;
    let values = vec![
        report.air.aqi.to_string(),
        report.air.aqi_name.to_string(),
        format!("{}°C", observe.degree),
        format!("{}%", observe.humidity),
        observe.weather.to_string(),
        format!("{}°", observe.wind_direction),
        format!("{} 级", observe.wind_power),
    ];
    render_table(&[header, values], &RAMAC)
}
