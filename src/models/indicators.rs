use serde::{Deserialize, Serialize};

/// Indicator output aligned index-for-index with the input prices.
///
/// Entries inside the indicator's warm-up window are `None`.
pub type IndicatorSeries = Vec<Option<f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Local extrema found by the support/resistance scan, as price values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportResistanceLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

/// Latest value of every indicator the signal stage reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub sma_short: Option<f64>,
    pub sma_medium: Option<f64>,
    pub sma_long: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub bollinger_upper: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub nearest_support: f64,
    pub nearest_resistance: f64,
    pub average_volume: f64,
}
