use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SentimentError>;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("price series is empty")]
    EmptySeries,

    #[error("non-finite price {value} at index {index}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("market data fetch failed: {0}")]
    Fetch(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetching {asset_id} timed out after {timeout:?}")]
    Timeout { asset_id: String, timeout: Duration },

    #[error("invalid configuration: {0}")]
    Config(String),
}
