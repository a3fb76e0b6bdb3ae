//! Engine parameters and service settings.

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SentimentError};

/// Bullish/bearish percentage returned when a computation fails.
pub const FALLBACK_PERCENT: u8 = 50;
/// Vote count reported on both sides of a fallback result.
pub const FALLBACK_INDICATOR_COUNT: u32 = 10;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
pub const DEFAULT_CACHE_PREFIX: &str = "coin_sentiment_";

/// Get the deployment environment name (`APP_ENV`), defaulting to sandbox.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Periods and thresholds used by the indicator and signal stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub sma_short: usize,
    pub sma_medium: usize,
    pub sma_long: usize,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub support_resistance_window: usize,
    pub volume_window: usize,
    /// Number of consecutive same-direction moves that form a streak.
    pub streak_length: usize,
    pub short_change_lookback: usize,
    pub long_change_lookback: usize,
    /// Relative distance under which price counts as near a level.
    pub level_proximity: f64,
    pub synthetic_support_factor: f64,
    pub synthetic_resistance_factor: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_medium: 50,
            sma_long: 200,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            support_resistance_window: 20,
            volume_window: 10,
            streak_length: 3,
            short_change_lookback: 1,
            long_change_lookback: 7,
            level_proximity: 0.05,
            synthetic_support_factor: 0.8,
            synthetic_resistance_factor: 1.2,
        }
    }
}

/// Which price the signal stage compares against the indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Last price of the fetched history.
    #[default]
    SeriesClose,
    /// Price returned by the latest-quote endpoint.
    LatestQuote,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub api_base_url: Url,
    pub fetch_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_prefix: String,
    pub retry_attempts: usize,
    pub price_source: PriceSource,
    pub indicators: IndicatorConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse("http://localhost:3000/api/").expect("static url is valid"),
            fetch_timeout: Duration::from_secs(10),
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_prefix: DEFAULT_CACHE_PREFIX.to_string(),
            retry_attempts: 3,
            price_source: PriceSource::default(),
            indicators: IndicatorConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Build from environment variables, keeping defaults for anything unset.
    ///
    /// - `SENTIMENT_API_URL`: base URL of the market data API
    /// - `SENTIMENT_FETCH_TIMEOUT_SECONDS`
    /// - `SENTIMENT_CACHE_TTL_SECONDS`
    /// - `SENTIMENT_RETRY_ATTEMPTS`
    /// - `SENTIMENT_PRICE_SOURCE`: `series_close` or `latest_quote`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("SENTIMENT_API_URL") {
            config.api_base_url = parse_base_url(&raw)?;
        }
        if let Some(secs) = parse_env::<u64>("SENTIMENT_FETCH_TIMEOUT_SECONDS")? {
            config.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_env::<u64>("SENTIMENT_CACHE_TTL_SECONDS")? {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(attempts) = parse_env::<usize>("SENTIMENT_RETRY_ATTEMPTS")? {
            config.retry_attempts = attempts;
        }
        if let Ok(raw) = env::var("SENTIMENT_PRICE_SOURCE") {
            config.price_source = match raw.as_str() {
                "series_close" => PriceSource::SeriesClose,
                "latest_quote" => PriceSource::LatestQuote,
                other => {
                    return Err(SentimentError::Config(format!(
                        "unknown SENTIMENT_PRICE_SOURCE: {other}"
                    )))
                }
            };
        }

        Ok(config)
    }

    pub fn cache_key(&self, asset_id: &str) -> String {
        format!("{}{}", self.cache_prefix, asset_id)
    }
}

/// Parse a base URL, adding the trailing slash `Url::join` needs to keep the last segment.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| SentimentError::Config(format!("invalid base url {raw}: {e}")))
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| SentimentError::Config(format!("{key} has invalid value {raw}"))),
        Err(_) => Ok(None),
    }
}
