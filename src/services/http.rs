//! HTTP market data source for the coin data API.
//!
//! - `GET {base}/coin/price/{id}` returns a quote object with a `price` field
//! - `GET {base}/coin/chart/{id}` returns `[{timestamp, price, volume}]`,
//!   timestamps in epoch milliseconds

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, SentimentError};
use crate::models::market::PricePoint;
use crate::services::market_data::MarketDataSource;

#[derive(Debug, Deserialize)]
struct QuoteResponse {
    price: f64,
}

#[derive(Debug, Deserialize)]
struct ChartPoint {
    timestamp: i64,
    price: f64,
    #[serde(default)]
    volume: Option<f64>,
}

pub struct HttpMarketDataSource {
    base_url: Url,
    client: reqwest::Client,
    retry_attempts: usize,
}

impl HttpMarketDataSource {
    pub fn new(base_url: Url, retry_attempts: usize) -> Self {
        Self::with_client(base_url, reqwest::Client::new(), retry_attempts)
    }

    pub fn with_client(base_url: Url, client: reqwest::Client, retry_attempts: usize) -> Self {
        Self {
            base_url,
            client,
            retry_attempts,
        }
    }

    fn endpoint(&self, resource: &str, asset_id: &str) -> Result<Url> {
        self.base_url
            .join(&format!("coin/{resource}/{asset_id}"))
            .map_err(|e| SentimentError::Config(format!("cannot build {resource} url: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = (|| async { self.client.get(url.clone()).send().await })
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(100))
                    .with_max_times(self.retry_attempts),
            )
            .when(|e: &reqwest::Error| e.is_connect() || e.is_timeout())
            .notify(|e: &reqwest::Error, delay: Duration| {
                warn!(error = %e, ?delay, "market data request failed, retrying");
            })
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::Fetch(format!("{url} returned {status}")));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketDataSource for HttpMarketDataSource {
    async fn fetch_price_history(&self, asset_id: &str) -> Result<Vec<PricePoint>> {
        let url = self.endpoint("chart", asset_id)?;
        let chart: Vec<ChartPoint> = self.get_json(url).await?;
        debug!(asset_id, points = chart.len(), "fetched price history");

        chart
            .into_iter()
            .map(|point| {
                let timestamp = Utc
                    .timestamp_millis_opt(point.timestamp)
                    .single()
                    .ok_or_else(|| {
                        SentimentError::Fetch(format!("invalid chart timestamp {}", point.timestamp))
                    })?;
                Ok(PricePoint::new(
                    timestamp,
                    point.price,
                    point.volume.unwrap_or(0.0),
                ))
            })
            .collect()
    }

    async fn fetch_latest_price(&self, asset_id: &str) -> Result<f64> {
        let url = self.endpoint("price", asset_id)?;
        let quote: QuoteResponse = self.get_json(url).await?;
        Ok(quote.price)
    }
}
