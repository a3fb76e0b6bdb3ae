//! Market data collaborator interface.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{Result, SentimentError};
use crate::models::market::PricePoint;

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// Price/volume history for an asset, ascending by timestamp
    async fn fetch_price_history(&self, asset_id: &str) -> Result<Vec<PricePoint>>;

    /// Get the latest price for an asset
    async fn fetch_latest_price(&self, asset_id: &str) -> Result<f64>;
}

/// Source backed by histories held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataSource {
    histories: HashMap<String, Vec<PricePoint>>,
}

impl InMemoryMarketDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(mut self, asset_id: impl Into<String>, points: Vec<PricePoint>) -> Self {
        self.histories.insert(asset_id.into(), points);
        self
    }
}

#[async_trait]
impl MarketDataSource for InMemoryMarketDataSource {
    async fn fetch_price_history(&self, asset_id: &str) -> Result<Vec<PricePoint>> {
        self.histories
            .get(asset_id)
            .cloned()
            .ok_or_else(|| SentimentError::Fetch(format!("no price history for {asset_id}")))
    }

    async fn fetch_latest_price(&self, asset_id: &str) -> Result<f64> {
        self.histories
            .get(asset_id)
            .and_then(|points| points.last())
            .map(|point| point.price)
            .ok_or_else(|| SentimentError::Fetch(format!("no latest price for {asset_id}")))
    }
}
