use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// One observation of an asset's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    #[serde(default)]
    pub volume: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self {
            timestamp,
            price,
            volume,
        }
    }
}

/// Non-empty price history in ascending timestamp order.
///
/// Ordering and duplicate timestamps are the caller's responsibility; the
/// series only guarantees at least one point and finite prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
    prices: Vec<f64>,
    volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(SentimentError::EmptySeries);
        }
        if let Some((index, point)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !p.price.is_finite())
        {
            return Err(SentimentError::InvalidPrice {
                index,
                value: point.price,
            });
        }

        let prices = points.iter().map(|p| p.price).collect();
        let volumes = points
            .iter()
            .map(|p| if p.volume.is_finite() { p.volume } else { 0.0 })
            .collect();

        Ok(Self {
            points,
            prices,
            volumes,
        })
    }

    /// Build a daily series with zero volume from bare prices.
    pub fn from_prices(prices: &[f64]) -> Result<Self> {
        let start = Utc.timestamp_opt(0, 0).single().unwrap_or_default();
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint::new(start + Duration::days(i as i64), price, 0.0))
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> &[f64] {
        &self.volumes
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest_price(&self) -> f64 {
        self.prices[self.prices.len() - 1]
    }
}
