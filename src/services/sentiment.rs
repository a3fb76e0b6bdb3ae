//! Orchestration: fetch market data, run the engine, fall back on failure.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::config::{PriceSource, ServiceConfig};
use crate::error::{Result, SentimentError};
use crate::metrics::Metrics;
use crate::models::market::PriceSeries;
use crate::models::sentiment::SentimentResult;
use crate::services::cache::SentimentCache;
use crate::services::market_data::MarketDataSource;
use crate::signals::engine::SentimentEngine;

pub struct SentimentService {
    source: Arc<dyn MarketDataSource>,
    cache: Option<Arc<dyn SentimentCache>>,
    metrics: Option<Arc<Metrics>>,
    engine: SentimentEngine,
    config: ServiceConfig,
}

impl SentimentService {
    pub fn new(source: Arc<dyn MarketDataSource>, config: ServiceConfig) -> Self {
        Self {
            source,
            cache: None,
            metrics: None,
            engine: SentimentEngine::new(config.indicators.clone()),
            config,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn SentimentCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Cached sentiment for an asset, computing and caching it on a miss.
    pub async fn sentiment(&self, asset_id: &str) -> SentimentResult {
        let key = self.config.cache_key(asset_id);

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key).await {
                debug!(asset_id, "sentiment served from cache");
                self.record(|m| m.cache_hits_total.inc());
                return cached;
            }
            self.record(|m| m.cache_misses_total.inc());
        }

        self.refresh(asset_id).await
    }

    /// Recompute regardless of the cache, storing a successful result.
    ///
    /// Fallback results are returned but never cached.
    pub async fn refresh(&self, asset_id: &str) -> SentimentResult {
        match self.try_calculate(asset_id).await {
            Ok(result) => {
                if let Some(cache) = &self.cache {
                    cache
                        .set(&self.config.cache_key(asset_id), result.clone(), self.config.cache_ttl)
                        .await;
                }
                result
            }
            Err(e) => self.fallback(asset_id, &e),
        }
    }

    /// Compute without touching the cache; any failure yields the fallback result.
    pub async fn calculate(&self, asset_id: &str) -> SentimentResult {
        match self.try_calculate(asset_id).await {
            Ok(result) => result,
            Err(e) => self.fallback(asset_id, &e),
        }
    }

    /// Compute, surfacing the error instead of falling back.
    pub async fn try_calculate(&self, asset_id: &str) -> Result<SentimentResult> {
        let started = Instant::now();
        let (series, quote) = self.fetch(asset_id).await?;

        let current_price = match self.config.price_source {
            PriceSource::SeriesClose => series.latest_price(),
            PriceSource::LatestQuote => quote,
        };
        let result = self.engine.analyze_at(&series, current_price, Utc::now());

        self.record(|m| {
            m.calculations_total.inc();
            m.calculation_duration_seconds
                .observe(started.elapsed().as_secs_f64());
        });
        info!(
            asset_id,
            bullish_percent = result.bullish_percent,
            bearish_percent = result.bearish_percent,
            summary = %result.technical_summary,
            "sentiment calculated"
        );

        Ok(result)
    }

    async fn fetch(&self, asset_id: &str) -> Result<(PriceSeries, f64)> {
        let fetch = async {
            let quote = self.source.fetch_latest_price(asset_id).await?;
            let points = self.source.fetch_price_history(asset_id).await?;
            Ok::<_, SentimentError>((points, quote))
        };

        let (points, quote) = tokio::time::timeout(self.config.fetch_timeout, fetch)
            .await
            .map_err(|_| SentimentError::Timeout {
                asset_id: asset_id.to_string(),
                timeout: self.config.fetch_timeout,
            })??;

        Ok((PriceSeries::new(points)?, quote))
    }

    fn fallback(&self, asset_id: &str, error: &SentimentError) -> SentimentResult {
        warn!(asset_id, error = %error, "sentiment calculation failed, returning neutral fallback");
        self.record(|m| m.fallbacks_total.inc());
        SentimentResult::fallback(Utc::now())
    }

    fn record(&self, f: impl FnOnce(&Metrics)) {
        if let Some(metrics) = &self.metrics {
            f(metrics);
        }
    }
}
