//! Prometheus metrics for sentiment computations.

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    pub calculations_total: IntCounter,
    pub fallbacks_total: IntCounter,
    pub cache_hits_total: IntCounter,
    pub cache_misses_total: IntCounter,
    pub calculation_duration_seconds: Histogram,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let calculations_total = IntCounter::new(
            "sentiment_calculations_total",
            "Sentiment results computed from fresh market data",
        )?;
        let fallbacks_total = IntCounter::new(
            "sentiment_fallbacks_total",
            "Computations that returned the neutral fallback result",
        )?;
        let cache_hits_total =
            IntCounter::new("sentiment_cache_hits_total", "Sentiment results served from cache")?;
        let cache_misses_total =
            IntCounter::new("sentiment_cache_misses_total", "Sentiment cache lookups that missed")?;
        let calculation_duration_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "sentiment_calculation_duration_seconds",
                "Time spent fetching data and computing sentiment",
            )
            .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0]),
        )?;

        registry.register(Box::new(calculations_total.clone()))?;
        registry.register(Box::new(fallbacks_total.clone()))?;
        registry.register(Box::new(cache_hits_total.clone()))?;
        registry.register(Box::new(cache_misses_total.clone()))?;
        registry.register(Box::new(calculation_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            calculations_total,
            fallbacks_total,
            cache_hits_total,
            cache_misses_total,
            calculation_duration_seconds,
        })
    }

    /// Render all metrics in the Prometheus text exposition format.
    pub fn gather_text(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
