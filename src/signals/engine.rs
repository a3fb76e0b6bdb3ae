//! Sentiment engine: indicators -> signals -> tally -> classification.
//!
//! Stateless. Safe to share across threads and call concurrently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::IndicatorConfig;
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::PriceSeries;
use crate::models::sentiment::{SentimentResult, TechnicalSummary};
use crate::signals::aggregation::{Aggregator, SentimentTally};
use crate::signals::evaluator::{SignalEvaluator, SignalSet};
use crate::signals::scoring::vote_percentages;

/// Result together with everything that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub result: SentimentResult,
    pub signals: SignalSet,
    pub tally: SentimentTally,
    pub indicators: IndicatorSnapshot,
}

pub struct SentimentEngine {
    evaluator: SignalEvaluator,
}

impl SentimentEngine {
    pub fn new(config: IndicatorConfig) -> Self {
        Self {
            evaluator: SignalEvaluator::new(config),
        }
    }

    /// Evaluate against the series' own last price, stamped with the current time.
    pub fn analyze(&self, series: &PriceSeries) -> SentimentResult {
        self.analyze_at(series, series.latest_price(), Utc::now())
    }

    /// Deterministic form of [`analyze`](Self::analyze): identical inputs give identical output.
    pub fn analyze_at(
        &self,
        series: &PriceSeries,
        current_price: f64,
        as_of: DateTime<Utc>,
    ) -> SentimentResult {
        self.evaluate_with_signals(series, current_price, as_of).result
    }

    /// Evaluate signal and return the signal set and tally (for debugging/explanations)
    pub fn evaluate_with_signals(
        &self,
        series: &PriceSeries,
        current_price: f64,
        as_of: DateTime<Utc>,
    ) -> SentimentAnalysis {
        let indicators = self.evaluator.snapshot(series, current_price);
        let signals = self
            .evaluator
            .evaluate_snapshot(&indicators, series, current_price);
        let tally = Aggregator::tally(&signals);
        let (bullish_percent, bearish_percent) = vote_percentages(&tally);
        let technical_summary = TechnicalSummary::from_bullish_percent(bullish_percent);

        debug!(
            points = series.len(),
            bullish = tally.bullish,
            bearish = tally.bearish,
            summary = %technical_summary,
            "sentiment evaluated"
        );

        SentimentAnalysis {
            result: SentimentResult {
                bullish_percent,
                bearish_percent,
                bullish_indicators: tally.bullish,
                bearish_indicators: tally.bearish,
                last_updated: as_of,
                technical_summary,
            },
            signals,
            tally,
            indicators,
        }
    }
}

impl Default for SentimentEngine {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}
