//! Unit tests for the sentiment engine

use chrono::{TimeZone, Utc};
use coin_sentiment::config::IndicatorConfig;
use coin_sentiment::models::{PriceSeries, TechnicalSummary};
use coin_sentiment::SentimentEngine;

fn wavy_series(count: usize) -> PriceSeries {
    let prices: Vec<f64> = (0..count)
        .map(|i| 100.0 + ((i % 11) as f64 - 5.0) * 1.3 + i as f64 * 0.02)
        .collect();
    PriceSeries::from_prices(&prices).unwrap()
}

#[test]
fn test_analyze_is_deterministic() {
    let engine = SentimentEngine::default();
    let series = wavy_series(260);
    let as_of = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    let first = engine.analyze_at(&series, series.latest_price(), as_of);
    let second = engine.analyze_at(&series, series.latest_price(), as_of);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_result_matches_tally() {
    let engine = SentimentEngine::new(IndicatorConfig::default());
    let series = wavy_series(120);
    let as_of = Utc::now();
    let analysis = engine.evaluate_with_signals(&series, series.latest_price(), as_of);

    assert_eq!(analysis.result.bullish_indicators, analysis.tally.bullish);
    assert_eq!(analysis.result.bearish_indicators, analysis.tally.bearish);
    assert_eq!(
        analysis.result.bullish_percent as u32 + analysis.result.bearish_percent as u32,
        100
    );
    assert!(matches!(analysis.tally.total(), 16 | 17));
    assert_eq!(analysis.tally.total() == 17, analysis.signals.rsi_oversold);
    assert_eq!(analysis.result.last_updated, as_of);
}

#[test]
fn test_analyze_uses_latest_series_price() {
    let engine = SentimentEngine::default();
    let series = wavy_series(220);
    let analyzed = engine.analyze(&series);
    let explicit = engine.analyze_at(&series, series.latest_price(), analyzed.last_updated);
    assert_eq!(analyzed, explicit);
}

#[test]
fn test_percentages_sum_to_100_across_lengths() {
    let engine = SentimentEngine::default();
    for count in [1, 2, 3, 4, 8, 13, 19, 20, 26, 34, 41, 50, 199, 200, 260] {
        let result = engine.analyze(&wavy_series(count));
        assert_eq!(
            result.bullish_percent as u32 + result.bearish_percent as u32,
            100,
            "length {count}"
        );
        assert_eq!(
            result.technical_summary,
            TechnicalSummary::from_bullish_percent(result.bullish_percent)
        );
    }
}
