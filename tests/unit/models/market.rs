//! Unit tests for price series construction

use chrono::{TimeZone, Utc};
use coin_sentiment::models::{PricePoint, PriceSeries};
use coin_sentiment::SentimentError;

#[test]
fn test_empty_series_rejected() {
    assert!(matches!(
        PriceSeries::new(Vec::new()),
        Err(SentimentError::EmptySeries)
    ));
}

#[test]
fn test_non_finite_price_rejected() {
    let err = PriceSeries::from_prices(&[1.0, f64::NAN, 3.0]).unwrap_err();
    assert!(matches!(err, SentimentError::InvalidPrice { index: 1, .. }));
}

#[test]
fn test_non_finite_volume_reads_as_zero() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let series = PriceSeries::new(vec![
        PricePoint::new(ts, 10.0, f64::NAN),
        PricePoint::new(ts, 11.0, 5.0),
    ])
    .unwrap();
    assert_eq!(series.volumes(), &[0.0, 5.0]);
}

#[test]
fn test_duplicate_timestamps_kept() {
    let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let series = PriceSeries::new(vec![
        PricePoint::new(ts, 10.0, 1.0),
        PricePoint::new(ts, 11.0, 1.0),
    ])
    .unwrap();
    assert_eq!(series.len(), 2);
    assert!(!series.is_empty());
}

#[test]
fn test_from_prices() {
    let series = PriceSeries::from_prices(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(series.prices(), &[1.0, 2.0, 3.0]);
    assert_eq!(series.volumes(), &[0.0, 0.0, 0.0]);
    assert_eq!(series.latest_price(), 3.0);
    let points = series.points();
    assert!(points[0].timestamp < points[1].timestamp);
}

#[test]
fn test_price_point_volume_defaults_to_zero() {
    let point: PricePoint =
        serde_json::from_str(r#"{"timestamp":"2024-01-01T00:00:00Z","price":12.5}"#).unwrap();
    assert_eq!(point.volume, 0.0);
    assert_eq!(point.price, 12.5);
}
