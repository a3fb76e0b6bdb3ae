//! Unit tests for MACD indicator

use coin_sentiment::indicators::momentum::{calculate_macd, calculate_macd_default};
use coin_sentiment::indicators::trend::calculate_ema;

fn rising(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64 * 0.5).collect()
}

#[test]
fn test_macd_alignment() {
    let prices = rising(40);
    let macd = calculate_macd_default(&prices);

    assert_eq!(macd.macd.len(), 40);
    assert_eq!(macd.signal.len(), 40);
    assert_eq!(macd.histogram.len(), 40);

    assert!(macd.macd[..25].iter().all(Option::is_none));
    assert!(macd.macd[25..].iter().all(Option::is_some));
    // 26 + 9 - 2 entries of warm-up before the signal line starts
    assert!(macd.signal[..33].iter().all(Option::is_none));
    assert!(macd.signal[33..].iter().all(Option::is_some));
    assert!(macd.histogram[..33].iter().all(Option::is_none));
}

#[test]
fn test_macd_is_fast_minus_slow() {
    let prices = rising(60);
    let macd = calculate_macd(&prices, 12, 26, 9);
    let fast = calculate_ema(&prices, 12);
    let slow = calculate_ema(&prices, 26);

    for i in 25..60 {
        let expected = fast[i].unwrap() - slow[i].unwrap();
        assert!((macd.macd[i].unwrap() - expected).abs() < 1e-12);
    }
}

#[test]
fn test_signal_is_ema_of_defined_macd() {
    let prices: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i % 9) as f64 - 4.0) * 2.0 + i as f64 * 0.3)
        .collect();
    let macd = calculate_macd_default(&prices);

    let defined: Vec<f64> = macd.macd.iter().flatten().copied().collect();
    let expected = calculate_ema(&defined, 9);
    let offset = macd.macd.len() - defined.len();

    for (j, value) in expected.iter().enumerate() {
        assert_eq!(macd.signal[offset + j], *value);
    }

    let last = macd.histogram.last().copied().flatten().unwrap();
    let expected_histogram =
        macd.macd.last().copied().flatten().unwrap() - macd.signal.last().copied().flatten().unwrap();
    assert!((last - expected_histogram).abs() < 1e-12);
}

#[test]
fn test_macd_signal_undefined_when_too_few_macd_values() {
    let macd = calculate_macd_default(&rising(30));
    assert_eq!(macd.macd.iter().flatten().count(), 5);
    assert!(macd.signal.iter().all(Option::is_none));
    assert_eq!(macd.signal.len(), 30);
}

#[test]
fn test_macd_short_series() {
    let macd = calculate_macd_default(&[1.0, 2.0, 3.0]);
    assert_eq!(macd.macd, vec![None, None, None]);
    assert_eq!(macd.signal, vec![None, None, None]);
}
