//! Unit tests for Bollinger Bands

use coin_sentiment::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};

#[test]
fn test_bollinger_flat_series_collapses() {
    let bands = calculate_bollinger_bands_default(&[1.0; 20]);
    assert!(bands.middle[..19].iter().all(Option::is_none));
    assert!(bands.upper[..19].iter().all(Option::is_none));
    assert!(bands.lower[..19].iter().all(Option::is_none));
    assert_eq!(bands.upper[19], Some(1.0));
    assert_eq!(bands.middle[19], Some(1.0));
    assert_eq!(bands.lower[19], Some(1.0));
}

#[test]
fn test_bollinger_uses_population_std_dev() {
    let bands = calculate_bollinger_bands(&[1.0, 2.0, 3.0], 3, 2.0);
    let sigma = (2.0f64 / 3.0).sqrt();
    assert_eq!(bands.middle[2], Some(2.0));
    assert!((bands.upper[2].unwrap() - (2.0 + 2.0 * sigma)).abs() < 1e-12);
    assert!((bands.lower[2].unwrap() - (2.0 - 2.0 * sigma)).abs() < 1e-12);
}

#[test]
fn test_bollinger_band_order() {
    let prices: Vec<f64> = (0..50).map(|i| 100.0 + ((i % 5) as f64) * 1.7).collect();
    let bands = calculate_bollinger_bands_default(&prices);
    for i in 19..50 {
        let (upper, middle, lower) = (
            bands.upper[i].unwrap(),
            bands.middle[i].unwrap(),
            bands.lower[i].unwrap(),
        );
        assert!(upper >= middle && middle >= lower);
    }
}

#[test]
fn test_bollinger_insufficient_data() {
    let bands = calculate_bollinger_bands_default(&[1.0, 2.0, 3.0]);
    assert_eq!(bands.upper, vec![None, None, None]);
    assert_eq!(bands.middle.len(), 3);
}
