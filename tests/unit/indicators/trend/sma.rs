//! Unit tests for SMA indicator

use coin_sentiment::indicators::trend::calculate_sma;

#[test]
fn test_sma_warm_up_is_undefined() {
    let sma = calculate_sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3);
    assert_eq!(sma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_sma_keeps_input_length() {
    let prices: Vec<f64> = (0..37).map(|i| 100.0 + i as f64).collect();
    for period in [1, 5, 20, 50, 200] {
        let sma = calculate_sma(&prices, period);
        assert_eq!(sma.len(), prices.len());
        let undefined = sma.iter().take_while(|v| v.is_none()).count();
        assert_eq!(undefined, (period - 1).min(prices.len()));
    }
}

#[test]
fn test_sma_insufficient_data() {
    let sma = calculate_sma(&[1.0, 2.0], 20);
    assert_eq!(sma, vec![None, None]);
}

#[test]
fn test_sma_zero_period() {
    assert_eq!(calculate_sma(&[1.0, 2.0], 0), vec![None, None]);
}
