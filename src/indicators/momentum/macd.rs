//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::calculate_ema;
use crate::models::indicators::{IndicatorSeries, MacdSeries};

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the defined MACD values, front-padded
/// with `None` back to the input length
/// Histogram = MACD - Signal
pub fn calculate_macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let fast = calculate_ema(prices, fast_period);
    let slow = calculate_ema(prices, slow_period);

    let macd: IndicatorSeries = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| match (f, s) {
            (Some(f), Some(s)) => Some(f - s),
            _ => None,
        })
        .collect();

    let defined: Vec<f64> = macd.iter().flatten().copied().collect();
    let mut signal = vec![None; macd.len() - defined.len()];
    signal.extend(calculate_ema(&defined, signal_period));

    let histogram = macd
        .iter()
        .zip(&signal)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => Some(m - s),
            _ => None,
        })
        .collect();

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> MacdSeries {
    calculate_macd(prices, 12, 26, 9)
}
