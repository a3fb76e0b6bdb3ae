//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;

/// Smoothing multiplier `2 / (period + 1)`
pub fn ema_multiplier(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Calculate EMA for a specific period
///
/// Index `period - 1` is seeded with the SMA of the first `period` prices;
/// each later value is `(price - prev) * k + prev`. Series shorter than the
/// period come back all `None`.
pub fn calculate_ema(prices: &[f64], period: usize) -> IndicatorSeries {
    let mut ema = vec![None; prices.len()];
    if period == 0 || prices.len() < period {
        return ema;
    }

    let k = ema_multiplier(period);
    let mut prev = match math::mean(&prices[..period]) {
        Some(seed) => seed,
        None => return ema,
    };
    ema[period - 1] = Some(prev);

    for (i, &price) in prices.iter().enumerate().skip(period) {
        prev = (price - prev) * k + prev;
        ema[i] = Some(prev);
    }

    ema
}
