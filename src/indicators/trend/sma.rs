//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::indicators::IndicatorSeries;

/// Calculate SMA over a trailing window of `period` prices.
///
/// The first `period - 1` entries are `None`. A zero period yields an
/// all-`None` series.
pub fn calculate_sma(prices: &[f64], period: usize) -> IndicatorSeries {
    if period == 0 {
        return vec![None; prices.len()];
    }

    (0..prices.len())
        .map(|i| {
            if i + 1 < period {
                None
            } else {
                math::mean(&prices[i + 1 - period..=i])
            }
        })
        .collect()
}
