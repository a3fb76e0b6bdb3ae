//! Support and Resistance levels detection

use crate::common::math;
use crate::models::indicators::SupportResistanceLevels;

/// Calculate support and resistance levels
///
/// Scans every index `i` in `[window, len - window)` against the symmetric
/// window `prices[i - window .. i + window]`. A price equal to the window
/// minimum is a support level, one equal to the maximum is a resistance
/// level. Levels come back as prices in scan order.
pub fn calculate_support_resistance(prices: &[f64], window: usize) -> SupportResistanceLevels {
    let mut levels = SupportResistanceLevels::default();

    for i in window..prices.len().saturating_sub(window) {
        let slice = &prices[i - window..i + window];
        let current = prices[i];

        let low = slice.iter().copied().fold(f64::INFINITY, f64::min);
        let high = slice.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if current <= low {
            levels.support.push(current);
        }
        if current >= high {
            levels.resistance.push(current);
        }
    }

    levels
}

/// Calculate support/resistance with default window (20)
pub fn calculate_support_resistance_default(prices: &[f64]) -> SupportResistanceLevels {
    calculate_support_resistance(prices, 20)
}

impl SupportResistanceLevels {
    /// Support level closest to `price`
    pub fn nearest_support(&self, price: f64) -> Option<f64> {
        math::nearest(&self.support, price)
    }

    /// Resistance level closest to `price`
    pub fn nearest_resistance(&self, price: f64) -> Option<f64> {
        math::nearest(&self.resistance, price)
    }
}
