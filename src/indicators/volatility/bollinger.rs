//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::trend::calculate_sma;
use crate::models::indicators::BollingerSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * σ)
/// Lower Band = Middle - (std_dev * σ)
///
/// σ is the population standard deviation of the trailing window.
pub fn calculate_bollinger_bands(prices: &[f64], period: usize, std_dev: f64) -> BollingerSeries {
    let middle = calculate_sma(prices, period);
    let mut upper = vec![None; prices.len()];
    let mut lower = vec![None; prices.len()];

    for (i, mid) in middle.iter().enumerate() {
        let Some(mid) = *mid else { continue };
        let sigma = math::population_std_dev(&prices[i + 1 - period..=i], mid);
        upper[i] = Some(mid + std_dev * sigma);
        lower[i] = Some(mid - std_dev * sigma);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> BollingerSeries {
    calculate_bollinger_bands(prices, 20, 2.0)
}
