//! RSI (Relative Strength Index) indicator

use crate::models::indicators::IndicatorSeries;

pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate RSI indicator
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
///
/// Averages are the plain mean of the trailing `period` gains and losses,
/// not Wilder's recursive smoothing. Entries before index `period` are
/// `None`; a window with no losses reads 100.
pub fn calculate_rsi(prices: &[f64], period: usize) -> IndicatorSeries {
    let mut rsi = vec![None; prices.len()];
    if period == 0 {
        return rsi;
    }

    // gains[j] and losses[j] describe the move from prices[j] to prices[j + 1]
    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            (change.max(0.0), (-change).max(0.0))
        })
        .unzip();

    for (i, slot) in rsi.iter_mut().enumerate().skip(period) {
        let avg_gain = gains[i - period..i].iter().sum::<f64>() / period as f64;
        let avg_loss = losses[i - period..i].iter().sum::<f64>() / period as f64;

        *slot = if avg_loss == 0.0 {
            Some(100.0)
        } else {
            let rs = avg_gain / avg_loss;
            Some(100.0 - (100.0 / (1.0 + rs)))
        };
    }

    rsi
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> IndicatorSeries {
    calculate_rsi(prices, DEFAULT_RSI_PERIOD)
}
