//! Numeric helpers shared by the indicator and signal stages.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation of `values` around `mean` (divides by `n`, not `n - 1`).
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Percent change between the last price and the one `lookback` steps before it.
///
/// Returns 0.0 when the series is too short, so the change reads as neither
/// positive nor negative.
pub fn percent_change(prices: &[f64], lookback: usize) -> f64 {
    if lookback == 0 || prices.len() <= lookback {
        return 0.0;
    }
    let last = prices[prices.len() - 1];
    let base = prices[prices.len() - 1 - lookback];
    (last - base) / base * 100.0
}

/// The level closest to `target`; the earliest one wins a tie.
pub fn nearest(levels: &[f64], target: f64) -> Option<f64> {
    let (&first, rest) = levels.split_first()?;
    Some(rest.iter().fold(first, |best, &level| {
        if (level - target).abs() < (best - target).abs() {
            level
        } else {
            best
        }
    }))
}

/// Last entry of an aligned indicator series, `None` if it is empty or still warming up.
pub fn last_value(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

/// `a > b`, false whenever either side is undefined.
pub fn is_above(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a > b)
}

/// `a < b`, false whenever either side is undefined.
pub fn is_below(a: Option<f64>, b: Option<f64>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a < b)
}
