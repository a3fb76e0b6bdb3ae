//! Boolean signal derivation from the latest indicator values
//!
//! Every comparison against an indicator that has not warmed up yet is
//! false. Short histories therefore lean bearish/neutral: a false
//! bullish-when-true signal still costs a bullish vote. This is accepted
//! behaviour, the engine does not try to correct for it.

use serde::{Deserialize, Serialize};

use crate::common::math;
use crate::config::IndicatorConfig;
use crate::indicators::{
    calculate_bollinger_bands, calculate_macd, calculate_rsi, calculate_sma,
    calculate_support_resistance,
};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::market::PriceSeries;
use crate::signals::categories::SignalKind;

/// The sixteen tallied signals plus the RSI oversold bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    // bullish when true
    pub sma20_above_sma50: bool,
    pub sma50_above_sma200: bool,
    pub price_above_sma20: bool,
    pub price_above_sma50: bool,
    pub price_above_sma200: bool,
    pub macd_above_signal: bool,
    pub price_below_lower_band: bool,
    pub volume_above_average: bool,
    pub price_up_3_consecutive: bool,
    pub price_near_support: bool,
    pub change_24h_positive: bool,
    pub change_7d_positive: bool,

    // bearish when true
    pub rsi_overbought: bool,
    pub price_above_upper_band: bool,
    pub price_down_3_consecutive: bool,
    pub price_near_resistance: bool,

    /// Outside the sixteen-way tally; adds one bullish vote when set.
    pub rsi_oversold: bool,
}

impl SignalSet {
    pub fn get(&self, kind: SignalKind) -> bool {
        match kind {
            SignalKind::Sma20AboveSma50 => self.sma20_above_sma50,
            SignalKind::Sma50AboveSma200 => self.sma50_above_sma200,
            SignalKind::PriceAboveSma20 => self.price_above_sma20,
            SignalKind::PriceAboveSma50 => self.price_above_sma50,
            SignalKind::PriceAboveSma200 => self.price_above_sma200,
            SignalKind::MacdAboveSignal => self.macd_above_signal,
            SignalKind::PriceBelowLowerBand => self.price_below_lower_band,
            SignalKind::VolumeAboveAverage => self.volume_above_average,
            SignalKind::PriceUp3Consecutive => self.price_up_3_consecutive,
            SignalKind::PriceNearSupport => self.price_near_support,
            SignalKind::Change24hPositive => self.change_24h_positive,
            SignalKind::Change7dPositive => self.change_7d_positive,
            SignalKind::RsiOverbought => self.rsi_overbought,
            SignalKind::PriceAboveUpperBand => self.price_above_upper_band,
            SignalKind::PriceDown3Consecutive => self.price_down_3_consecutive,
            SignalKind::PriceNearResistance => self.price_near_resistance,
        }
    }

    /// All sixteen tallied signals with their current value.
    pub fn iter(&self) -> impl Iterator<Item = (SignalKind, bool)> + '_ {
        SignalKind::ALL.iter().map(move |&kind| (kind, self.get(kind)))
    }
}

pub struct SignalEvaluator {
    config: IndicatorConfig,
}

impl SignalEvaluator {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Run the indicator library and keep the final value of each output.
    pub fn snapshot(&self, series: &PriceSeries, current_price: f64) -> IndicatorSnapshot {
        let cfg = &self.config;
        let prices = series.prices();

        let macd = calculate_macd(prices, cfg.macd_fast, cfg.macd_slow, cfg.macd_signal);
        let bands = calculate_bollinger_bands(prices, cfg.bollinger_period, cfg.bollinger_std_dev);
        let levels = calculate_support_resistance(prices, cfg.support_resistance_window);

        IndicatorSnapshot {
            sma_short: math::last_value(&calculate_sma(prices, cfg.sma_short)),
            sma_medium: math::last_value(&calculate_sma(prices, cfg.sma_medium)),
            sma_long: math::last_value(&calculate_sma(prices, cfg.sma_long)),
            rsi: math::last_value(&calculate_rsi(prices, cfg.rsi_period)),
            macd: math::last_value(&macd.macd),
            macd_signal: math::last_value(&macd.signal),
            bollinger_upper: math::last_value(&bands.upper),
            bollinger_lower: math::last_value(&bands.lower),
            nearest_support: levels
                .nearest_support(current_price)
                .unwrap_or(current_price * cfg.synthetic_support_factor),
            nearest_resistance: levels
                .nearest_resistance(current_price)
                .unwrap_or(current_price * cfg.synthetic_resistance_factor),
            average_volume: trailing_average(series.volumes(), cfg.volume_window),
        }
    }

    pub fn evaluate(&self, series: &PriceSeries, current_price: f64) -> SignalSet {
        let snapshot = self.snapshot(series, current_price);
        self.evaluate_snapshot(&snapshot, series, current_price)
    }

    pub fn evaluate_snapshot(
        &self,
        snapshot: &IndicatorSnapshot,
        series: &PriceSeries,
        current_price: f64,
    ) -> SignalSet {
        let cfg = &self.config;
        let prices = series.prices();
        let price = Some(current_price);
        let latest_volume = series.volumes().last().copied();

        SignalSet {
            sma20_above_sma50: math::is_above(snapshot.sma_short, snapshot.sma_medium),
            sma50_above_sma200: math::is_above(snapshot.sma_medium, snapshot.sma_long),
            price_above_sma20: math::is_above(price, snapshot.sma_short),
            price_above_sma50: math::is_above(price, snapshot.sma_medium),
            price_above_sma200: math::is_above(price, snapshot.sma_long),
            macd_above_signal: math::is_above(snapshot.macd, snapshot.macd_signal),
            price_below_lower_band: math::is_below(price, snapshot.bollinger_lower),
            volume_above_average: math::is_above(latest_volume, Some(snapshot.average_volume)),
            price_up_3_consecutive: consecutive_moves(prices, cfg.streak_length, Direction::Up),
            price_near_support: is_near(current_price, snapshot.nearest_support, cfg.level_proximity),
            change_24h_positive: math::percent_change(prices, cfg.short_change_lookback) > 0.0,
            change_7d_positive: math::percent_change(prices, cfg.long_change_lookback) > 0.0,

            rsi_overbought: math::is_above(snapshot.rsi, Some(cfg.rsi_overbought)),
            price_above_upper_band: math::is_above(price, snapshot.bollinger_upper),
            price_down_3_consecutive: consecutive_moves(prices, cfg.streak_length, Direction::Down),
            price_near_resistance: is_near(
                current_price,
                snapshot.nearest_resistance,
                cfg.level_proximity,
            ),

            rsi_oversold: math::is_below(snapshot.rsi, Some(cfg.rsi_oversold)),
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

/// Sum of the last `window` values divided by `window`.
///
/// The divisor stays fixed even when fewer values exist, so short histories
/// average against a partially empty window.
fn trailing_average(values: &[f64], window: usize) -> f64 {
    if window == 0 {
        return 0.0;
    }
    let start = values.len().saturating_sub(window);
    values[start..].iter().sum::<f64>() / window as f64
}

/// True when the last `streak` moves all went in `direction`. Needs `streak + 1` points.
fn consecutive_moves(prices: &[f64], streak: usize, direction: Direction) -> bool {
    if streak == 0 || prices.len() < streak + 1 {
        return false;
    }
    prices[prices.len() - streak - 1..].windows(2).all(|w| match direction {
        Direction::Up => w[1] > w[0],
        Direction::Down => w[1] < w[0],
    })
}

fn is_near(price: f64, level: f64, proximity: f64) -> bool {
    (price - level).abs() / price < proximity
}
