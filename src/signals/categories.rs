//! Signal kinds and the direction each one votes for

use serde::{Deserialize, Serialize};

/// Which bucket a signal votes for when it is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    BullishWhenTrue,
    BearishWhenTrue,
}

/// The sixteen tallied signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    Sma20AboveSma50,
    Sma50AboveSma200,
    PriceAboveSma20,
    PriceAboveSma50,
    PriceAboveSma200,
    MacdAboveSignal,
    PriceBelowLowerBand,
    VolumeAboveAverage,
    PriceUp3Consecutive,
    PriceNearSupport,
    Change24hPositive,
    Change7dPositive,
    RsiOverbought,
    PriceAboveUpperBand,
    PriceDown3Consecutive,
    PriceNearResistance,
}

impl SignalKind {
    pub const ALL: [SignalKind; 16] = [
        SignalKind::Sma20AboveSma50,
        SignalKind::Sma50AboveSma200,
        SignalKind::PriceAboveSma20,
        SignalKind::PriceAboveSma50,
        SignalKind::PriceAboveSma200,
        SignalKind::MacdAboveSignal,
        SignalKind::PriceBelowLowerBand,
        SignalKind::VolumeAboveAverage,
        SignalKind::PriceUp3Consecutive,
        SignalKind::PriceNearSupport,
        SignalKind::Change24hPositive,
        SignalKind::Change7dPositive,
        SignalKind::RsiOverbought,
        SignalKind::PriceAboveUpperBand,
        SignalKind::PriceDown3Consecutive,
        SignalKind::PriceNearResistance,
    ];

    pub fn polarity(&self) -> Polarity {
        match self {
            SignalKind::RsiOverbought
            | SignalKind::PriceAboveUpperBand
            | SignalKind::PriceDown3Consecutive
            | SignalKind::PriceNearResistance => Polarity::BearishWhenTrue,
            _ => Polarity::BullishWhenTrue,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Sma20AboveSma50 => "SMA20>SMA50",
            SignalKind::Sma50AboveSma200 => "SMA50>SMA200",
            SignalKind::PriceAboveSma20 => "Price>SMA20",
            SignalKind::PriceAboveSma50 => "Price>SMA50",
            SignalKind::PriceAboveSma200 => "Price>SMA200",
            SignalKind::MacdAboveSignal => "MACD>Signal",
            SignalKind::PriceBelowLowerBand => "Price<LowerBand",
            SignalKind::VolumeAboveAverage => "Volume>Avg10Volume",
            SignalKind::PriceUp3Consecutive => "PriceUp3ConsecutiveDays",
            SignalKind::PriceNearSupport => "PriceNearSupport",
            SignalKind::Change24hPositive => "24hChangePositive",
            SignalKind::Change7dPositive => "7dChangePositive",
            SignalKind::RsiOverbought => "RSI>70",
            SignalKind::PriceAboveUpperBand => "Price>UpperBand",
            SignalKind::PriceDown3Consecutive => "PriceDown3ConsecutiveDays",
            SignalKind::PriceNearResistance => "PriceNearResistance",
        }
    }
}
