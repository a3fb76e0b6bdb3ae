use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{FALLBACK_INDICATOR_COUNT, FALLBACK_PERCENT};

/// Five-way label derived from the bullish vote percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechnicalSummary {
    #[serde(rename = "strongly bullish")]
    StronglyBullish,
    #[serde(rename = "moderately bullish")]
    ModeratelyBullish,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "moderately bearish")]
    ModeratelyBearish,
    #[serde(rename = "strongly bearish")]
    StronglyBearish,
}

impl TechnicalSummary {
    /// Thresholds are checked top-down, first match wins.
    pub fn from_bullish_percent(bullish_percent: u8) -> Self {
        if bullish_percent >= 70 {
            Self::StronglyBullish
        } else if bullish_percent >= 55 {
            Self::ModeratelyBullish
        } else if bullish_percent >= 45 {
            Self::Neutral
        } else if bullish_percent >= 30 {
            Self::ModeratelyBearish
        } else {
            Self::StronglyBearish
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StronglyBullish => "strongly bullish",
            Self::ModeratelyBullish => "moderately bullish",
            Self::Neutral => "neutral",
            Self::ModeratelyBearish => "moderately bearish",
            Self::StronglyBearish => "strongly bearish",
        }
    }

    pub fn is_bullish(&self) -> bool {
        matches!(self, Self::StronglyBullish | Self::ModeratelyBullish)
    }
}

impl fmt::Display for TechnicalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engine output. `bullish_percent + bearish_percent` is always 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResult {
    pub bullish_percent: u8,
    pub bearish_percent: u8,
    pub bullish_indicators: u32,
    pub bearish_indicators: u32,
    pub last_updated: DateTime<Utc>,
    pub technical_summary: TechnicalSummary,
}

impl SentimentResult {
    /// Neutral result served when market data could not be turned into a real one.
    pub fn fallback(last_updated: DateTime<Utc>) -> Self {
        Self {
            bullish_percent: FALLBACK_PERCENT,
            bearish_percent: 100 - FALLBACK_PERCENT,
            bullish_indicators: FALLBACK_INDICATOR_COUNT,
            bearish_indicators: FALLBACK_INDICATOR_COUNT,
            last_updated,
            technical_summary: TechnicalSummary::Neutral,
        }
    }

    /// True when this is the fixed fallback shape, ignoring the timestamp.
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback(self.last_updated)
    }
}
