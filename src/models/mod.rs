//! Shared data models spanning the engine layers.

pub mod indicators;
pub mod market;
pub mod sentiment;

pub use indicators::{
    BollingerSeries, IndicatorSeries, IndicatorSnapshot, MacdSeries, SupportResistanceLevels,
};
pub use market::{PricePoint, PriceSeries};
pub use sentiment::{SentimentResult, TechnicalSummary};
