//! Technical-analysis sentiment engine.
//!
//! Turns a chronological price/volume history for one asset into a
//! bullish/bearish vote split and a five-way technical summary.

pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;

pub use error::{Result, SentimentError};
pub use models::{PricePoint, PriceSeries, SentimentResult, TechnicalSummary};
pub use signals::engine::SentimentEngine;
