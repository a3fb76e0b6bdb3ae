//! Market structure: support and resistance levels

pub mod support_resistance;

pub use support_resistance::*;
