//! Indicator library. Every function returns series aligned with its input.

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;

pub use momentum::*;
pub use structure::*;
pub use trend::*;
pub use volatility::*;
