//! Signal evaluation, vote aggregation and the sentiment engine.

pub mod aggregation;
pub mod categories;
pub mod engine;
pub mod evaluator;
pub mod scoring;

pub use aggregation::*;
pub use categories::*;
pub use engine::*;
pub use evaluator::*;
pub use scoring::*;
