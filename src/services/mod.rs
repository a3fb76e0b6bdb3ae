//! Collaborators around the engine: market data, caching, orchestration.

pub mod cache;
pub mod http;
pub mod market_data;
pub mod sentiment;

pub use cache::{InMemorySentimentCache, SentimentCache};
pub use http::HttpMarketDataSource;
pub use market_data::{InMemoryMarketDataSource, MarketDataSource};
pub use sentiment::SentimentService;
