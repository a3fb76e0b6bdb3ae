//! Computes technical sentiment for the given asset ids and prints it as JSON.
//!
//! Usage: `coin-sentiment <asset-id>...` (or `SENTIMENT_ASSETS=1,1027`).

use std::env;
use std::sync::Arc;

use coin_sentiment::config::{get_environment, ServiceConfig};
use coin_sentiment::logging;
use coin_sentiment::metrics::Metrics;
use coin_sentiment::services::{HttpMarketDataSource, InMemorySentimentCache, SentimentService};
use dotenvy::dotenv;
use tokio::task::JoinSet;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = ServiceConfig::from_env()?;
    info!(environment = %get_environment(), api = %config.api_base_url, "starting coin-sentiment");

    let mut assets: Vec<String> = env::args().skip(1).collect();
    if assets.is_empty() {
        assets = env::var("SENTIMENT_ASSETS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
    }
    if assets.is_empty() {
        return Err("no asset ids given (pass as arguments or set SENTIMENT_ASSETS)".into());
    }

    let source = Arc::new(HttpMarketDataSource::new(
        config.api_base_url.clone(),
        config.retry_attempts,
    ));
    let metrics = Arc::new(Metrics::new()?);
    let service = Arc::new(
        SentimentService::new(source, config)
            .with_cache(Arc::new(InMemorySentimentCache::new()))
            .with_metrics(metrics.clone()),
    );

    let mut tasks = JoinSet::new();
    for asset_id in assets {
        let service = service.clone();
        tasks.spawn(async move {
            let result = service.sentiment(&asset_id).await;
            (asset_id, result)
        });
    }

    let mut output = serde_json::Map::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((asset_id, result)) => {
                output.insert(asset_id, serde_json::to_value(result)?);
            }
            Err(e) => error!(error = %e, "sentiment task panicked"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    debug!(metrics = %metrics.gather_text()?, "run complete");
    Ok(())
}
