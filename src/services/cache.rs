//! Result cache collaborator.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::sentiment::SentimentResult;

/// Stores produced results; a stored result is never modified, only replaced or expired.
#[async_trait]
pub trait SentimentCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<SentimentResult>;

    async fn set(&self, key: &str, result: SentimentResult, ttl: Duration);
}

struct CacheEntry {
    result: SentimentResult,
    expires_at: Instant,
}

#[derive(Default)]
pub struct InMemorySentimentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl InMemorySentimentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop expired entries.
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        self.entries.write().await.retain(|_, entry| entry.expires_at > now);
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl SentimentCache for InMemorySentimentCache {
    async fn get(&self, key: &str) -> Option<SentimentResult> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.result.clone())
    }

    async fn set(&self, key: &str, result: SentimentResult, ttl: Duration) {
        let entry = CacheEntry {
            result,
            expires_at: Instant::now() + ttl,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}
