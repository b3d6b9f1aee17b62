// ABOUTME: In-memory cache implementation with LRU eviction
// ABOUTME: Stores serialized reports with capture timestamps, no expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use super::{CacheConfig, CacheKey, CachedValue, ProfileCache};
use chrono::{DateTime, Utc};
use racegrade_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Serialized payload plus the moment it was stored
#[derive(Debug, Clone)]
struct Slot {
    bytes: Vec<u8>,
    captured_at: DateTime<Utc>,
}

/// In-memory cache with LRU eviction
///
/// Clones are cheap handles onto shared state behind `Arc<RwLock<_>>`, so a
/// service can hand the same cache to many tasks. Capacity is bounded by
/// least-recently-used eviction rather than expiry; staleness is the
/// reader's call via [`CachedValue::is_fresh`].
#[derive(Clone)]
pub struct InMemoryProfileCache {
    store: Arc<RwLock<lru::LruCache<String, Slot>>>,
}

#[async_trait::async_trait]
impl ProfileCache for InMemoryProfileCache {
    async fn new(config: CacheConfig) -> AppResult<Self> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.max_entries)
            .ok_or_else(|| AppError::config_invalid("cache capacity must be at least 1 entry"))?;
        let store = Arc::new(RwLock::new(lru::LruCache::new(capacity)));
        Ok(Self { store })
    }

    async fn put<T: Serialize + Send + Sync>(&self, key: &CacheKey, value: &T) -> AppResult<()> {
        let slot = Slot {
            bytes: serde_json::to_vec(value)?,
            captured_at: Utc::now(),
        };
        // push evicts the least-recently-used entry once at capacity
        self.store.write().await.push(key.to_string(), slot);
        Ok(())
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        key: &CacheKey,
    ) -> AppResult<Option<CachedValue<T>>> {
        // reads take the write lock: LruCache::get bumps recency
        let mut store = self.store.write().await;
        let Some(slot) = store.get(&key.to_string()) else {
            return Ok(None);
        };
        let cached_at = slot.captured_at;
        let value = serde_json::from_slice(&slot.bytes)?;
        drop(store);
        Ok(Some(CachedValue { value, cached_at }))
    }

    async fn invalidate(&self, key: &CacheKey) -> AppResult<()> {
        self.store.write().await.pop(&key.to_string());
        Ok(())
    }

    async fn entry_count(&self) -> AppResult<usize> {
        Ok(self.store.read().await.len())
    }

    async fn clear_all(&self) -> AppResult<()> {
        self.store.write().await.clear();
        Ok(())
    }
}
