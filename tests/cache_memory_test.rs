// ABOUTME: Tests for the in-memory LRU profile cache
// ABOUTME: Round trips, eviction order, invalidation, and freshness checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use racegrade::cache::memory::InMemoryProfileCache;
use racegrade::cache::{CacheConfig, CacheKey, CachedValue, ProfileCache};
use racegrade::errors::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct SampleReport {
    athlete: String,
    runs: u32,
}

fn sample(athlete: &str, runs: u32) -> SampleReport {
    SampleReport {
        athlete: athlete.to_owned(),
        runs,
    }
}

fn key(athlete_id: &str) -> CacheKey {
    CacheKey::new("parkrun".to_owned(), athlete_id.to_owned())
}

async fn cache_with_capacity(max_entries: usize) -> AppResult<InMemoryProfileCache> {
    InMemoryProfileCache::new(CacheConfig {
        max_entries,
        ..CacheConfig::default()
    })
    .await
}

#[tokio::test]
async fn test_put_get_round_trip() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
    let report = sample("Jo Runner", 42);

    cache.put(&key("123456"), &report).await?;
    let entry = cache.get::<SampleReport>(&key("123456")).await?.unwrap();

    assert_eq!(entry.value, report);
    assert!(entry.is_fresh(Duration::hours(6)));
    assert_eq!(cache.entry_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_get_missing_key_returns_none() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
    let entry = cache.get::<SampleReport>(&key("nobody")).await?;
    assert!(entry.is_none());
    Ok(())
}

#[tokio::test]
async fn test_overwrite_replaces_the_entry() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;

    cache.put(&key("123456"), &sample("Jo Runner", 1)).await?;
    cache.put(&key("123456"), &sample("Jo Runner", 2)).await?;

    let entry = cache.get::<SampleReport>(&key("123456")).await?.unwrap();
    assert_eq!(entry.value.runs, 2);
    assert_eq!(cache.entry_count().await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_eviction_drops_the_least_recently_used_entry() -> AppResult<()> {
    let cache = cache_with_capacity(2).await?;

    cache.put(&key("a"), &sample("A", 1)).await?;
    cache.put(&key("b"), &sample("B", 2)).await?;

    // Touch "a" so "b" becomes the eviction candidate
    assert!(cache.get::<SampleReport>(&key("a")).await?.is_some());

    cache.put(&key("c"), &sample("C", 3)).await?;

    assert_eq!(cache.entry_count().await?, 2);
    assert!(cache.get::<SampleReport>(&key("a")).await?.is_some());
    assert!(cache.get::<SampleReport>(&key("b")).await?.is_none());
    assert!(cache.get::<SampleReport>(&key("c")).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_invalidate_removes_only_the_given_key() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;

    cache.put(&key("123456"), &sample("Jo Runner", 1)).await?;
    cache.put(&key("654321"), &sample("Sam Runner", 2)).await?;

    cache.invalidate(&key("123456")).await?;

    assert!(cache.get::<SampleReport>(&key("123456")).await?.is_none());
    assert!(cache.get::<SampleReport>(&key("654321")).await?.is_some());

    // Invalidating an absent key is not an error
    cache.invalidate(&key("nobody")).await?;
    Ok(())
}

#[tokio::test]
async fn test_clear_all_empties_the_cache() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;

    cache.put(&key("a"), &sample("A", 1)).await?;
    cache.put(&key("b"), &sample("B", 2)).await?;
    cache.clear_all().await?;

    assert_eq!(cache.entry_count().await?, 0);
    assert!(cache.get::<SampleReport>(&key("a")).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_zero_capacity_config_is_rejected() {
    let result = cache_with_capacity(0).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_clone_handles_share_storage() -> AppResult<()> {
    let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
    let handle = cache.clone();

    cache.put(&key("123456"), &sample("Jo Runner", 1)).await?;
    assert!(handle.get::<SampleReport>(&key("123456")).await?.is_some());
    Ok(())
}

#[test]
fn test_cache_key_display() {
    let key = CacheKey::new("parkrun".to_owned(), "123456".to_owned());
    assert_eq!(key.to_string(), "source:parkrun:athlete:123456");
}

#[test]
fn test_freshness_is_relative_to_the_cooldown() {
    let entry = CachedValue {
        value: sample("Jo Runner", 1),
        cached_at: Utc::now() - Duration::hours(2),
    };

    assert!(entry.is_fresh(Duration::hours(6)));
    assert!(!entry.is_fresh(Duration::hours(1)));
    assert!(!entry.is_fresh(Duration::zero()));
    assert!(entry.age() >= Duration::hours(2));
}
