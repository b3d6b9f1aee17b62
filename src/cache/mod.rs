// ABOUTME: Cache abstraction layer for assembled athlete reports
// ABOUTME: Pluggable backend support with read-time freshness instead of expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

/// In-memory cache implementation
pub mod memory;

use chrono::{DateTime, Duration, Utc};
use racegrade_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Default maximum number of cached profiles before LRU eviction
const DEFAULT_CACHE_MAX_ENTRIES: usize = 1024;

/// Default cooldown before a cached report is considered stale
const DEFAULT_REFRESH_COOLDOWN_HOURS: i64 = 6;

/// Cache provider trait for pluggable backend implementations
///
/// Entries never expire on their own. Every read returns the capture time
/// alongside the value, and callers decide whether the entry is fresh
/// enough to serve. Stale entries are retained deliberately so a report
/// built from old results can stand in when the results source is down.
///
/// # Examples
///
/// ```rust,no_run
/// use racegrade::cache::{CacheConfig, CacheKey, ProfileCache};
/// use racegrade::cache::memory::InMemoryProfileCache;
/// use serde::{Deserialize, Serialize};
/// # async fn example() -> Result<(), racegrade::errors::AppError> {
///
/// #[derive(Serialize, Deserialize)]
/// struct ReportStub {
///     athlete: String,
///     run_count: u32,
/// }
///
/// // Create cache with default configuration
/// let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
///
/// // Key a report by results source and athlete identifier
/// let key = CacheKey::new("parkrun".to_owned(), "123456".to_owned());
///
/// // Store a report
/// let report = ReportStub {
///     athlete: "Jane Doe".to_owned(),
///     run_count: 42,
/// };
/// cache.put(&key, &report).await?;
///
/// // Read it back together with its capture time
/// if let Some(cached) = cache.get::<ReportStub>(&key).await? {
///     println!("{} runs, cached at {}", cached.value.run_count, cached.cached_at);
/// }
///
/// // Drop the entry
/// cache.invalidate(&key).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait ProfileCache: Send + Sync + Clone {
    /// Create new cache instance with configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the backend
    /// cannot be initialized
    async fn new(config: CacheConfig) -> AppResult<Self>
    where
        Self: Sized;

    /// Store a value, replacing any previous entry and resetting its age
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or storage fails
    async fn put<T: Serialize + Send + Sync>(&self, key: &CacheKey, value: &T) -> AppResult<()>;

    /// Retrieve a value together with the moment it was stored
    ///
    /// Returns `Ok(None)` when the key has never been stored or has been
    /// evicted.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails
    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        key: &CacheKey,
    ) -> AppResult<Option<CachedValue<T>>>;

    /// Remove a single cache entry
    ///
    /// # Errors
    ///
    /// Returns an error if invalidation fails
    async fn invalidate(&self, key: &CacheKey) -> AppResult<()>;

    /// Number of entries currently held
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot report its size
    async fn entry_count(&self) -> AppResult<usize>;

    /// Clear all cache entries (for testing/admin)
    ///
    /// # Errors
    ///
    /// Returns an error if the clear operation fails
    async fn clear_all(&self) -> AppResult<()>;
}

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries before least-recently-used eviction
    pub max_entries: usize,
    /// How long a cached entry counts as fresh
    pub refresh_cooldown: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            refresh_cooldown: Duration::hours(DEFAULT_REFRESH_COOLDOWN_HOURS),
        }
    }
}

impl CacheConfig {
    /// Load cache configuration from environment variables
    ///
    /// Honors `RACEGRADE_CACHE_MAX_ENTRIES` and
    /// `RACEGRADE_REFRESH_COOLDOWN_HOURS`. Unset variables keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but does not parse, or if the
    /// resulting configuration fails validation
    pub fn from_environment() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("RACEGRADE_CACHE_MAX_ENTRIES") {
            config.max_entries = raw.parse().map_err(|_| {
                AppError::config_invalid(format!(
                    "RACEGRADE_CACHE_MAX_ENTRIES must be a non-negative integer, got '{raw}'"
                ))
            })?;
        }

        if let Ok(raw) = env::var("RACEGRADE_REFRESH_COOLDOWN_HOURS") {
            let hours: i64 = raw.parse().map_err(|_| {
                AppError::config_invalid(format!(
                    "RACEGRADE_REFRESH_COOLDOWN_HOURS must be an integer, got '{raw}'"
                ))
            })?;
            config.refresh_cooldown = Duration::try_hours(hours).ok_or_else(|| {
                AppError::config_invalid(format!(
                    "RACEGRADE_REFRESH_COOLDOWN_HOURS is out of range: {hours}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for unusable values
    ///
    /// # Errors
    ///
    /// Returns an error when the capacity is zero or the cooldown is
    /// negative
    pub fn validate(&self) -> AppResult<()> {
        if self.max_entries == 0 {
            return Err(AppError::config_invalid(
                "cache capacity must be at least 1 entry",
            ));
        }
        if self.refresh_cooldown < Duration::zero() {
            return Err(AppError::config_invalid(
                "refresh cooldown must not be negative",
            ));
        }
        Ok(())
    }
}

/// Structured cache key addressing one athlete under one results source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Results source the profile was fetched from
    pub source: String,
    /// Source-scoped athlete identifier
    pub athlete_id: String,
}

impl CacheKey {
    /// Create new cache key
    #[must_use]
    pub const fn new(source: String, athlete_id: String) -> Self {
        Self { source, athlete_id }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "source:{}:athlete:{}", self.source, self.athlete_id)
    }
}

/// A cached value together with the moment it was captured
#[derive(Debug, Clone)]
pub struct CachedValue<T> {
    /// The deserialized payload
    pub value: T,
    /// When the payload was stored
    pub cached_at: DateTime<Utc>,
}

impl<T> CachedValue<T> {
    /// Whether the entry is younger than the given cooldown
    #[must_use]
    pub fn is_fresh(&self, cooldown: Duration) -> bool {
        self.age() < cooldown
    }

    /// Time elapsed since the entry was stored
    #[must_use]
    pub fn age(&self) -> Duration {
        Utc::now() - self.cached_at
    }
}
