// ABOUTME: Main library entry point for the racegrade analysis platform
// ABOUTME: Wires providers, caching, and the analysis engine into one service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![deny(unsafe_code)]

//! # Racegrade
//!
//! Performance analysis for runners. Racegrade turns a raw race history into
//! a full report: descriptive statistics with outlier detection, a
//! recent-versus-historical trend, age-graded comparative scores per
//! distance, and a cross-distance summary.
//!
//! ## Features
//!
//! - **Time codec**: lenient parsing of `MM:SS` / `H:MM:SS` strings from
//!   scraped sources, strict formatting back out
//! - **Age grading**: WMA-style factor tables for ages 30-100 with a blended
//!   10-mile table
//! - **Comparative scoring**: percentile ladders, ability tiers, and
//!   population benchmark comparisons per distance
//! - **Trend detection**: recent-window pace compared against the historical
//!   remainder with a configurable significance threshold
//! - **Caching**: pluggable report cache with staleness-aware fallback when
//!   a source is unavailable
//!
//! ## Architecture
//!
//! - **Providers**: abstract access to race result sources
//! - **Cache**: bounded in-memory report storage keyed by source and athlete
//! - **Service**: fetch, normalize, analyze, and cache in one call
//! - **Engine**: the pure computation lives in `racegrade-intelligence`,
//!   with shared vocabulary types in `racegrade-core`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use racegrade::cache::{CacheConfig, ProfileCache};
//! use racegrade::cache::memory::InMemoryProfileCache;
//! use racegrade::errors::AppResult;
//! use racegrade::intelligence::AnalysisConfig;
//!
//! # async fn example() -> AppResult<()> {
//! let cache = InMemoryProfileCache::new(CacheConfig::default()).await?;
//! let analysis = AnalysisConfig::default();
//! println!("outlier multiplier: {}", analysis.outlier.multiplier);
//! # Ok(())
//! # }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by integration tests (tests/) and downstream
// consumers. They must remain `pub`.

/// Report cache abstraction with pluggable backends
pub mod cache;

/// Analysis engine re-exports from the racegrade-intelligence crate
pub mod intelligence;

/// Logging configuration and structured logging setup
pub mod logging;

/// Shared vocabulary type re-exports from the racegrade-core crate
pub mod models;

/// Race result source abstraction
pub mod providers;

/// High-level analysis service tying providers, cache, and engine together
pub mod service;

pub use racegrade_core::errors;
pub use racegrade_core::timefmt;
