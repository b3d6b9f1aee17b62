// ABOUTME: Performance analysis engine: reference tables, statistics, and scoring
// ABOUTME: Pure computation over validated race results, no I/O or provider logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![deny(unsafe_code)]

//! # Racegrade Intelligence
//!
//! Analysis engine for runner performance data. Everything in this crate is
//! pure computation: callers hand over validated [`racegrade_core`] records
//! and demographics, and get back structured reports.
//!
//! ## Modules
//!
//! - [`analysis_config`] - Tunable analysis thresholds with environment overrides
//! - [`reference`] - Age-grading factors, percentile ladders, ability bands, benchmarks
//! - [`statistics`] - Descriptive statistics, outlier partitioning, trend detection
//! - [`scoring`] - Comparative scoring of a single time at a single distance
//! - [`aggregate`] - Multi-distance aggregation into an overall summary
//!
//! ## Design Principles
//!
//! - **Deterministic**: identical inputs always produce identical reports
//! - **Total**: unknown distances, genders, and out-of-range ages degrade to
//!   documented fallbacks instead of erroring
//! - **Order-preserving**: result slices are expected in reverse-chronological
//!   order and every windowed computation relies on that ordering

/// Tunable analysis configuration with environment variable overrides.
pub mod analysis_config;
/// Static reference data: age factors, percentile ladders, ability bands, benchmarks.
pub mod reference;
/// Comparative scoring of individual performances.
pub mod scoring;
/// Descriptive statistics and trend detection over a result history.
pub mod statistics;

/// Multi-distance aggregation.
pub mod aggregate;

mod util;

pub use aggregate::{analyze_personal_bests, summarize, OverallSummary};
pub use analysis_config::{AnalysisConfig, AnalysisConfigError};
pub use scoring::{
    age_grade, compare_to_benchmarks, distance_report, score, BenchmarkComparison,
    ComparativeScore, DistanceReport,
};
pub use statistics::{compute_statistics, AthleteStatistics, RunContext, TrendAnalysis};
