// ABOUTME: Tunable analysis configuration with environment variable overrides
// ABOUTME: Controls outlier detection, trend significance, and windowing behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Configuration for the analysis engine.
//!
//! All thresholds ship with defaults that match the published behavior of the
//! analysis pipeline. Deployments can override individual values through
//! `RACEGRADE_*` environment variables without recompiling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating analysis configuration.
#[derive(Debug, Clone, Error)]
pub enum AnalysisConfigError {
    /// An environment override could not be parsed as a number.
    #[error("invalid threshold value: {0}")]
    InvalidThreshold(String),

    /// An environment override for a window size could not be parsed.
    #[error("invalid window value: {0}")]
    InvalidWindow(String),

    /// The assembled configuration failed range validation.
    #[error("config validation failed: {0}")]
    ValidationFailed(String),
}

/// Outlier detection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// A finish time is an outlier when it exceeds the median multiplied by
    /// this factor.
    pub multiplier: f64,
}

/// Trend detection thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Fraction of the typical median that the recent/historical gap must
    /// exceed before a trend is reported.
    pub significance_fraction: f64,
}

/// Window sizes for recency-based computations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Number of most recent results considered "recent" for trend analysis.
    pub recent_results: usize,
    /// Number of most recent results considered for the recent age-grade
    /// average.
    pub recent_age_grades: usize,
}

/// Tunable thresholds for the analysis engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Outlier detection settings.
    pub outlier: OutlierConfig,
    /// Trend detection settings.
    pub trend: TrendConfig,
    /// Recency window settings.
    pub windows: WindowConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            outlier: OutlierConfig { multiplier: 1.5 },
            trend: TrendConfig {
                significance_fraction: 0.02,
            },
            windows: WindowConfig {
                recent_results: 20,
                recent_age_grades: 10,
            },
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// Recognized variables:
    /// - `RACEGRADE_OUTLIER_MULTIPLIER` - outlier threshold multiplier
    /// - `RACEGRADE_TREND_SIGNIFICANCE` - trend significance fraction
    /// - `RACEGRADE_RECENT_WINDOW` - recent results window size
    /// - `RACEGRADE_RECENT_AGE_GRADE_WINDOW` - recent age-grade window size
    ///
    /// # Errors
    ///
    /// Returns an error when an override cannot be parsed or the resulting
    /// configuration fails validation.
    pub fn from_environment() -> Result<Self, AnalysisConfigError> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("RACEGRADE_OUTLIER_MULTIPLIER") {
            config.outlier.multiplier = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("RACEGRADE_OUTLIER_MULTIPLIER".into())
            })?;
        }

        if let Ok(val) = std::env::var("RACEGRADE_TREND_SIGNIFICANCE") {
            config.trend.significance_fraction = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidThreshold("RACEGRADE_TREND_SIGNIFICANCE".into())
            })?;
        }

        if let Ok(val) = std::env::var("RACEGRADE_RECENT_WINDOW") {
            config.windows.recent_results = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidWindow("RACEGRADE_RECENT_WINDOW".into())
            })?;
        }

        if let Ok(val) = std::env::var("RACEGRADE_RECENT_AGE_GRADE_WINDOW") {
            config.windows.recent_age_grades = val.parse().map_err(|_| {
                AnalysisConfigError::InvalidWindow("RACEGRADE_RECENT_AGE_GRADE_WINDOW".into())
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate that every threshold is inside its sensible range.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisConfigError::ValidationFailed`] naming the offending
    /// value.
    pub fn validate(&self) -> Result<(), AnalysisConfigError> {
        if !self.outlier.multiplier.is_finite() || self.outlier.multiplier < 1.0 {
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "outlier multiplier must be a finite value >= 1.0, got {}",
                self.outlier.multiplier
            )));
        }

        if !self.trend.significance_fraction.is_finite()
            || !(0.0..1.0).contains(&self.trend.significance_fraction)
        {
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "trend significance fraction must be in [0.0, 1.0), got {}",
                self.trend.significance_fraction
            )));
        }

        if self.windows.recent_results == 0 {
            return Err(AnalysisConfigError::ValidationFailed(
                "recent results window must be at least 1".into(),
            ));
        }

        if self.windows.recent_age_grades == 0
            || self.windows.recent_age_grades > self.windows.recent_results
        {
            return Err(AnalysisConfigError::ValidationFailed(format!(
                "recent age-grade window must be in [1, {}]",
                self.windows.recent_results
            )));
        }

        Ok(())
    }
}
