// ABOUTME: High-level analysis service tying providers, cache, and engine together
// ABOUTME: Cache-aside report assembly with stale fallback when sources are down
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Analysis Service
//!
//! One call from athlete identifier to finished report: fetch, normalize,
//! analyze, cache. Cached reports are served while fresh, refreshed once the
//! cooldown passes, and kept as a fallback for when the results source is
//! unreachable.

use crate::cache::{CacheKey, ProfileCache};
use crate::errors::AppResult;
use crate::intelligence::{
    analyze_personal_bests, compute_statistics, AnalysisConfig, AthleteStatistics, DistanceReport,
    OverallSummary,
};
use crate::models::{AthleteProfile, RaceResult};
use crate::providers::ResultsProvider;
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Complete analysis output for one athlete
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteReport {
    /// Profile header the report was built from
    pub athlete: AthleteProfile,
    /// History statistics, absent when the athlete has no timed results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<AthleteStatistics>,
    /// Per-distance scorecards for each personal best, shortest first
    pub distance_reports: Vec<DistanceReport>,
    /// Cross-distance summary, absent without any scoreable personal best
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallSummary>,
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
}

/// Report assembly service over one results source and one cache backend
pub struct AnalysisService<P, C> {
    provider: P,
    cache: C,
    analysis: AnalysisConfig,
    refresh_cooldown: Duration,
}

impl<P: ResultsProvider, C: ProfileCache> AnalysisService<P, C> {
    /// Create a service over the given source and cache
    #[must_use]
    pub const fn new(
        provider: P,
        cache: C,
        analysis: AnalysisConfig,
        refresh_cooldown: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            analysis,
            refresh_cooldown,
        }
    }

    /// Produce the report for one athlete, refreshing the cache as needed
    ///
    /// A cached report younger than the refresh cooldown is served as-is.
    /// Otherwise the source is fetched and the report rebuilt; when the fetch
    /// fails and a stale report exists, the stale report is served instead of
    /// the error.
    ///
    /// # Errors
    ///
    /// Returns an error when the fetch fails with no cached report to fall
    /// back on, or when a cached entry cannot be decoded
    pub async fn athlete_report(&self, athlete_id: &str) -> AppResult<AthleteReport> {
        let key = self.cache_key(athlete_id);

        match self.cache.get::<AthleteReport>(&key).await? {
            Some(entry) if entry.is_fresh(self.refresh_cooldown) => {
                debug!(key = %key, "serving fresh cached report");
                Ok(entry.value)
            }
            stale => match self.provider.fetch_athlete(athlete_id).await {
                Ok(fetched) => {
                    let (profile, results) = fetched.normalize();
                    let report = self.build_report(profile, results);
                    if let Err(err) = self.cache.put(&key, &report).await {
                        warn!(key = %key, error = %err, "failed to cache report");
                    }
                    Ok(report)
                }
                Err(err) => match stale {
                    Some(entry) => {
                        warn!(
                            key = %key,
                            error = %err,
                            "source fetch failed, serving stale cached report"
                        );
                        Ok(entry.value)
                    }
                    None => Err(err),
                },
            },
        }
    }

    /// Assemble a report from already-normalized data
    ///
    /// Useful when the caller holds the athlete's data itself, e.g. from a
    /// bulk export, and only needs the analysis.
    #[must_use]
    pub fn build_report(&self, profile: AthleteProfile, results: Vec<RaceResult>) -> AthleteReport {
        let age = profile.estimated_age();
        let gender = profile.gender;

        let statistics = compute_statistics(&results, &self.analysis);
        let (distance_reports, overall) =
            analyze_personal_bests(&profile.personal_bests, age, gender);

        info!(
            athlete = %profile.name,
            runs = results.len(),
            distances = distance_reports.len(),
            "assembled athlete report"
        );

        AthleteReport {
            athlete: profile,
            statistics,
            distance_reports,
            overall,
            generated_at: Utc::now(),
        }
    }

    /// Build reports for many athletes in parallel
    ///
    /// Pure CPU work fanned out with rayon; nothing is fetched or cached.
    #[must_use]
    pub fn analyze_batch(
        &self,
        athletes: Vec<(AthleteProfile, Vec<RaceResult>)>,
    ) -> Vec<AthleteReport> {
        athletes
            .into_par_iter()
            .map(|(profile, results)| self.build_report(profile, results))
            .collect()
    }

    /// Drop the cached report for one athlete, forcing the next call to fetch
    ///
    /// # Errors
    ///
    /// Returns an error if the cache backend fails the removal
    pub async fn invalidate(&self, athlete_id: &str) -> AppResult<()> {
        self.cache.invalidate(&self.cache_key(athlete_id)).await
    }

    fn cache_key(&self, athlete_id: &str) -> CacheKey {
        CacheKey::new(
            self.provider.source_key().to_owned(),
            athlete_id.to_owned(),
        )
    }
}
