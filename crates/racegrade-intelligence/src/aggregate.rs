// ABOUTME: Multi-distance aggregation of per-distance reports into one summary
// ABOUTME: Mean percentile, median ability tier, mean age grade with zero sentinel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Aggregation across distances.
//!
//! An athlete with personal bests at several distances gets one report per
//! distance plus an overall summary. The summary averages percentiles across
//! every report, averages age grades across the reports that produced one,
//! and takes the median ability tier.

use serde::{Deserialize, Serialize};

use racegrade_core::models::{AbilityLevel, AgeGradeCategory, Gender, PersonalBest};

use crate::scoring::{distance_report, DistanceReport};
use crate::util::{mean, round_to_tenth};

/// Cross-distance performance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallSummary {
    /// Mean percentile across all reported distances, one decimal place.
    pub mean_percentile: f64,
    /// Median ability tier across the reported distances.
    pub ability_level: AbilityLevel,
    /// Encouragement message keyed off the mean percentile.
    pub rating_message: String,
    /// Number of distances that contributed to the summary.
    pub distance_count: usize,
    /// Mean age grade across distances that produced one, one decimal
    /// place. Zero when no distance produced an age grade.
    pub mean_age_grade: f64,
    /// Category band for the mean age grade.
    pub age_grade_category: AgeGradeCategory,
}

/// Summarize a set of per-distance reports, or `None` for an empty set.
///
/// Age grades of zero mark distances where no grade was computable and stay
/// out of the age-grade mean. The ability median is the tier at index
/// `n / 2` of the ascending order, so an even number of reports resolves to
/// the upper of the two middle tiers.
#[must_use]
pub fn summarize(reports: &[DistanceReport]) -> Option<OverallSummary> {
    if reports.is_empty() {
        return None;
    }

    let percentiles: Vec<f64> = reports.iter().map(|r| r.score.percentile).collect();
    let mean_percentile = mean(&percentiles)?;

    let grades: Vec<f64> = reports
        .iter()
        .map(|r| r.score.age_grade_percent)
        .filter(|&g| g > 0.0)
        .collect();
    let mean_age_grade = mean(&grades).unwrap_or(0.0);

    let mut levels: Vec<AbilityLevel> = reports.iter().map(|r| r.score.ability_level).collect();
    levels.sort_unstable();
    let ability_level = levels[levels.len() / 2];

    Some(OverallSummary {
        mean_percentile: round_to_tenth(mean_percentile),
        ability_level,
        rating_message: overall_rating_message(mean_percentile),
        distance_count: reports.len(),
        mean_age_grade: round_to_tenth(mean_age_grade),
        age_grade_category: AgeGradeCategory::from_percent(mean_age_grade),
    })
}

/// Score every personal best and summarize the results.
///
/// Bests with a zero time are skipped. Reports come back in canonical
/// distance order, shortest first, with unrecognized distances at the end in
/// their input order.
#[must_use]
pub fn analyze_personal_bests(
    personal_bests: &[PersonalBest],
    age: u32,
    gender: Gender,
) -> (Vec<DistanceReport>, Option<OverallSummary>) {
    let mut bests: Vec<&PersonalBest> = personal_bests
        .iter()
        .filter(|pb| pb.seconds > 0)
        .collect();
    bests.sort_by_key(|pb| pb.distance.sort_key());

    let reports: Vec<DistanceReport> = bests
        .iter()
        .map(|pb| distance_report(pb.seconds, pb.distance.clone(), age, gender))
        .collect();
    let summary = summarize(&reports);
    (reports, summary)
}

fn overall_rating_message(mean_percentile: f64) -> String {
    let message = if mean_percentile >= 95.0 {
        "Outstanding multi-distance performance!"
    } else if mean_percentile >= 85.0 {
        "Excellent across all distances!"
    } else if mean_percentile >= 75.0 {
        "Strong performances across the board!"
    } else if mean_percentile >= 60.0 {
        "Solid running at multiple distances!"
    } else if mean_percentile >= 40.0 {
        "Good foundation across distances!"
    } else {
        "Keep training - you're making progress!"
    };
    message.to_owned()
}
