// ABOUTME: Comparative scoring of a single finish time at a single distance
// ABOUTME: Percentile, ability tier, age grading, and benchmark comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Scoring of individual performances.
//!
//! A score answers "how good is this time" from several angles at once: the
//! share of the running population it beats, the ability tier it lands in,
//! the age-adjusted percentage of the open-class standard, and side-by-side
//! comparisons against population averages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use racegrade_core::models::{AbilityLevel, AgeGradeCategory, Distance, Gender};
use racegrade_core::timefmt::format_time;

use crate::reference;
use crate::util::round_to_tenth;

/// Multi-angle assessment of one finish time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparativeScore {
    /// Share of the running population this time beats.
    pub percentile: f64,
    /// Ability tier for the athlete's age bracket and gender.
    pub ability_level: AbilityLevel,
    /// Encouragement message keyed off the percentile.
    pub rating_message: String,
    /// Age-adjusted percentage of the open-class standard, one decimal
    /// place. Zero means no age grade could be computed.
    pub age_grade_percent: f64,
    /// Finish time adjusted to open-class age, in seconds. Zero means no
    /// age grade could be computed.
    pub age_graded_time_seconds: u32,
    /// Category band for the age grade percentage.
    pub age_grade_category: AgeGradeCategory,
}

/// One benchmark row: the athlete's time against a population average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// Benchmark label, e.g. `Global 5K Average`.
    pub name: String,
    /// Benchmark time in seconds.
    pub benchmark_seconds: u32,
    /// Benchmark time formatted as a clock time.
    pub benchmark_time: String,
    /// Absolute gap between the athlete's time and the benchmark.
    pub difference_seconds: u32,
    /// The gap formatted as a clock time.
    pub difference_time: String,
    /// True when the athlete beat the benchmark outright.
    pub faster: bool,
}

/// Full per-distance report: the scored time plus benchmark context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceReport {
    /// The distance this report covers.
    pub distance: Distance,
    /// Display name of the distance.
    pub distance_name: String,
    /// The assessed finish time in seconds.
    pub time_seconds: u32,
    /// The assessed finish time formatted as a clock time.
    pub formatted_time: String,
    /// The comparative score for this time.
    #[serde(flatten)]
    pub score: ComparativeScore,
    /// Age-graded time formatted as a clock time, absent when no age grade
    /// was computable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_graded_time: Option<String>,
    /// Benchmark comparison rows, empty for distances without benchmarks.
    pub comparisons: Vec<BenchmarkComparison>,
}

/// Score a finish time at a distance for an athlete of the given age and
/// gender.
///
/// Total over all inputs: distances without reference data score with the
/// documented fallbacks (5K percentile ladder, intermediate tier, no age
/// grade).
///
/// ```rust
/// use racegrade_core::models::{Distance, Gender};
/// use racegrade_intelligence::scoring::score;
///
/// let scored = score(1096, &Distance::FiveK, 55, Gender::Male);
/// assert_eq!(scored.age_graded_time_seconds, 932);
/// assert!((scored.age_grade_percent - 81.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn score(time_seconds: u32, distance: &Distance, age: u32, gender: Gender) -> ComparativeScore {
    if let Distance::Other(label) = distance {
        debug!(distance = %label, "no reference tables for distance, scoring with fallbacks");
    }

    let percentile = reference::percentile_for_time(time_seconds, distance);
    let (age_grade_percent, age_graded_time_seconds) = age_grade(time_seconds, distance, age, gender);

    ComparativeScore {
        percentile,
        ability_level: reference::ability_level(time_seconds, distance, age, gender),
        rating_message: rating_message(percentile, distance),
        age_grade_percent,
        age_graded_time_seconds,
        age_grade_category: AgeGradeCategory::from_percent(age_grade_percent),
    }
}

/// Age grade a finish time: `(percentage of open standard, age-graded time)`.
///
/// The age-graded time is the finish time scaled by the age factor and
/// rounded to the nearest second. Both values are zero when the distance has
/// no open standard, the time is zero, or the graded time rounds to zero.
#[must_use]
pub fn age_grade(time_seconds: u32, distance: &Distance, age: u32, gender: Gender) -> (f64, u32) {
    let standard = reference::open_standard_seconds(distance, gender);
    if standard == 0 || time_seconds == 0 {
        return (0.0, 0);
    }

    let factor = reference::age_grade_factor(age, distance, gender);
    let graded = (f64::from(time_seconds) * factor).round() as u32;
    if graded == 0 {
        return (0.0, 0);
    }

    let percent = round_to_tenth(f64::from(standard) / f64::from(graded) * 100.0);
    (percent, graded)
}

/// Compare a time against the distance's benchmark averages.
///
/// Always yields the overall global and UK rows; passing a gender adds the
/// matching global gendered row. Distances without benchmark data yield an
/// empty list.
#[must_use]
pub fn compare_to_benchmarks(
    time_seconds: u32,
    distance: &Distance,
    gender: Option<Gender>,
) -> Vec<BenchmarkComparison> {
    let Some(set) = reference::benchmark_set(distance) else {
        return Vec::new();
    };
    let name = distance.display_name();

    let mut comparisons = vec![
        benchmark_row(format!("Global {name} Average"), set.global, time_seconds),
        benchmark_row(format!("UK {name} Average"), set.uk, time_seconds),
    ];

    if let Some(gender) = gender {
        let (benchmark, label) = match gender {
            Gender::Male => (set.global_male, format!("Global Male {name} Average")),
            Gender::Female => (set.global_female, format!("Global Female {name} Average")),
        };
        comparisons.push(benchmark_row(label, benchmark, time_seconds));
    }

    comparisons
}

/// Build the full report for one distance.
#[must_use]
pub fn distance_report(
    time_seconds: u32,
    distance: Distance,
    age: u32,
    gender: Gender,
) -> DistanceReport {
    let score = score(time_seconds, &distance, age, gender);
    let comparisons = compare_to_benchmarks(time_seconds, &distance, Some(gender));
    let age_graded_time =
        (score.age_graded_time_seconds > 0).then(|| format_time(score.age_graded_time_seconds));

    DistanceReport {
        distance_name: distance.display_name().to_owned(),
        time_seconds,
        formatted_time: format_time(time_seconds),
        score,
        age_graded_time,
        comparisons,
        distance,
    }
}

fn benchmark_row(name: String, benchmark_seconds: u32, time_seconds: u32) -> BenchmarkComparison {
    let difference = benchmark_seconds.abs_diff(time_seconds);
    BenchmarkComparison {
        name,
        benchmark_seconds,
        benchmark_time: format_time(benchmark_seconds),
        difference_seconds: difference,
        difference_time: format_time(difference),
        faster: benchmark_seconds > time_seconds,
    }
}

fn rating_message(percentile: f64, distance: &Distance) -> String {
    let name = distance.display_name();
    if percentile >= 99.0 {
        format!("Incredible! You're among the fastest {name} runners!")
    } else if percentile >= 95.0 {
        format!("Outstanding! Elite-level {name} performance!")
    } else if percentile >= 90.0 {
        format!("Excellent! Faster than 90% of {name} runners!")
    } else if percentile >= 80.0 {
        format!("Great {name} time! Faster than 80% of runners!")
    } else if percentile >= 70.0 {
        format!("Well done! Faster than most {name} runners!")
    } else if percentile >= 50.0 {
        format!("Good {name} time! Faster than average!")
    } else if percentile >= 30.0 {
        format!("Solid {name} effort! Keep training!")
    } else {
        format!("You completed the {name}! Great achievement!")
    }
}
