// ABOUTME: Descriptive statistics over a result history: outliers, windows, trend
// ABOUTME: Input slices are reverse-chronological; windowing depends on that order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Statistics over an athlete's result history.
//!
//! The input slice must be ordered most recent first. Results with a zero
//! finish time are kept out of every computation, but they still occupy
//! positions in the recency window, matching how the records were listed at
//! the source.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use racegrade_core::models::{RaceResult, TrendDirection};
use racegrade_core::timefmt::format_time;

use crate::analysis_config::AnalysisConfig;
use crate::util::{mean, round_to_tenth};

/// Event and date context for a highlighted run (personal best or worst).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunContext {
    /// Event label as recorded at the source.
    pub event_label: String,
    /// Date string as recorded at the source.
    pub date: String,
}

/// Direction and magnitude of the recent-versus-historical pace comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Detected direction, or [`TrendDirection::Unknown`] when either window
    /// is empty.
    pub direction: TrendDirection,
    /// Historical average minus recent average, truncated toward zero.
    /// Positive means the athlete got faster.
    pub diff_seconds: i64,
    /// Magnitude of the difference formatted as a clock time.
    pub diff_formatted: String,
    /// Human-readable trend summary.
    pub message: String,
}

/// Aggregate statistics for one athlete's full result history.
///
/// All stored averages and medians are truncated to whole seconds; the raw
/// outlier threshold keeps its fractional part so the partition can be
/// reproduced exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteStatistics {
    /// Number of results with a usable finish time.
    pub total_runs: usize,
    /// Mean finish time across all usable results.
    pub average_seconds: u32,
    /// Median finish time across all usable results.
    pub median_seconds: u32,
    /// Fastest finish time.
    pub best_seconds: u32,
    /// Slowest finish time.
    pub worst_seconds: u32,
    /// Event and date of the personal best.
    pub personal_best: RunContext,
    /// How long ago the personal best was set, humanized.
    pub personal_best_age: String,
    /// Event and date of the slowest run.
    pub worst_run: RunContext,
    /// Times strictly above this threshold are outliers.
    pub outlier_threshold_seconds: f64,
    /// Results classified as outliers, in input order.
    pub outlier_results: Vec<RaceResult>,
    /// Results at or under the outlier threshold, in input order.
    pub normal_results: Vec<RaceResult>,
    /// Mean finish time with outliers excluded.
    pub typical_average_seconds: u32,
    /// Median finish time with outliers excluded.
    pub typical_median_seconds: u32,
    /// Number of normal results inside the recency window.
    pub recent_run_count: usize,
    /// Mean of normal results inside the recency window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_average_seconds: Option<u32>,
    /// Mean of normal results older than the recency window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_average_seconds: Option<u32>,
    /// Recent-versus-historical pace trend.
    pub trend: TrendAnalysis,
    /// Mean of reported age grades across the history, one decimal place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_age_grade: Option<f64>,
    /// Mean of reported age grades over recent normal results, one decimal
    /// place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_average_age_grade: Option<f64>,
}

impl AthleteStatistics {
    /// Number of outlier results.
    #[must_use]
    pub fn outlier_count(&self) -> usize {
        self.outlier_results.len()
    }

    /// Number of results inside the outlier threshold.
    #[must_use]
    pub fn normal_run_count(&self) -> usize {
        self.normal_results.len()
    }
}

/// Compute the full statistics block for a result history.
///
/// Returns `None` when no result carries a usable finish time. The slice
/// must be ordered most recent first; the outlier partition, the recency
/// window, and tie-breaking for best/worst runs all preserve that order.
#[must_use]
pub fn compute_statistics(
    results: &[RaceResult],
    config: &AnalysisConfig,
) -> Option<AthleteStatistics> {
    let population: Vec<&RaceResult> = results
        .iter()
        .filter(|r| r.finish_time_seconds > 0)
        .collect();
    if population.is_empty() {
        debug!(
            total_results = results.len(),
            "no usable finish times, skipping statistics"
        );
        return None;
    }

    let times: Vec<u32> = population.iter().map(|r| r.finish_time_seconds).collect();
    let average = mean_of(&times);
    let median = median_of(&times);

    // Ties keep the earliest entry, which is the most recent result.
    let mut personal_best = population[0];
    let mut worst_run = population[0];
    for &result in &population[1..] {
        if result.finish_time_seconds < personal_best.finish_time_seconds {
            personal_best = result;
        }
        if result.finish_time_seconds > worst_run.finish_time_seconds {
            worst_run = result;
        }
    }

    let threshold = median * config.outlier.multiplier;
    let (normal, outliers): (Vec<&RaceResult>, Vec<&RaceResult>) = population
        .iter()
        .copied()
        .partition(|r| f64::from(r.finish_time_seconds) <= threshold);

    let (typical_average, typical_median) = if normal.is_empty() {
        (average, median)
    } else {
        let normal_times: Vec<u32> = normal.iter().map(|r| r.finish_time_seconds).collect();
        (mean_of(&normal_times), median_of(&normal_times))
    };

    let window = config.windows.recent_results.min(results.len());
    let recent_times: Vec<u32> = results[..window]
        .iter()
        .filter(|r| within_threshold(r, threshold))
        .map(|r| r.finish_time_seconds)
        .collect();
    let historical_times: Vec<u32> = results[window..]
        .iter()
        .filter(|r| within_threshold(r, threshold))
        .map(|r| r.finish_time_seconds)
        .collect();
    let recent_average = (!recent_times.is_empty()).then(|| mean_of(&recent_times));
    let historical_average = (!historical_times.is_empty()).then(|| mean_of(&historical_times));

    let trend = analyze_trend(recent_average, historical_average, typical_median, config);

    let all_grades: Vec<f64> = results
        .iter()
        .filter_map(|r| r.reported_age_grade_percent)
        .collect();
    let average_age_grade = mean(&all_grades)
        .filter(|&g| g > 0.0)
        .map(round_to_tenth);

    let recent_grades: Vec<f64> = results[..window]
        .iter()
        .filter(|r| within_threshold(r, threshold))
        .take(config.windows.recent_age_grades)
        .filter_map(|r| r.reported_age_grade_percent)
        .collect();
    let recent_average_age_grade = mean(&recent_grades)
        .filter(|&g| g > 0.0)
        .map(round_to_tenth);

    Some(AthleteStatistics {
        total_runs: times.len(),
        average_seconds: average as u32,
        median_seconds: median as u32,
        best_seconds: personal_best.finish_time_seconds,
        worst_seconds: worst_run.finish_time_seconds,
        personal_best_age: humanize_date_age(&personal_best.date),
        personal_best: RunContext {
            event_label: personal_best.event_label.clone(),
            date: personal_best.date.clone(),
        },
        worst_run: RunContext {
            event_label: worst_run.event_label.clone(),
            date: worst_run.date.clone(),
        },
        outlier_threshold_seconds: threshold,
        outlier_results: outliers.into_iter().cloned().collect(),
        normal_results: normal.into_iter().cloned().collect(),
        typical_average_seconds: typical_average as u32,
        typical_median_seconds: typical_median as u32,
        recent_run_count: recent_times.len(),
        recent_average_seconds: recent_average.map(|a| a as u32),
        historical_average_seconds: historical_average.map(|a| a as u32),
        trend,
        average_age_grade,
        recent_average_age_grade,
    })
}

fn within_threshold(result: &RaceResult, threshold: f64) -> bool {
    result.finish_time_seconds > 0 && f64::from(result.finish_time_seconds) <= threshold
}

/// Compare the recent window against the historical remainder.
///
/// A gap only counts as a trend when it exceeds the configured fraction of
/// the typical median; smaller gaps report as stable.
fn analyze_trend(
    recent_average: Option<f64>,
    historical_average: Option<f64>,
    typical_median: f64,
    config: &AnalysisConfig,
) -> TrendAnalysis {
    let (Some(recent), Some(historical)) = (recent_average, historical_average) else {
        return TrendAnalysis {
            direction: TrendDirection::Unknown,
            diff_seconds: 0,
            diff_formatted: "0:00".to_owned(),
            message: "Not enough data to determine trend".to_owned(),
        };
    };

    let diff = historical - recent;
    let significance = typical_median * config.trend.significance_fraction;
    let magnitude = format_time(diff.abs() as u32);

    let (direction, message) = if diff > significance {
        (
            TrendDirection::Improving,
            format!("Getting faster! Recent runs are {magnitude} quicker than your historical average"),
        )
    } else if diff < -significance {
        (
            TrendDirection::Declining,
            format!("Recent runs are {magnitude} slower than your historical average"),
        )
    } else {
        (
            TrendDirection::Stable,
            "Your pace is consistent - maintaining steady performance".to_owned(),
        )
    };

    TrendAnalysis {
        direction,
        diff_seconds: diff as i64,
        diff_formatted: magnitude,
        message,
    }
}

fn mean_of(times: &[u32]) -> f64 {
    times.iter().map(|&t| f64::from(t)).sum::<f64>() / times.len() as f64
}

fn median_of(times: &[u32]) -> f64 {
    let mut sorted = times.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        f64::midpoint(f64::from(sorted[mid - 1]), f64::from(sorted[mid]))
    } else {
        f64::from(sorted[mid])
    }
}

/// Humanize how long ago a `DD/MM/YYYY` date was. Unparseable dates are
/// echoed back unchanged; empty dates report as unknown.
fn humanize_date_age(date: &str) -> String {
    if date.is_empty() {
        return "Unknown".to_owned();
    }
    let Ok(run_date) = NaiveDate::parse_from_str(date, "%d/%m/%Y") else {
        return date.to_owned();
    };

    let days = (Utc::now().date_naive() - run_date).num_days();
    let years = days / 365;
    let months = (days % 365) / 30;

    if years > 0 {
        if months > 0 {
            format!(
                "{years} year{}, {months} month{} ago",
                plural(years),
                plural(months)
            )
        } else {
            format!("{years} year{} ago", plural(years))
        }
    } else if months > 0 {
        format!("{months} month{} ago", plural(months))
    } else if days > 0 {
        format!("{days} day{} ago", plural(days))
    } else {
        "Today".to_owned()
    }
}

const fn plural(count: i64) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
