// ABOUTME: Raw fetched race records and the validated RaceResult type
// ABOUTME: Boundary conversion drops unparseable times and keeps optional fields lenient
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use crate::timefmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One race record exactly as a fetcher returns it, all fields still textual
///
/// Fetchers hand these over without interpretation; validation happens once,
/// at the boundary, via [`RaceResult::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRaceRecord {
    /// Event name as published (e.g. "Bushy Park parkrun")
    pub event_label: String,
    /// Date string as published, not guaranteed parseable (e.g. "14/06/2025")
    pub date: String,
    /// Finish time text (e.g. "25:30", "1:23:45", "25:30c", "--")
    pub finish_time: String,
    /// Finishing position text, if published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Age-grade text, if published (e.g. "62.34 %")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_grade: Option<String>,
    /// Whether the source flagged this run as a personal best
    #[serde(default)]
    pub personal_best: bool,
}

/// One completed timed event, validated and immutable
///
/// Collections of results for an athlete are ordered most-recent-first; the
/// statistics engine depends on that ordering for its recency split.
///
/// # Examples
///
/// ```rust
/// use racegrade_core::models::{RaceResult, RawRaceRecord};
///
/// let raw = RawRaceRecord {
///     event_label: "Bushy Park parkrun".into(),
///     date: "14/06/2025".into(),
///     finish_time: "25:30".into(),
///     position: Some("102".into()),
///     age_grade: Some("58.4 %".into()),
///     personal_best: false,
/// };
/// let result = RaceResult::from_raw(&raw).unwrap();
/// assert_eq!(result.finish_time_seconds, 1530);
/// assert_eq!(result.reported_age_grade_percent, Some(58.4));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RaceResult {
    /// Event name as published
    pub event_label: String,
    /// Date string as published, kept verbatim
    pub date: String,
    /// Finish time in whole seconds, from the race-time codec
    pub finish_time_seconds: u32,
    /// Finishing position, if published and numeric
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Age-grade percentage reported by the source, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_age_grade_percent: Option<f64>,
    /// Whether the source flagged this run as a personal best
    #[serde(default)]
    pub personal_best: bool,
}

impl RaceResult {
    /// Validate a raw record into a result
    ///
    /// A record whose finish time fails to parse is unusable and yields
    /// `None`; it never enters the statistics population. Position and
    /// age-grade are parsed leniently and simply dropped when malformed.
    #[must_use]
    pub fn from_raw(raw: &RawRaceRecord) -> Option<Self> {
        let Some(finish_time_seconds) = timefmt::parse_time(&raw.finish_time) else {
            debug!(
                event = %raw.event_label,
                time = %raw.finish_time,
                "dropping record with unparseable finish time"
            );
            return None;
        };

        Some(Self {
            event_label: raw.event_label.clone(),
            date: raw.date.clone(),
            finish_time_seconds,
            position: raw
                .position
                .as_deref()
                .and_then(|p| p.trim().parse().ok()),
            reported_age_grade_percent: raw.age_grade.as_deref().and_then(parse_age_grade),
            personal_best: raw.personal_best,
        })
    }

    /// Finish time rendered back to `MM:SS` / `H:MM:SS`
    #[must_use]
    pub fn formatted_time(&self) -> String {
        timefmt::format_time(self.finish_time_seconds)
    }
}

/// Parse an age-grade string such as `"62.34 %"` or `"62.34%"`
fn parse_age_grade(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches('%')
        .trim()
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
}
