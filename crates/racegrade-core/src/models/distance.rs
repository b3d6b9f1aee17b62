// ABOUTME: Race distance and gender enumerations with source-label normalization
// ABOUTME: Distance covers the tabulated events plus Other for anything unrecognized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Athlete gender as carried by results sites
///
/// The analysis tables are published per gender. Anything that is not
/// recognizably `female` is treated as `male`, a deliberate degrade-gracefully
/// policy for partially known profiles, relied on by every lookup.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (also the fallback for unknown labels)
    #[default]
    Male,
    /// Female
    Female,
}

impl Gender {
    /// Parse a source label case-insensitively; unknown labels default to male
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.trim().eq_ignore_ascii_case("female") {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Lowercase name as used in serialized output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Race distance for a timed result
///
/// The five standard road distances carry reference data (age factors,
/// percentile ladders, ability bands, benchmark averages). The `Other`
/// variant keeps unrecognized events flowing through the pipeline; lookups
/// degrade to defined fallbacks instead of failing.
///
/// # Examples
///
/// ```rust
/// use racegrade_core::models::Distance;
///
/// assert_eq!(Distance::from_label("5000"), Distance::FiveK);
/// assert_eq!(Distance::from_label("Mar"), Distance::Marathon);
/// assert_eq!(Distance::from_label("3000SC"), Distance::Other("3000SC".into()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// 5 kilometres
    FiveK,
    /// 10 kilometres
    TenK,
    /// 10 miles
    TenMiles,
    /// Half marathon (21.097 km)
    HalfMarathon,
    /// Marathon (42.195 km)
    Marathon,
    /// Any event without reference data (steeplechase, 20 miles, ...)
    Other(String),
}

impl Distance {
    /// Normalize a source label into a distance
    ///
    /// Accepts the UK results-site vocabulary (`"5000"`, `"Mar"`, `"HM"`,
    /// `"10M"`) as well as this crate's own display names. Unrecognized labels
    /// become [`Distance::Other`] with the label preserved (the `"20M"` alias
    /// is normalized to its display form first).
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "5K" | "5000" => Self::FiveK,
            "10K" | "10000" => Self::TenK,
            "10M" | "10 Miles" => Self::TenMiles,
            "HM" | "Half Marathon" => Self::HalfMarathon,
            "Mar" | "Marathon" => Self::Marathon,
            "20M" => Self::Other("20 Miles".into()),
            other => Self::Other(other.into()),
        }
    }

    /// Human-readable name ("5K", "10 Miles", "Half Marathon", ...)
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::TenMiles => "10 Miles",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
            Self::Other(label) => label,
        }
    }

    /// Official distance in metres, where the event has one
    #[must_use]
    pub const fn meters(&self) -> Option<u32> {
        match self {
            Self::FiveK => Some(5000),
            Self::TenK => Some(10_000),
            Self::TenMiles => Some(16_093),
            Self::HalfMarathon => Some(21_097),
            Self::Marathon => Some(42_195),
            Self::Other(_) => None,
        }
    }

    /// Whether reference tables carry data for this distance
    #[must_use]
    pub const fn is_tabulated(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Sort key for deterministic shortest-to-longest iteration
    ///
    /// Tabulated distances order by length; unrecognized events sort last
    /// and keep their source order under a stable sort.
    #[must_use]
    pub const fn sort_key(&self) -> u32 {
        match self.meters() {
            Some(m) => m,
            None => u32::MAX,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
