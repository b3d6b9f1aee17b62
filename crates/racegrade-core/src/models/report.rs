// ABOUTME: Classification vocabulary for analysis output
// ABOUTME: Ability tiers, age-grade categories, and trend directions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Banded ability classification for a finish time
///
/// Variants are declared slowest to fastest so the derived ordering matches
/// the ordinal scale used for aggregation (beginner = 1 ... elite = 5).
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum AbilityLevel {
    /// Casual runner
    Beginner = 1,
    /// Recreational runner
    Novice = 2,
    /// Regular club runner
    Intermediate = 3,
    /// Strong club runner
    Advanced = 4,
    /// Near open-competitive standard
    Elite = 5,
}

impl AbilityLevel {
    /// Ordinal rank on the fixed 1..=5 scale (beginner = 1, elite = 5)
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Human-readable tier name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Novice => "Novice",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for AbilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Performance category derived from an age-grade percentage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgeGradeCategory {
    /// Below 50%
    Beginner,
    /// 50% and above
    Recreational,
    /// 60% and above
    Club,
    /// 70% and above
    Regional,
    /// 80% and above
    National,
    /// 90% and above
    WorldClass,
}

impl AgeGradeCategory {
    /// Classify an age-grade percentage (inclusive lower bounds)
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::WorldClass
        } else if percent >= 80.0 {
            Self::National
        } else if percent >= 70.0 {
            Self::Regional
        } else if percent >= 60.0 {
            Self::Club
        } else if percent >= 50.0 {
            Self::Recreational
        } else {
            Self::Beginner
        }
    }

    /// Human-readable category name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Recreational => "Recreational",
            Self::Club => "Club Runner",
            Self::Regional => "Regional Class",
            Self::National => "National Class",
            Self::WorldClass => "World Class",
        }
    }
}

impl fmt::Display for AgeGradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Direction of an athlete's recent-versus-historical trend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Recent runs are significantly faster than historical ones
    Improving,
    /// Recent runs are significantly slower than historical ones
    Declining,
    /// No significant difference either way
    Stable,
    /// Not enough data to compare
    Unknown,
}
