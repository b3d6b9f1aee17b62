// ABOUTME: Athlete profile shapes shared by providers and the analysis service
// ABOUTME: AgeGroup estimation, personal bests, and the fetched profile header
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use super::{Distance, Gender};
use serde::{Deserialize, Serialize};

/// Age assumed when a profile gives no usable age information
pub const DEFAULT_AGE: u32 = 35;

/// A UK-athletics style age band label ("SEN", "V55", ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AgeGroup(pub String);

impl AgeGroup {
    /// Wrap a source label
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Estimate an age in years from the band label
    ///
    /// Veteran bands carry their lower bound (`"V55"` → 55), seniors are
    /// taken as 25, and anything unrecognized falls back to
    /// [`DEFAULT_AGE`]. An estimate is all age grading needs.
    #[must_use]
    pub fn estimated_age(&self) -> u32 {
        let label = self.0.trim();
        if let Some(age) = label.strip_prefix('V').and_then(|n| n.parse().ok()) {
            return age;
        }
        if label == "SEN" {
            return 25;
        }
        DEFAULT_AGE
    }
}

/// A personal best at one distance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonalBest {
    /// The distance the best was set at
    pub distance: Distance,
    /// Best time in whole seconds
    pub seconds: u32,
}

/// Profile header for one athlete, as assembled from a results source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AthleteProfile {
    /// Display name
    pub name: String,
    /// Club affiliation, when published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    /// Age band label, when published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    /// Gender (defaults to male when the source gives none)
    #[serde(default)]
    pub gender: Gender,
    /// Personal bests across distances
    #[serde(default)]
    pub personal_bests: Vec<PersonalBest>,
}

impl AthleteProfile {
    /// Estimated age for grading: from the age band, else [`DEFAULT_AGE`]
    #[must_use]
    pub fn estimated_age(&self) -> u32 {
        self.age_group
            .as_ref()
            .map_or(DEFAULT_AGE, AgeGroup::estimated_age)
    }
}
