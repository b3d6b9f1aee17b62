// ABOUTME: Race result source abstraction feeding the analysis service
// ABOUTME: Unifies athlete history access behind one trait with lenient normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

use async_trait::async_trait;
use racegrade_core::errors::AppResult;
use racegrade_core::models::{
    AgeGroup, AthleteProfile, Distance, Gender, PersonalBest, RaceResult, RawRaceRecord,
};
use racegrade_core::timefmt;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Source of athlete race histories
///
/// Implementations wrap one results site or data export. They return raw
/// textual records; validation happens once, in [`FetchedProfile::normalize`],
/// so every source gets the same lenient treatment.
#[async_trait]
pub trait ResultsProvider: Send + Sync {
    /// Stable lowercase identifier for this source, used in cache keys and logs
    fn source_key(&self) -> &'static str;

    /// Fetch the profile header and full result history for one athlete
    ///
    /// Results must be ordered most recent first; the statistics engine
    /// depends on that ordering.
    ///
    /// # Errors
    ///
    /// Returns an error when the athlete does not exist or the source cannot
    /// be reached
    async fn fetch_athlete(&self, athlete_id: &str) -> AppResult<FetchedProfile>;
}

/// A personal best exactly as a source publishes it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPersonalBest {
    /// Distance label as published (e.g. "5000", "HM")
    pub event_label: String,
    /// Best time text (e.g. "18:16")
    pub time: String,
}

/// Everything a provider returns for one athlete, all fields still textual
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedProfile {
    /// Display name
    pub name: String,
    /// Club affiliation, when published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
    /// Age band label, when published (e.g. "V55", "SEN")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    /// Gender label, when published
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Personal bests as published
    #[serde(default)]
    pub personal_bests: Vec<RawPersonalBest>,
    /// Result history, most recent first
    #[serde(default)]
    pub results: Vec<RawRaceRecord>,
}

impl FetchedProfile {
    /// Validate the fetched data into a profile and result list
    ///
    /// Personal bests with unparseable times are dropped with a debug log;
    /// race records with unparseable finish times are dropped by
    /// [`RaceResult::from_raw`]. Ordering is preserved throughout, and an
    /// absent gender label falls back to male like every other lookup.
    #[must_use]
    pub fn normalize(self) -> (AthleteProfile, Vec<RaceResult>) {
        let Self {
            name,
            club,
            age_group,
            gender,
            personal_bests,
            results,
        } = self;

        let personal_bests = personal_bests
            .into_iter()
            .filter_map(|pb| {
                let Some(seconds) = timefmt::parse_time(&pb.time) else {
                    debug!(
                        event = %pb.event_label,
                        time = %pb.time,
                        "dropping personal best with unparseable time"
                    );
                    return None;
                };
                Some(PersonalBest {
                    distance: Distance::from_label(&pb.event_label),
                    seconds,
                })
            })
            .collect();

        let profile = AthleteProfile {
            name,
            club,
            age_group: age_group.map(AgeGroup::new),
            gender: gender
                .as_deref()
                .map_or_else(Gender::default, Gender::from_label),
            personal_bests,
        };

        let validated = results.iter().filter_map(RaceResult::from_raw).collect();

        (profile, validated)
    }
}
