// ABOUTME: Reference lookups: age-grading factors, percentile ladders, ability bands
// ABOUTME: Wraps the generated data tables behind total lookup functions with fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Static reference data for comparative scoring.
//!
//! Four table families live here, each in its own generated submodule:
//!
//! - **Age factors**: WMA-style road factors for ages 30-100 per gender and
//!   event. The 10-mile tables are not tabulated; they are blended once from
//!   the 10K and half-marathon columns.
//! - **Percentile ladders**: empirical time thresholds mapping a finish time
//!   to the share of the running population it beats.
//! - **Ability bands**: five-tier time boundaries at fixed age brackets.
//! - **Benchmarks**: global and UK average finish times per distance.
//!
//! Every lookup is total. Unknown distances degrade to documented neutral
//! values, unknown ages clamp to the tabulated range, and times past a
//! ladder's final rung land on the ladder floor.

use std::sync::OnceLock;

use racegrade_core::models::{AbilityLevel, Distance, Gender};

mod ability;
mod age_factors;
mod benchmarks;
mod percentiles;

/// Youngest age with a tabulated factor; younger athletes clamp up to it.
pub const MIN_TABULATED_AGE: u32 = 30;
/// Oldest age with a tabulated factor; older athletes clamp down to it.
pub const MAX_TABULATED_AGE: u32 = 100;

/// Factor applied when the distance has no factor table.
const NEUTRAL_FACTOR: f64 = 1.0;

/// Weight of the 10K factor in the blended 10-mile table.
const TEN_MILES_SHORT_WEIGHT: f64 = 0.4;
/// Weight of the half-marathon factor in the blended 10-mile table.
const TEN_MILES_LONG_WEIGHT: f64 = 0.6;

/// Slowest qualifying time for each tier above beginner. Anything slower
/// than `novice` classifies as beginner, so that tier needs no bound.
struct TierBounds {
    elite: u32,
    advanced: u32,
    intermediate: u32,
    novice: u32,
}

/// Average finish times for one distance, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkSet {
    /// Global average across all runners.
    pub global: u32,
    /// Global average for male runners.
    pub global_male: u32,
    /// Global average for female runners.
    pub global_female: u32,
    /// UK average across all runners.
    pub uk: u32,
    /// UK average for male runners.
    pub uk_male: u32,
    /// UK average for female runners.
    pub uk_female: u32,
}

struct TenMilesFactors {
    male: [f64; age_factors::AGE_SPAN],
    female: [f64; age_factors::AGE_SPAN],
}

static TEN_MILES_FACTORS: OnceLock<TenMilesFactors> = OnceLock::new();

/// The 10-mile factor is 40% of the 10K factor plus 60% of the half-marathon
/// factor at the same age, built once and reused for every lookup.
fn ten_miles_factors() -> &'static TenMilesFactors {
    TEN_MILES_FACTORS.get_or_init(|| TenMilesFactors {
        male: blend(&age_factors::MALE_TEN_K, &age_factors::MALE_HALF_MARATHON),
        female: blend(
            &age_factors::FEMALE_TEN_K,
            &age_factors::FEMALE_HALF_MARATHON,
        ),
    })
}

fn blend(
    ten_k: &[f64; age_factors::AGE_SPAN],
    half: &[f64; age_factors::AGE_SPAN],
) -> [f64; age_factors::AGE_SPAN] {
    let mut blended = [0.0; age_factors::AGE_SPAN];
    for (idx, slot) in blended.iter_mut().enumerate() {
        *slot = ten_k[idx].mul_add(TEN_MILES_SHORT_WEIGHT, TEN_MILES_LONG_WEIGHT * half[idx]);
    }
    blended
}

/// Age-grading factor for the given age, distance, and gender.
///
/// Ages outside the tabulated 30-100 range clamp to the nearest tabulated
/// age. Distances without a factor table return a neutral `1.0`.
#[must_use]
pub fn age_grade_factor(age: u32, distance: &Distance, gender: Gender) -> f64 {
    let idx = (age.clamp(MIN_TABULATED_AGE, MAX_TABULATED_AGE) - MIN_TABULATED_AGE) as usize;
    match (distance, gender) {
        (Distance::FiveK, Gender::Male) => age_factors::MALE_FIVE_K[idx],
        (Distance::FiveK, Gender::Female) => age_factors::FEMALE_FIVE_K[idx],
        (Distance::TenK, Gender::Male) => age_factors::MALE_TEN_K[idx],
        (Distance::TenK, Gender::Female) => age_factors::FEMALE_TEN_K[idx],
        (Distance::TenMiles, Gender::Male) => ten_miles_factors().male[idx],
        (Distance::TenMiles, Gender::Female) => ten_miles_factors().female[idx],
        (Distance::HalfMarathon, Gender::Male) => age_factors::MALE_HALF_MARATHON[idx],
        (Distance::HalfMarathon, Gender::Female) => age_factors::FEMALE_HALF_MARATHON[idx],
        (Distance::Marathon, Gender::Male) => age_factors::MALE_MARATHON[idx],
        (Distance::Marathon, Gender::Female) => age_factors::FEMALE_MARATHON[idx],
        (Distance::Other(_), _) => NEUTRAL_FACTOR,
    }
}

/// Open-class reference standard in seconds, or `0` when the distance has no
/// published standard. Callers must treat a zero standard as "no age grade".
#[must_use]
pub const fn open_standard_seconds(distance: &Distance, gender: Gender) -> u32 {
    match (distance, gender) {
        (Distance::FiveK, Gender::Male) => 755,
        (Distance::FiveK, Gender::Female) => 846,
        (Distance::TenK, Gender::Male) => 1571,
        (Distance::TenK, Gender::Female) => 1741,
        (Distance::TenMiles, Gender::Male) => 2736,
        (Distance::TenMiles, Gender::Female) => 3030,
        (Distance::HalfMarathon, Gender::Male) => 3451,
        (Distance::HalfMarathon, Gender::Female) => 3772,
        (Distance::Marathon, Gender::Male) => 7235,
        (Distance::Marathon, Gender::Female) => 7913,
        (Distance::Other(_), _) => 0,
    }
}

/// Percentile of the running population beaten by the given finish time.
///
/// The percentile is the value paired with the first ladder rung the time
/// does not exceed. Times slower than every rung return the ladder floor.
/// Distances without their own ladder fall back to the 5K ladder.
#[must_use]
pub fn percentile_for_time(seconds: u32, distance: &Distance) -> f64 {
    let ladder = ladder_for(distance);
    for &(threshold, percentile) in ladder {
        if seconds <= threshold {
            return percentile;
        }
    }
    ladder[percentiles::LADDER_LEN - 1].1
}

fn ladder_for(distance: &Distance) -> &'static [(u32, f64); percentiles::LADDER_LEN] {
    match distance {
        Distance::FiveK | Distance::Other(_) => &percentiles::FIVE_K,
        Distance::TenK => &percentiles::TEN_K,
        Distance::TenMiles => &percentiles::TEN_MILES,
        Distance::HalfMarathon => &percentiles::HALF_MARATHON,
        Distance::Marathon => &percentiles::MARATHON,
    }
}

/// Ability tier for a finish time, judged against the age bracket nearest to
/// the athlete's age (ties resolve to the lower bracket).
///
/// Distances without band data return [`AbilityLevel::Intermediate`].
#[must_use]
pub fn ability_level(seconds: u32, distance: &Distance, age: u32, gender: Gender) -> AbilityLevel {
    let bands: &[(TierBounds, TierBounds); 6] = match distance {
        Distance::FiveK => &ability::FIVE_K,
        Distance::TenK => &ability::TEN_K,
        Distance::TenMiles => &ability::TEN_MILES,
        Distance::HalfMarathon => &ability::HALF_MARATHON,
        Distance::Marathon => &ability::MARATHON,
        Distance::Other(_) => return AbilityLevel::Intermediate,
    };
    let (male, female) = &bands[nearest_bracket_index(age)];
    let bounds = match gender {
        Gender::Male => male,
        Gender::Female => female,
    };
    classify(seconds, bounds)
}

fn nearest_bracket_index(age: u32) -> usize {
    let mut best = 0;
    let mut best_gap = ability::AGE_BRACKETS[0].abs_diff(age);
    for (idx, bracket) in ability::AGE_BRACKETS.iter().enumerate().skip(1) {
        let gap = bracket.abs_diff(age);
        if gap < best_gap {
            best = idx;
            best_gap = gap;
        }
    }
    best
}

const fn classify(seconds: u32, bounds: &TierBounds) -> AbilityLevel {
    if seconds <= bounds.elite {
        AbilityLevel::Elite
    } else if seconds <= bounds.advanced {
        AbilityLevel::Advanced
    } else if seconds <= bounds.intermediate {
        AbilityLevel::Intermediate
    } else if seconds <= bounds.novice {
        AbilityLevel::Novice
    } else {
        AbilityLevel::Beginner
    }
}

/// Benchmark averages for the distance, or `None` when no benchmark data
/// exists for it.
#[must_use]
pub const fn benchmark_set(distance: &Distance) -> Option<&'static BenchmarkSet> {
    match distance {
        Distance::FiveK => Some(&benchmarks::FIVE_K),
        Distance::TenK => Some(&benchmarks::TEN_K),
        Distance::TenMiles => Some(&benchmarks::TEN_MILES),
        Distance::HalfMarathon => Some(&benchmarks::HALF_MARATHON),
        Distance::Marathon => Some(&benchmarks::MARATHON),
        Distance::Other(_) => None,
    }
}
