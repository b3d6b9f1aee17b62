// ABOUTME: Unit tests for the reference lookup tables
// ABOUTME: Validates age factors, percentile ladders, ability bands, and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use racegrade::intelligence::reference::{
    ability_level, age_grade_factor, benchmark_set, open_standard_seconds, percentile_for_time,
    MAX_TABULATED_AGE, MIN_TABULATED_AGE,
};
use racegrade::models::{AbilityLevel, Distance, Gender};

const EPS: f64 = 1e-9;

#[test]
fn test_age_factor_tabulated_anchors() {
    assert!((age_grade_factor(55, &Distance::FiveK, Gender::Male) - 0.8502).abs() < EPS);
    assert!((age_grade_factor(55, &Distance::FiveK, Gender::Female) - 0.8438).abs() < EPS);
    assert!((age_grade_factor(40, &Distance::Marathon, Gender::Male) - 0.9804).abs() < EPS);
    assert!((age_grade_factor(35, &Distance::TenK, Gender::Male) - 0.9897).abs() < EPS);
}

#[test]
fn test_age_factor_clamps_to_tabulated_range() {
    let floor = age_grade_factor(MIN_TABULATED_AGE, &Distance::FiveK, Gender::Male);
    let ceiling = age_grade_factor(MAX_TABULATED_AGE, &Distance::FiveK, Gender::Male);

    assert!((age_grade_factor(18, &Distance::FiveK, Gender::Male) - floor).abs() < EPS);
    assert!((age_grade_factor(105, &Distance::FiveK, Gender::Male) - ceiling).abs() < EPS);
    assert!((floor - 1.0).abs() < EPS);
    assert!((ceiling - 0.3313).abs() < EPS);
}

#[test]
fn test_age_factor_unknown_distance_is_neutral() {
    let other = Distance::Other("3000SC".to_owned());
    assert!((age_grade_factor(55, &other, Gender::Male) - 1.0).abs() < EPS);
    assert!((age_grade_factor(90, &other, Gender::Female) - 1.0).abs() < EPS);
}

#[test]
fn test_ten_miles_factor_blends_ten_k_and_half() {
    for age in [30, 45, 55, 70, 100] {
        for gender in [Gender::Male, Gender::Female] {
            let ten_k = age_grade_factor(age, &Distance::TenK, gender);
            let half = age_grade_factor(age, &Distance::HalfMarathon, gender);
            let expected = ten_k.mul_add(0.4, 0.6 * half);

            let blended = age_grade_factor(age, &Distance::TenMiles, gender);
            assert!(
                (blended - expected).abs() < f64::EPSILON,
                "10-mile factor at age {age} should blend 10K and half marathon"
            );
        }
    }
}

#[test]
fn test_age_factors_decrease_with_age() {
    let distances = [
        Distance::FiveK,
        Distance::TenK,
        Distance::TenMiles,
        Distance::HalfMarathon,
        Distance::Marathon,
    ];
    for distance in &distances {
        for gender in [Gender::Male, Gender::Female] {
            let mut previous = age_grade_factor(MIN_TABULATED_AGE, distance, gender);
            for age in (MIN_TABULATED_AGE + 1)..=MAX_TABULATED_AGE {
                let factor = age_grade_factor(age, distance, gender);
                assert!(
                    factor <= previous + EPS,
                    "factor must not increase with age ({distance} {gender} at {age})"
                );
                assert!(factor > 0.0);
                previous = factor;
            }
        }
    }
}

#[test]
fn test_open_standards() {
    assert_eq!(open_standard_seconds(&Distance::FiveK, Gender::Male), 755);
    assert_eq!(open_standard_seconds(&Distance::FiveK, Gender::Female), 846);
    assert_eq!(
        open_standard_seconds(&Distance::Marathon, Gender::Male),
        7235
    );
    assert_eq!(
        open_standard_seconds(&Distance::Marathon, Gender::Female),
        7913
    );
    assert_eq!(
        open_standard_seconds(&Distance::Other("20 Miles".to_owned()), Gender::Male),
        0
    );
}

#[test]
fn test_percentile_rung_boundaries_are_inclusive() {
    // 19:00 lands exactly on the top 5K rung
    assert!((percentile_for_time(1140, &Distance::FiveK) - 95.0).abs() < EPS);
    assert!((percentile_for_time(1141, &Distance::FiveK) - 90.0).abs() < EPS);
    assert!((percentile_for_time(900, &Distance::FiveK) - 99.9).abs() < EPS);
}

#[test]
fn test_percentile_beyond_ladder_returns_floor() {
    // Slower than the last rung keeps the ladder floor, it never drops further
    assert!((percentile_for_time(3600, &Distance::FiveK) - 3.0).abs() < EPS);
    assert!((percentile_for_time(3601, &Distance::FiveK) - 3.0).abs() < EPS);
    assert!((percentile_for_time(u32::MAX, &Distance::FiveK) - 3.0).abs() < EPS);
}

#[test]
fn test_percentile_unknown_distance_uses_five_k_ladder() {
    let other = Distance::Other("3000SC".to_owned());
    assert!(
        (percentile_for_time(1200, &other) - percentile_for_time(1200, &Distance::FiveK)).abs()
            < EPS
    );
}

#[test]
fn test_ability_band_boundaries_are_inclusive() {
    // Male 5K at age 30: elite up to 14:00, advanced up to 17:00
    assert_eq!(
        ability_level(840, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Elite
    );
    assert_eq!(
        ability_level(841, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Advanced
    );
    assert_eq!(
        ability_level(1020, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Advanced
    );
    assert_eq!(
        ability_level(1200, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Intermediate
    );
    assert_eq!(
        ability_level(1440, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Novice
    );
    assert_eq!(
        ability_level(1441, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Beginner
    );
    assert_eq!(
        ability_level(9999, &Distance::FiveK, 30, Gender::Male),
        AbilityLevel::Beginner
    );
}

#[test]
fn test_ability_age_ties_resolve_to_lower_bracket() {
    // Age 45 sits exactly between the 40 and 50 brackets; 15:00 is over the
    // 40-bracket elite bound (14:55) but inside the 50-bracket one (16:10),
    // so the lower bracket must win the tie
    assert_eq!(
        ability_level(900, &Distance::FiveK, 45, Gender::Male),
        AbilityLevel::Advanced
    );
    assert_eq!(
        ability_level(900, &Distance::FiveK, 50, Gender::Male),
        AbilityLevel::Elite
    );
}

#[test]
fn test_ability_ages_outside_brackets_use_nearest() {
    // Brackets stop at 60; everyone older is judged at 60
    assert_eq!(
        ability_level(1075, &Distance::FiveK, 82, Gender::Male),
        ability_level(1075, &Distance::FiveK, 60, Gender::Male),
    );
    // And everyone younger than 20 is judged at 20
    assert_eq!(
        ability_level(850, &Distance::FiveK, 16, Gender::Male),
        ability_level(850, &Distance::FiveK, 20, Gender::Male),
    );
}

#[test]
fn test_ability_unknown_distance_is_intermediate() {
    let other = Distance::Other("3000SC".to_owned());
    assert_eq!(
        ability_level(1, &other, 30, Gender::Male),
        AbilityLevel::Intermediate
    );
    assert_eq!(
        ability_level(99_999, &other, 30, Gender::Female),
        AbilityLevel::Intermediate
    );
}

#[test]
fn test_benchmark_sets() {
    let five_k = benchmark_set(&Distance::FiveK).unwrap();
    assert_eq!(five_k.global, 2069);
    assert_eq!(five_k.uk, 1931);
    assert_eq!(five_k.global_male, 1988);
    assert_eq!(five_k.global_female, 2150);

    assert!(benchmark_set(&Distance::Marathon).is_some());
    assert!(benchmark_set(&Distance::Other("3000SC".to_owned())).is_none());
}
