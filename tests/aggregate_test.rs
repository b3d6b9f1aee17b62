// ABOUTME: Unit tests for multi-distance aggregation
// ABOUTME: Canonical report ordering, percentile and age-grade means, median ability tier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use racegrade::intelligence::{analyze_personal_bests, summarize};
use racegrade::models::{AbilityLevel, AgeGradeCategory, Distance, Gender, PersonalBest};

const EPS: f64 = 1e-9;

fn best(distance: Distance, seconds: u32) -> PersonalBest {
    PersonalBest { distance, seconds }
}

#[test]
fn test_no_personal_bests_yields_no_summary() {
    let (reports, summary) = analyze_personal_bests(&[], 35, Gender::Male);
    assert!(reports.is_empty());
    assert!(summary.is_none());
    assert!(summarize(&[]).is_none());
}

#[test]
fn test_zero_second_bests_are_skipped() {
    let bests = vec![best(Distance::FiveK, 0), best(Distance::TenK, 2400)];
    let (reports, summary) = analyze_personal_bests(&bests, 35, Gender::Male);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].distance, Distance::TenK);
    assert_eq!(summary.unwrap().distance_count, 1);
}

#[test]
fn test_reports_come_back_shortest_first() {
    let bests = vec![
        best(Distance::Marathon, 12_000),
        best(Distance::FiveK, 1400),
        best(Distance::TenK, 3000),
    ];
    let (reports, _) = analyze_personal_bests(&bests, 35, Gender::Male);

    let names: Vec<&str> = reports.iter().map(|r| r.distance_name.as_str()).collect();
    assert_eq!(names, vec!["5K", "10K", "Marathon"]);
}

#[test]
fn test_unknown_distances_sort_last_in_input_order() {
    let bests = vec![
        best(Distance::Other("B Event".to_owned()), 3000),
        best(Distance::FiveK, 1400),
        best(Distance::Other("A Event".to_owned()), 2000),
    ];
    let (reports, _) = analyze_personal_bests(&bests, 35, Gender::Male);

    let names: Vec<&str> = reports.iter().map(|r| r.distance_name.as_str()).collect();
    assert_eq!(names, vec!["5K", "B Event", "A Event"]);
}

#[test]
fn test_median_ability_tier() {
    // At age 30 the male 5K bands are 840 / 1020 / 1200 / 1440, so these
    // times land at elite, intermediate, and beginner; the median of the
    // three is intermediate
    let bests = vec![
        best(Distance::FiveK, 800),
        best(Distance::Other("Fell Race".to_owned()), 9999),
        best(Distance::TenK, 9000),
    ];
    let (_, summary) = analyze_personal_bests(&[bests[0].clone()], 30, Gender::Male);
    assert_eq!(summary.unwrap().ability_level, AbilityLevel::Elite);

    let (_, summary) = analyze_personal_bests(&bests, 30, Gender::Male);
    assert_eq!(summary.unwrap().ability_level, AbilityLevel::Intermediate);
}

#[test]
fn test_even_report_count_takes_upper_middle_tier() {
    // Elite and beginner with no middle ground resolves upward
    let bests = vec![best(Distance::FiveK, 800), best(Distance::TenK, 9000)];
    let (_, summary) = analyze_personal_bests(&bests, 30, Gender::Male);
    assert_eq!(summary.unwrap().ability_level, AbilityLevel::Elite);
}

#[test]
fn test_summary_means_and_categories() {
    let bests = vec![
        best(Distance::FiveK, 900),
        best(Distance::FiveK, 1020),
        best(Distance::FiveK, 1080),
    ];
    let (reports, summary) = analyze_personal_bests(&bests, 30, Gender::Male);
    let summary = summary.unwrap();

    assert_eq!(reports.len(), 3);
    assert_eq!(summary.distance_count, 3);

    // Percentiles 99.9, 99.0, 98.0 average to 98.966..., stored as 99.0
    assert!((summary.mean_percentile - 99.0).abs() < EPS);
    assert_eq!(summary.rating_message, "Outstanding multi-distance performance!");

    // Age grades 83.9, 74.0, 69.9 average to 75.9, regional class
    assert!((summary.mean_age_grade - 75.9).abs() < EPS);
    assert_eq!(summary.age_grade_category, AgeGradeCategory::Regional);
    assert_eq!(summary.ability_level, AbilityLevel::Advanced);
}

#[test]
fn test_ungraded_distances_stay_out_of_the_age_grade_mean() {
    let bests = vec![
        best(Distance::FiveK, 1200),
        best(Distance::Other("Fell Race".to_owned()), 2000),
    ];
    let (_, summary) = analyze_personal_bests(&bests, 30, Gender::Male);
    let summary = summary.unwrap();

    // Only the 5K produced a grade; the unknown distance contributes nothing
    assert!((summary.mean_age_grade - 62.9).abs() < EPS);
    assert_eq!(summary.age_grade_category, AgeGradeCategory::Club);

    // But its percentile still counts: (90.0 + 35.0) / 2
    assert!((summary.mean_percentile - 62.5).abs() < EPS);
    assert_eq!(summary.rating_message, "Solid running at multiple distances!");
}

#[test]
fn test_all_ungraded_reports_zero_sentinel() {
    let bests = vec![best(Distance::Other("Fell Race".to_owned()), 3000)];
    let (_, summary) = analyze_personal_bests(&bests, 35, Gender::Male);
    let summary = summary.unwrap();

    assert!((summary.mean_age_grade - 0.0).abs() < EPS);
    assert_eq!(summary.age_grade_category, AgeGradeCategory::Beginner);
    assert_eq!(summary.ability_level, AbilityLevel::Intermediate);
    assert!((summary.mean_percentile - 10.0).abs() < EPS);
    assert_eq!(summary.rating_message, "Keep training - you're making progress!");
}

#[test]
fn test_overall_message_ladder() {
    // Single-distance summaries make the mean percentile the report percentile
    let cases = [
        (1150, "Excellent across all distances!"),
        (1320, "Strong performances across the board!"),
        (1440, "Solid running at multiple distances!"),
        (1740, "Good foundation across distances!"),
    ];
    for (seconds, expected) in cases {
        let bests = vec![best(Distance::FiveK, seconds)];
        let (_, summary) = analyze_personal_bests(&bests, 30, Gender::Male);
        assert_eq!(summary.unwrap().rating_message, expected, "time {seconds}");
    }
}
