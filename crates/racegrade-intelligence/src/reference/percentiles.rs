// ABOUTME: Empirical percentile threshold ladders per race distance
// ABOUTME: Ascending time thresholds paired with descending population percentiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Percentile step ladders: the percentile of a time is the entry for the
//! first threshold the time does not exceed; past the last rung the ladder
//! floor applies.

/// Rungs per ladder.
pub(super) const LADDER_LEN: usize = 22;

pub(super) static FIVE_K: [(u32, f64); LADDER_LEN] = [
    (900, 99.9), (1020, 99.0), (1080, 98.0), (1140, 95.0),
    (1200, 90.0), (1260, 85.0), (1320, 80.0), (1380, 75.0),
    (1440, 70.0), (1500, 65.0), (1560, 60.0), (1680, 55.0),
    (1740, 50.0), (1800, 47.0), (1920, 42.0), (2100, 35.0),
    (2280, 28.0), (2400, 23.0), (2700, 15.0), (3000, 10.0),
    (3300, 6.0), (3600, 3.0),
];

pub(super) static TEN_K: [(u32, f64); LADDER_LEN] = [
    (1920, 99.9), (2160, 99.0), (2280, 98.0), (2400, 95.0),
    (2520, 90.0), (2700, 85.0), (2880, 80.0), (3000, 75.0),
    (3120, 70.0), (3240, 65.0), (3360, 60.0), (3480, 55.0),
    (3600, 50.0), (3720, 47.0), (3900, 42.0), (4200, 35.0),
    (4500, 28.0), (4800, 23.0), (5400, 15.0), (6000, 10.0),
    (6600, 6.0), (7200, 3.0),
];

pub(super) static TEN_MILES: [(u32, f64); LADDER_LEN] = [
    (3300, 99.9), (3660, 99.0), (3900, 98.0), (4140, 95.0),
    (4380, 90.0), (4680, 85.0), (4980, 80.0), (5220, 75.0),
    (5460, 70.0), (5700, 65.0), (5940, 60.0), (6180, 55.0),
    (6420, 50.0), (6660, 47.0), (6960, 42.0), (7500, 35.0),
    (8100, 28.0), (8640, 23.0), (9600, 15.0), (10_800, 10.0),
    (12_000, 6.0), (13_500, 3.0),
];

pub(super) static HALF_MARATHON: [(u32, f64); LADDER_LEN] = [
    (4200, 99.9), (4680, 99.0), (4920, 98.0), (5220, 95.0),
    (5520, 90.0), (5880, 85.0), (6240, 80.0), (6540, 75.0),
    (6840, 70.0), (7140, 65.0), (7440, 60.0), (7740, 55.0),
    (8040, 50.0), (8400, 47.0), (8820, 42.0), (9600, 35.0),
    (10_200, 28.0), (10_800, 23.0), (12_000, 15.0), (13_200, 10.0),
    (14_400, 6.0), (16_200, 3.0),
];

pub(super) static MARATHON: [(u32, f64); LADDER_LEN] = [
    (8400, 99.9), (9300, 99.0), (9900, 98.0), (10_500, 95.0),
    (11_100, 90.0), (11_820, 85.0), (12_540, 80.0), (13_200, 75.0),
    (13_860, 70.0), (14_400, 65.0), (14_940, 60.0), (15_480, 55.0),
    (16_020, 50.0), (16_680, 47.0), (17_400, 42.0), (18_600, 35.0),
    (19_800, 28.0), (21_000, 23.0), (23_400, 15.0), (25_200, 10.0),
    (27_000, 6.0), (30_600, 3.0),
];
