// ABOUTME: Population benchmark average times per distance, overall and by gender
// ABOUTME: Global and UK averages used for side-by-side time comparisons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Benchmark averages in seconds.

use super::BenchmarkSet;

/// Averages for 5K.
pub(super) static FIVE_K: BenchmarkSet = BenchmarkSet {
    global: 2069,
    global_male: 1988,
    global_female: 2150,
    uk: 1931,
    uk_male: 1829,
    uk_female: 2032,
};

/// Averages for 10K.
pub(super) static TEN_K: BenchmarkSet = BenchmarkSet {
    global: 2983,
    global_male: 2803,
    global_female: 3253,
    uk: 2880,
    uk_male: 2700,
    uk_female: 3120,
};

/// Averages for 10 Miles.
pub(super) static TEN_MILES: BenchmarkSet = BenchmarkSet {
    global: 5100,
    global_male: 4800,
    global_female: 5520,
    uk: 4920,
    uk_male: 4680,
    uk_female: 5400,
};

/// Averages for Half Marathon.
pub(super) static HALF_MARATHON: BenchmarkSet = BenchmarkSet {
    global: 6615,
    global_male: 6213,
    global_female: 7212,
    uk: 6480,
    uk_male: 6060,
    uk_female: 7080,
};

/// Averages for Marathon.
pub(super) static MARATHON: BenchmarkSet = BenchmarkSet {
    global: 13_700,
    global_male: 12_896,
    global_female: 14_889,
    uk: 13_500,
    uk_male: 12_600,
    uk_female: 14_700,
};
