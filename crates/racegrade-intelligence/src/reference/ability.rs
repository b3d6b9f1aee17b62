// ABOUTME: Ability-level time bands per distance, age bracket, and gender
// ABOUTME: Four tier boundaries in seconds; times past the novice bound are beginner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Ability band data at age brackets 20/30/40/50/55/60. Boundaries are the
//! slowest time that still qualifies for the tier.

use super::TierBounds;

/// Age brackets shared by every band table, ascending.
pub(super) const AGE_BRACKETS: [u32; 6] = [20, 30, 40, 50, 55, 60];

/// (male, female) bounds per age bracket for 5K.
pub(super) static FIVE_K: [(TierBounds, TierBounds); 6] = [
    (
        TierBounds { elite: 840, advanced: 1020, intermediate: 1200, novice: 1440 },
        TierBounds { elite: 960, advanced: 1140, intermediate: 1350, novice: 1620 },
    ),
    (
        TierBounds { elite: 840, advanced: 1020, intermediate: 1200, novice: 1440 },
        TierBounds { elite: 960, advanced: 1140, intermediate: 1350, novice: 1620 },
    ),
    (
        TierBounds { elite: 895, advanced: 1085, intermediate: 1275, novice: 1530 },
        TierBounds { elite: 1020, advanced: 1210, intermediate: 1435, novice: 1720 },
    ),
    (
        TierBounds { elite: 970, advanced: 1175, intermediate: 1380, novice: 1656 },
        TierBounds { elite: 1105, advanced: 1315, intermediate: 1555, novice: 1870 },
    ),
    (
        TierBounds { elite: 1020, advanced: 1235, intermediate: 1450, novice: 1740 },
        TierBounds { elite: 1160, advanced: 1380, intermediate: 1635, novice: 1960 },
    ),
    (
        TierBounds { elite: 1075, advanced: 1300, intermediate: 1530, novice: 1835 },
        TierBounds { elite: 1225, advanced: 1460, intermediate: 1725, novice: 2070 },
    ),
];

/// (male, female) bounds per age bracket for 10K.
pub(super) static TEN_K: [(TierBounds, TierBounds); 6] = [
    (
        TierBounds { elite: 1800, advanced: 2160, intermediate: 2520, novice: 3000 },
        TierBounds { elite: 2040, advanced: 2430, intermediate: 2850, novice: 3400 },
    ),
    (
        TierBounds { elite: 1800, advanced: 2160, intermediate: 2520, novice: 3000 },
        TierBounds { elite: 2040, advanced: 2430, intermediate: 2850, novice: 3400 },
    ),
    (
        TierBounds { elite: 1920, advanced: 2300, intermediate: 2680, novice: 3195 },
        TierBounds { elite: 2170, advanced: 2590, intermediate: 3035, novice: 3620 },
    ),
    (
        TierBounds { elite: 2070, advanced: 2485, intermediate: 2900, novice: 3450 },
        TierBounds { elite: 2345, advanced: 2795, intermediate: 3280, novice: 3910 },
    ),
    (
        TierBounds { elite: 2175, advanced: 2610, intermediate: 3045, novice: 3625 },
        TierBounds { elite: 2465, advanced: 2935, intermediate: 3445, novice: 4110 },
    ),
    (
        TierBounds { elite: 2295, advanced: 2755, intermediate: 3210, novice: 3825 },
        TierBounds { elite: 2600, advanced: 3100, intermediate: 3635, novice: 4335 },
    ),
];

/// (male, female) bounds per age bracket for 10 Miles.
pub(super) static TEN_MILES: [(TierBounds, TierBounds); 6] = [
    (
        TierBounds { elite: 3300, advanced: 3840, intermediate: 4440, novice: 5100 },
        TierBounds { elite: 3725, advanced: 4335, intermediate: 5010, novice: 5760 },
    ),
    (
        TierBounds { elite: 3300, advanced: 3840, intermediate: 4440, novice: 5100 },
        TierBounds { elite: 3725, advanced: 4335, intermediate: 5010, novice: 5760 },
    ),
    (
        TierBounds { elite: 3515, advanced: 4090, intermediate: 4725, novice: 5430 },
        TierBounds { elite: 3970, advanced: 4620, intermediate: 5335, novice: 6135 },
    ),
    (
        TierBounds { elite: 3795, advanced: 4415, intermediate: 5100, novice: 5865 },
        TierBounds { elite: 4290, advanced: 4985, intermediate: 5760, novice: 6625 },
    ),
    (
        TierBounds { elite: 3985, advanced: 4635, intermediate: 5355, novice: 6155 },
        TierBounds { elite: 4505, advanced: 5235, intermediate: 6050, novice: 6955 },
    ),
    (
        TierBounds { elite: 4205, advanced: 4895, intermediate: 5655, novice: 6500 },
        TierBounds { elite: 4755, advanced: 5530, intermediate: 6390, novice: 7345 },
    ),
];

/// (male, female) bounds per age bracket for Half Marathon.
pub(super) static HALF_MARATHON: [(TierBounds, TierBounds); 6] = [
    (
        TierBounds { elite: 4200, advanced: 4920, intermediate: 5700, novice: 6600 },
        TierBounds { elite: 4740, advanced: 5520, intermediate: 6420, novice: 7440 },
    ),
    (
        TierBounds { elite: 4200, advanced: 4920, intermediate: 5700, novice: 6600 },
        TierBounds { elite: 4740, advanced: 5520, intermediate: 6420, novice: 7440 },
    ),
    (
        TierBounds { elite: 4475, advanced: 5240, intermediate: 6070, novice: 7030 },
        TierBounds { elite: 5050, advanced: 5880, intermediate: 6840, novice: 7925 },
    ),
    (
        TierBounds { elite: 4620, advanced: 5660, intermediate: 6555, novice: 7590 },
        TierBounds { elite: 5220, advanced: 6350, intermediate: 7390, novice: 8565 },
    ),
    (
        TierBounds { elite: 4710, advanced: 5100, intermediate: 6880, novice: 7970 },
        TierBounds { elite: 5325, advanced: 5760, intermediate: 7765, novice: 9000 },
    ),
    (
        TierBounds { elite: 4970, advanced: 5385, intermediate: 7265, novice: 8415 },
        TierBounds { elite: 5625, advanced: 6090, intermediate: 8200, novice: 9500 },
    ),
];

/// (male, female) bounds per age bracket for Marathon.
pub(super) static MARATHON: [(TierBounds, TierBounds); 6] = [
    (
        TierBounds { elite: 8100, advanced: 9900, intermediate: 11_700, novice: 13_500 },
        TierBounds { elite: 9180, advanced: 11_220, intermediate: 13_260, novice: 15_300 },
    ),
    (
        TierBounds { elite: 8100, advanced: 9900, intermediate: 11_700, novice: 13_500 },
        TierBounds { elite: 9180, advanced: 11_220, intermediate: 13_260, novice: 15_300 },
    ),
    (
        TierBounds { elite: 8630, advanced: 10_545, intermediate: 12_465, novice: 14_385 },
        TierBounds { elite: 9780, advanced: 11_955, intermediate: 14_120, novice: 16_295 },
    ),
    (
        TierBounds { elite: 9315, advanced: 11_385, intermediate: 13_455, novice: 15_525 },
        TierBounds { elite: 10_560, advanced: 12_905, intermediate: 15_250, novice: 17_595 },
    ),
    (
        TierBounds { elite: 9780, advanced: 11_950, intermediate: 14_125, novice: 16_300 },
        TierBounds { elite: 11_085, advanced: 13_550, intermediate: 16_010, novice: 18_475 },
    ),
    (
        TierBounds { elite: 10_330, advanced: 12_620, intermediate: 14_915, novice: 17_215 },
        TierBounds { elite: 11_710, advanced: 14_315, intermediate: 16_910, novice: 19_510 },
    ),
];
