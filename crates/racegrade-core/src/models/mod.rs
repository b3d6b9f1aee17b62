// ABOUTME: Core data models for the racegrade analysis engine
// ABOUTME: Re-exports Distance, Gender, RaceResult, and the classification vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Data Models
//!
//! Domain types shared across the workspace. Raw fetched records are
//! validated into [`RaceResult`] once, at the fetch boundary; everything
//! downstream works with the validated types only.
//!
//! ## Design Principles
//!
//! - **Source Agnostic**: The same shapes fit parkrun-style histories and
//!   PB-oriented rankings sites
//! - **Degrade Gracefully**: Unknown distances and genders carry defined
//!   fallbacks instead of failing
//! - **Serializable**: Every output type serializes directly to JSON for a
//!   presentation layer

// Domain modules
mod athlete;
mod distance;
mod race;
mod report;

// Athlete domain
pub use athlete::{AgeGroup, AthleteProfile, PersonalBest, DEFAULT_AGE};

// Distances and gender
pub use distance::{Distance, Gender};

// Race records
pub use race::{RaceResult, RawRaceRecord};

// Classification vocabulary
pub use report::{AbilityLevel, AgeGradeCategory, TrendDirection};
