// ABOUTME: Data model re-exports from the racegrade-core crate
// ABOUTME: Preserves crate::models import paths while delegating to core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Data Models
//!
//! Shared vocabulary types: distances, genders, race records, athlete
//! profiles, and the classification enums used in analysis output.
//!
//! This module re-exports from the `racegrade-core` crate so service code
//! and integration tests can reach the types through `racegrade::models`.

// Re-export all public items from racegrade-core models
pub use racegrade_core::models::*;
