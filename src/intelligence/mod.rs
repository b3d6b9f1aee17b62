// ABOUTME: Intelligence module re-exports from the racegrade-intelligence crate
// ABOUTME: Preserves crate::intelligence import paths while delegating to the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Intelligence Module
//!
//! The performance analysis engine: reference tables, comparative scoring,
//! history statistics, and multi-distance aggregation.
//!
//! This module re-exports from the `racegrade-intelligence` crate so service
//! code and integration tests can reach the engine through
//! `racegrade::intelligence`.

// Re-export all public items from racegrade-intelligence
pub use racegrade_intelligence::*;

// Re-export submodules for path-based access
// (e.g., crate::intelligence::reference::open_standard_seconds)
pub use racegrade_intelligence::{aggregate, analysis_config, reference, scoring, statistics};
