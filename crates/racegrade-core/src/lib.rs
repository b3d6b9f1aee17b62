// ABOUTME: Core types and shared building blocks for the racegrade workspace
// ABOUTME: Foundation crate with models, error handling, and the race-time codec
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

#![deny(unsafe_code)]

//! # Racegrade Core
//!
//! Foundation crate for the racegrade runner performance analysis engine.
//! It holds the types every other crate agrees on and is designed to change
//! infrequently, keeping incremental workspace builds cheap.
//!
//! ## Modules
//!
//! - **models**: Domain types (`RaceResult`, `Distance`, `Gender`, ability and
//!   age-grade vocabulary, athlete profile shapes)
//! - **errors**: Unified error handling with [`AppError`](errors::AppError) and
//!   [`ErrorCode`](errors::ErrorCode)
//! - **timefmt**: The `MM:SS` / `H:MM:SS` race-time codec

/// Unified error handling with standard error codes
pub mod errors;

/// Core domain models (`RaceResult`, `Distance`, `Gender`, report vocabulary)
pub mod models;

/// Race-time parsing and formatting (`MM:SS` / `H:MM:SS`)
pub mod timefmt;
