// ABOUTME: Tracing subscriber setup for hosts that embed the analysis library
// ABOUTME: Env-driven level and format selection with fallible installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! Structured logging configuration.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! host's job. This module covers hosts that do not have one yet, such as
//! small embedding binaries and integration harnesses. Installation is
//! fallible rather than panicking, so a process that already set a global
//! subscriber gets the conflict reported instead of an abort.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing::info;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Newline-delimited `JSON` events for log collectors
    Json,
    /// Multi-line human-readable output for development
    Pretty,
    /// Single-line output for space-constrained terminals
    Compact,
}

impl LogFormat {
    fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to this crate's events when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Annotate events with source file and line number
    pub include_location: bool,
    /// Emit span open and close events
    pub include_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Build a configuration from `RACEGRADE_LOG_LEVEL`, `LOG_FORMAT`,
    /// `LOG_INCLUDE_LOCATION`, and `LOG_INCLUDE_SPANS`; unset variables keep
    /// their defaults
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            level: env::var("RACEGRADE_LOG_LEVEL").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .map_or(defaults.format, |label| LogFormat::from_label(&label)),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
        }
    }

    /// Install the global tracing subscriber
    ///
    /// An explicit `RUST_LOG` takes precedence over the configured level;
    /// without one, foreign crates are capped at `warn` while this crate
    /// logs at the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error when a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let filter = env::var("RUST_LOG").map_or_else(
            |_| EnvFilter::new(format!("warn,racegrade={}", self.level)),
            EnvFilter::new,
        );

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let events: Box<dyn Layer<Registry> + Send + Sync> = match self.format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_span_events(span_events)
                .with_writer(io::stdout)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_span_events(span_events)
                .with_writer(io::stdout)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(false)
                .with_span_events(span_events)
                .with_writer(io::stdout)
                .boxed(),
        };

        Registry::default()
            .with(events)
            .with(filter)
            .try_init()
            .context("a global tracing subscriber is already installed")?;

        info!(log.level = %self.level, log.format = ?self.format, "logging initialized");
        Ok(())
    }
}

/// Install logging with the default configuration
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Install logging configured from the environment
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
