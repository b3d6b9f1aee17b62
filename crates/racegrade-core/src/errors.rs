// ABOUTME: Unified error handling for the racegrade workspace
// ABOUTME: Defines ErrorCode taxonomy, AppError with context, and conversion helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 racegrade contributors

//! # Unified Error Handling
//!
//! Central error types for everything outside the pure analysis path. The
//! engine itself degrades silently (fallback lookups, absent statistics);
//! these types cover the surfaces that genuinely fail: boundary contracts,
//! configuration, and serialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
///
/// Codes are grouped by domain and stable across releases so embedding hosts
/// can match on them rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (1000-1999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 1000,
    /// A required field was missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 1001,
    /// Input had an unexpected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 1002,
    /// A numeric value fell outside its allowed range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 1003,

    // Resources (2000-2999)
    /// The requested athlete or report does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 2000,
    /// The resource exists but cannot be served right now
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable = 2001,

    // External sources (3000-3999)
    /// A results provider returned an error
    #[serde(rename = "PROVIDER_ERROR")]
    ProviderError = 3000,
    /// A results provider refused access to the profile
    #[serde(rename = "PROVIDER_ACCESS_DENIED")]
    ProviderAccessDenied = 3001,
    /// A results provider did not answer in time
    #[serde(rename = "PROVIDER_TIMEOUT")]
    ProviderTimeout = 3002,

    // Configuration (4000-4999)
    /// Configuration failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 4000,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9001,
}

impl ErrorCode {
    /// Whether a caller may reasonably retry the failed operation
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::ResourceUnavailable | Self::ProviderError | Self::ProviderTimeout
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ResourceUnavailable => "RESOURCE_UNAVAILABLE",
            Self::ProviderError => "PROVIDER_ERROR",
            Self::ProviderAccessDenied => "PROVIDER_ACCESS_DENIED",
            Self::ProviderTimeout => "PROVIDER_TIMEOUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
            Self::SerializationError => "SERIALIZATION_ERROR",
        };
        f.write_str(name)
    }
}

/// Additional structured context carried alongside an error
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the resource involved (athlete id, provider name, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Free-form structured details for diagnostics
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

/// The application-level error type for the racegrade workspace
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Stable machine-readable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the identifier of the resource involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Attach structured diagnostic details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input supplied by the caller
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A required field was absent
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("Missing required field: {field}"),
        )
    }

    /// A value fell outside its allowed range
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// The requested resource does not exist
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("Resource not found: {resource}"),
        )
        .with_resource_id(resource)
    }

    /// A results provider returned an error
    #[must_use]
    pub fn provider_error(provider: &str, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ProviderError,
            format!("{provider}: {}", message.into()),
        )
        .with_resource_id(provider)
    }

    /// Configuration failed validation
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, err.to_string()).with_source(err)
    }
}

/// Convenient result alias used across the workspace
pub type AppResult<T> = Result<T, AppError>;
