//! Application error type

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Carries:
/// - a standardized error code via [`ErrorCode`]
/// - a human-readable message
/// - optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a required field error naming the missing field
    pub fn required_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_message(
            ErrorCode::RequiredField,
            format!("Required field '{}' is missing", field),
        )
        .with_detail("field", field)
    }

    /// Create an invalid format error
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, msg)
    }

    /// Create a location not found error
    pub fn location_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::LocationNotFound,
            format!("Location {} not found", id),
        )
        .with_detail("location_id", id)
    }

    /// Create an opening window not found error
    pub fn window_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::WindowNotFound,
            format!("Opening window {} not found", id),
        )
        .with_detail("window_id", id)
    }

    /// Create an invalid time error for a raw `HH:MM` value
    pub fn invalid_time(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::with_message(
            ErrorCode::InvalidTimeFormat,
            format!("Invalid time of day: '{}'", raw),
        )
        .with_detail("value", raw)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
