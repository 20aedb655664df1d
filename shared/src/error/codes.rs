//! Unified error codes for the hours workspace
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Location errors
//! - 2xxx: Schedule errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive any
/// serialization boundary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Location ====================
    /// Location not found
    LocationNotFound = 1001,
    /// Two locations share the same id
    DuplicateLocation = 1002,

    // ==================== 2xxx: Schedule ====================
    /// Opening window not found
    WindowNotFound = 2001,
    /// Time of day is not a valid HH:MM value
    InvalidTimeFormat = 2002,
    /// Recurrence rule names no weekday
    EmptyRecurrence = 2003,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field missing",

            // Location
            ErrorCode::LocationNotFound => "Location not found",
            ErrorCode::DuplicateLocation => "Duplicate location id",

            // Schedule
            ErrorCode::WindowNotFound => "Opening window not found",
            ErrorCode::InvalidTimeFormat => "Invalid time of day (expected HH:MM)",
            ErrorCode::EmptyRecurrence => "Recurrence rule has no weekdays",

            // System
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Location
            1001 => Ok(ErrorCode::LocationNotFound),
            1002 => Ok(ErrorCode::DuplicateLocation),

            // Schedule
            2001 => Ok(ErrorCode::WindowNotFound),
            2002 => Ok(ErrorCode::InvalidTimeFormat),
            2003 => Ok(ErrorCode::EmptyRecurrence),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
