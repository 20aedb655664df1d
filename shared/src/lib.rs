//! Shared types for the opening-hours workspace
//!
//! Data model for locations and their weekly opening windows, the display
//! rows produced from them, and the common error type.

pub mod error;
pub mod models;
pub mod serde_helpers;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{
    CategoryRows, DisplayRow, Location, OpeningWindow, OpeningWindowUpdate, ServiceCategory,
};
