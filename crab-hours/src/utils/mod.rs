//! Utilities
//!
//! - [`AppError`] / [`AppResult`] (from shared::error)
//! - logging setup
//! - `HH:MM` parsing

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
