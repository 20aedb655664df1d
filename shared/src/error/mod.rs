//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Location errors
//! - 2xxx: Schedule errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::LocationNotFound);
//!
//! let err = AppError::invalid_time("7pm").with_detail("field", "open_time");
//! assert_eq!(err.code, ErrorCode::InvalidTimeFormat);
//! ```
//!
//! The scheduling core itself never returns these: missing data renders as
//! "Closed". Errors only come from loading configuration and catalogs, and
//! from editing a snapshot.

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
