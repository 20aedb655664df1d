//! Data models
//!
//! Shared between the scheduling core and whatever renders its output.
//! All IDs are `i64` snowflake ids (see [`crate::util::snowflake_id`]).

pub mod display;
pub mod location;
pub mod opening_hour;

// Re-exports
pub use display::*;
pub use location::*;
pub use opening_hour::*;
