//! Time-of-day parsing
//!
//! Catalog files carry opening hours as `HH:MM` strings; they become
//! `NaiveTime` here before anything reaches the scheduling core.

use chrono::NaiveTime;
use shared::serde_helpers::hhmm;

use super::{AppError, AppResult};

/// Parse a `HH:MM` time of day (24-hour clock)
pub fn parse_time(raw: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), hhmm::FORMAT).map_err(|_| AppError::invalid_time(raw))
}
