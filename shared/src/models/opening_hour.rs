//! Opening Hour Model

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::{hhmm, hhmm_option};
use crate::util::snowflake_id;

/// Service category an opening window applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceCategory {
    DineIn,
    Takeaway,
    Buffet,
    SpecialEvent,
}

impl ServiceCategory {
    /// All categories, in display order
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::DineIn,
        ServiceCategory::Takeaway,
        ServiceCategory::Buffet,
        ServiceCategory::SpecialEvent,
    ];

    /// Wire name, as written in JSON (`DINE_IN`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "DINE_IN",
            Self::Takeaway => "TAKEAWAY",
            Self::Buffet => "BUFFET",
            Self::SpecialEvent => "SPECIAL_EVENT",
        }
    }

    /// Human-facing heading for this category
    pub fn label(&self) -> &'static str {
        match self {
            Self::DineIn => "Restaurant",
            Self::Takeaway => "Takeaway",
            Self::Buffet => "Buffet",
            Self::SpecialEvent => "Special events for groups",
        }
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Full English name of a weekday ("Monday", ...)
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One recurring (or holiday) opening window for a single category
///
/// A window whose `close_time` is not after `open_time` runs past midnight
/// into the next day (14:00 - 02:00). When `is_closed` is set the times carry
/// no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningWindow {
    pub id: i64,
    pub location_id: i64,
    pub category: ServiceCategory,
    /// Weekday this window recurs on; `None` marks the holiday window
    #[serde(default)]
    pub day: Option<Weekday>,
    #[serde(with = "hhmm", default = "midnight")]
    pub open_time: NaiveTime,
    #[serde(with = "hhmm", default = "midnight")]
    pub close_time: NaiveTime,
    #[serde(default)]
    pub is_closed: bool,
}

fn midnight() -> NaiveTime {
    NaiveTime::MIN
}

impl OpeningWindow {
    /// Open window from `open_time` to `close_time`
    pub fn open(
        location_id: i64,
        category: ServiceCategory,
        day: Option<Weekday>,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Self {
        Self {
            id: snowflake_id(),
            location_id,
            category,
            day,
            open_time,
            close_time,
            is_closed: false,
        }
    }

    /// Closed marker; both times sit at 00:00
    pub fn closed(location_id: i64, category: ServiceCategory, day: Option<Weekday>) -> Self {
        Self {
            id: snowflake_id(),
            location_id,
            category,
            day,
            open_time: NaiveTime::MIN,
            close_time: NaiveTime::MIN,
            is_closed: true,
        }
    }

    pub fn is_holiday(&self) -> bool {
        self.day.is_none()
    }

    /// True for an open window that continues into the next calendar day
    pub fn spans_midnight(&self) -> bool {
        !self.is_closed && self.close_time <= self.open_time
    }

    /// Exact comparison of `(open_time, close_time, is_closed)`
    ///
    /// Used when deciding whether weekdays can share one display row.
    pub fn same_hours(&self, other: &OpeningWindow) -> bool {
        self.open_time == other.open_time
            && self.close_time == other.close_time
            && self.is_closed == other.is_closed
    }
}

/// Edit payload for a single opening window
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningWindowUpdate {
    #[serde(with = "hhmm_option", default)]
    pub open_time: Option<NaiveTime>,
    #[serde(with = "hhmm_option", default)]
    pub close_time: Option<NaiveTime>,
    pub is_closed: Option<bool>,
}

impl OpeningWindowUpdate {
    /// Apply the set fields to `window`
    pub fn apply_to(&self, window: &mut OpeningWindow) {
        if let Some(open_time) = self.open_time {
            window.open_time = open_time;
        }
        if let Some(close_time) = self.close_time {
            window.close_time = close_time;
        }
        if let Some(is_closed) = self.is_closed {
            window.is_closed = is_closed;
        }
    }
}
