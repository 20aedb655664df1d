//! Weekly opening schedule for one location
//!
//! # Structure
//!
//! ```text
//! schedule/
//! ├── mod.rs        # Schedule snapshot + DaySlot lookup
//! ├── formatter.rs  # window -> "HH:MM - HH:MM" / "Closed"
//! ├── grouper.rs    # window set -> ordered display rows
//! └── builder.rs    # recurrence rules -> window set
//! ```
//!
//! A [`Schedule`] is an immutable snapshot. Edits go through
//! [`Schedule::with_update`], which hands back a new snapshot.

pub mod builder;
pub mod formatter;
pub mod grouper;

pub use builder::{RecurrenceRule, ScheduleBuilder};
pub use formatter::{format_hours, format_time};
pub use grouper::{display_rows, display_schedule};

use chrono::Weekday;
use shared::error::{AppError, AppResult};
use shared::models::{Location, OpeningWindow, OpeningWindowUpdate, ServiceCategory};

/// Result of looking up one weekday for one category
///
/// Keeps "nothing configured" apart from "configured as closed". Both render
/// as closed, but only a present window can take part in weekday merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySlot<'a> {
    Present(&'a OpeningWindow),
    Absent,
}

impl<'a> DaySlot<'a> {
    pub fn window(&self) -> Option<&'a OpeningWindow> {
        match self {
            DaySlot::Present(window) => Some(window),
            DaySlot::Absent => None,
        }
    }

    /// Absent days count as closed
    pub fn is_closed(&self) -> bool {
        self.window().is_none_or(|w| w.is_closed)
    }
}

/// All opening windows of a single location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schedule {
    location_id: i64,
    windows: Vec<OpeningWindow>,
}

impl Schedule {
    /// Wrap an already-loaded window set
    ///
    /// The caller is trusted to have filtered by location.
    pub fn new(location_id: i64, windows: Vec<OpeningWindow>) -> Self {
        Self {
            location_id,
            windows,
        }
    }

    pub fn from_location(location: &Location) -> Self {
        Self::new(location.id, location.opening_hours.clone())
    }

    pub fn location_id(&self) -> i64 {
        self.location_id
    }

    /// Windows in the order they were supplied
    pub fn windows(&self) -> &[OpeningWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Windows for one category, input order preserved
    pub fn for_category(
        &self,
        category: ServiceCategory,
    ) -> impl Iterator<Item = &OpeningWindow> + '_ {
        self.windows.iter().filter(move |w| w.category == category)
    }

    /// Categories with at least one window, in [`ServiceCategory::ALL`] order
    pub fn categories(&self) -> Vec<ServiceCategory> {
        ServiceCategory::ALL
            .into_iter()
            .filter(|c| self.windows.iter().any(|w| w.category == *c))
            .collect()
    }

    /// First window for `(category, day)`; later duplicates are ignored
    pub fn lookup(&self, category: ServiceCategory, day: Weekday) -> DaySlot<'_> {
        self.for_category(category)
            .find(|w| w.day == Some(day))
            .map_or(DaySlot::Absent, DaySlot::Present)
    }

    /// Holiday windows (no weekday) for one category, input order preserved
    pub fn holidays(
        &self,
        category: ServiceCategory,
    ) -> impl Iterator<Item = &OpeningWindow> + '_ {
        self.for_category(category).filter(|w| w.is_holiday())
    }

    /// New snapshot with window `id` edited; `self` is left as it was
    pub fn with_update(&self, id: i64, update: &OpeningWindowUpdate) -> AppResult<Schedule> {
        let mut next = self.clone();
        let window = next
            .windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| AppError::window_not_found(id))?;
        update.apply_to(window);

        tracing::debug!(
            location_id = self.location_id,
            window_id = id,
            category = ?window.category,
            day = ?window.day,
            "Opening window updated"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shared::error::ErrorCode;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn window(
        id: i64,
        category: ServiceCategory,
        day: Option<Weekday>,
        open: (u32, u32),
        close: (u32, u32),
    ) -> OpeningWindow {
        let mut w = OpeningWindow::open(1, category, day, hm(open.0, open.1), hm(close.0, close.1));
        w.id = id;
        w
    }

    #[test]
    fn test_lookup_absent_vs_closed() {
        let mut closed_mon = OpeningWindow::closed(1, ServiceCategory::Buffet, Some(Weekday::Mon));
        closed_mon.id = 1;
        let schedule = Schedule::new(1, vec![closed_mon.clone()]);

        let mon = schedule.lookup(ServiceCategory::Buffet, Weekday::Mon);
        assert_eq!(mon, DaySlot::Present(&closed_mon));
        assert!(mon.is_closed());

        let tue = schedule.lookup(ServiceCategory::Buffet, Weekday::Tue);
        assert_eq!(tue, DaySlot::Absent);
        assert!(tue.is_closed());
        assert!(tue.window().is_none());
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let first = window(1, ServiceCategory::DineIn, Some(Weekday::Fri), (8, 0), (22, 0));
        let second = window(2, ServiceCategory::DineIn, Some(Weekday::Fri), (9, 0), (23, 0));
        let schedule = Schedule::new(1, vec![first, second]);

        let slot = schedule.lookup(ServiceCategory::DineIn, Weekday::Fri);
        assert_eq!(slot.window().map(|w| w.id), Some(1));
    }

    #[test]
    fn test_lookup_scoped_to_category() {
        let takeaway = window(1, ServiceCategory::Takeaway, Some(Weekday::Mon), (12, 0), (22, 0));
        let schedule = Schedule::new(1, vec![takeaway]);

        assert_eq!(
            schedule.lookup(ServiceCategory::DineIn, Weekday::Mon),
            DaySlot::Absent
        );
        assert!(!schedule.lookup(ServiceCategory::Takeaway, Weekday::Mon).is_closed());
    }

    #[test]
    fn test_categories_in_fixed_order() {
        let schedule = Schedule::new(
            1,
            vec![
                window(1, ServiceCategory::SpecialEvent, None, (14, 0), (2, 0)),
                window(2, ServiceCategory::DineIn, Some(Weekday::Mon), (7, 0), (22, 0)),
            ],
        );
        assert_eq!(
            schedule.categories(),
            vec![ServiceCategory::DineIn, ServiceCategory::SpecialEvent]
        );
    }

    #[test]
    fn test_holidays_keep_input_order() {
        let schedule = Schedule::new(
            1,
            vec![
                window(3, ServiceCategory::DineIn, None, (10, 0), (14, 0)),
                window(4, ServiceCategory::DineIn, Some(Weekday::Sun), (8, 0), (22, 0)),
                window(5, ServiceCategory::DineIn, None, (18, 0), (23, 0)),
                window(6, ServiceCategory::Buffet, None, (16, 0), (22, 0)),
            ],
        );
        let ids: Vec<i64> = schedule.holidays(ServiceCategory::DineIn).map(|w| w.id).collect();
        assert_eq!(ids, vec![3, 5]);
    }

    #[test]
    fn test_with_update_returns_new_snapshot() {
        let schedule = Schedule::new(
            1,
            vec![window(9, ServiceCategory::DineIn, Some(Weekday::Sat), (8, 0), (22, 0))],
        );
        let update = OpeningWindowUpdate {
            is_closed: Some(true),
            ..Default::default()
        };

        let next = schedule.with_update(9, &update).unwrap();
        assert!(next.windows()[0].is_closed);
        assert!(!schedule.windows()[0].is_closed);
    }

    #[test]
    fn test_with_update_unknown_window() {
        let schedule = Schedule::new(1, Vec::new());
        let err = schedule
            .with_update(404, &OpeningWindowUpdate::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::WindowNotFound);
    }

    #[test]
    fn test_from_location() {
        let location = Location {
            id: 5,
            name: "Harbour".to_string(),
            opening_hours: vec![window(1, ServiceCategory::DineIn, None, (7, 0), (22, 0))],
            ..Default::default()
        };
        let schedule = Schedule::from_location(&location);
        assert_eq!(schedule.location_id(), 5);
        assert_eq!(schedule.windows().len(), 1);
    }

    #[test]
    fn test_schedule_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schedule>();
    }
}
