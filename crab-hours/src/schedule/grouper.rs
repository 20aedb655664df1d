//! Display grouping
//!
//! Row order for one category is fixed:
//!
//! 1. Monday - Thursday as a single row when all four days are configured
//!    with identical hours, otherwise one row per day
//! 2. Friday, Saturday, Sunday, always one row each
//! 3. One "Holidays" row per holiday window, in input order, never merged
//!
//! Only Monday - Thursday ever merges. This is a product display rule, not a
//! general run-length compression of the week.

use chrono::Weekday;
use shared::models::{
    CategoryRows, DisplayRow, HOLIDAYS_LABEL, MONDAY_THROUGH_THURSDAY_LABEL, OpeningWindow,
    ServiceCategory, weekday_name,
};

use super::formatter::format_hours;
use super::{DaySlot, Schedule};

const MERGEABLE_DAYS: [Weekday; 4] = [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu];
const WEEKEND_DAYS: [Weekday; 3] = [Weekday::Fri, Weekday::Sat, Weekday::Sun];

/// Ordered display rows for one category of a schedule
pub fn display_rows(schedule: &Schedule, category: ServiceCategory) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(MERGEABLE_DAYS.len() + WEEKEND_DAYS.len() + 1);

    push_weekday_rows(&mut rows, schedule, category);
    push_weekend_rows(&mut rows, schedule, category);
    push_holiday_rows(&mut rows, schedule, category);

    rows
}

/// Rows for every category present in the schedule, in category order
pub fn display_schedule(schedule: &Schedule) -> Vec<CategoryRows> {
    schedule
        .categories()
        .into_iter()
        .map(|category| CategoryRows {
            category,
            rows: display_rows(schedule, category),
        })
        .collect()
}

fn push_weekday_rows(rows: &mut Vec<DisplayRow>, schedule: &Schedule, category: ServiceCategory) {
    let slots = MERGEABLE_DAYS.map(|day| schedule.lookup(category, day));

    match shared_window(&slots) {
        Some(window) => rows.push(row(MONDAY_THROUGH_THURSDAY_LABEL, Some(window))),
        None => {
            tracing::trace!(
                location_id = schedule.location_id(),
                ?category,
                "Monday - Thursday not mergeable, itemizing"
            );
            rows.extend(
                MERGEABLE_DAYS
                    .iter()
                    .zip(slots)
                    .map(|(day, slot)| row(weekday_name(*day), slot.window())),
            );
        }
    }
}

fn push_weekend_rows(rows: &mut Vec<DisplayRow>, schedule: &Schedule, category: ServiceCategory) {
    for day in WEEKEND_DAYS {
        let slot = schedule.lookup(category, day);
        rows.push(row(weekday_name(day), slot.window()));
    }
}

fn push_holiday_rows(rows: &mut Vec<DisplayRow>, schedule: &Schedule, category: ServiceCategory) {
    rows.extend(
        schedule
            .holidays(category)
            .map(|holiday| row(HOLIDAYS_LABEL, Some(holiday))),
    );
}

/// The window all four days share, if every day is present and identical
///
/// An absent day blocks merging, so partial data is never summarised into a
/// misleading aggregate.
fn shared_window<'a>(slots: &[DaySlot<'a>]) -> Option<&'a OpeningWindow> {
    let windows = slots
        .iter()
        .map(|slot| slot.window())
        .collect::<Option<Vec<_>>>()?;
    let first = *windows.first()?;

    windows
        .iter()
        .all(|w| w.same_hours(first))
        .then_some(first)
}

fn row(label: &str, window: Option<&OpeningWindow>) -> DisplayRow {
    DisplayRow {
        label: label.to_string(),
        hours_text: format_hours(window),
        is_closed: window.is_none_or(|w| w.is_closed),
    }
}
