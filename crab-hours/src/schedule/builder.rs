//! Recurrence rules -> opening windows
//!
//! A [`RecurrenceRule`] says "this category is open `open - close` on these
//! weekdays" (plus optional explicitly closed weekdays and holiday hours).
//! [`ScheduleBuilder`] expands a location's rules into windows and always
//! adds exactly one holiday window per category, closed unless a rule gives
//! holiday hours, so every category has a holiday slot to show and edit.

use chrono::{NaiveTime, Weekday};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{OpeningWindow, ServiceCategory, weekday_name};

use super::Schedule;

/// Monday through Sunday
pub const WHOLE_WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Opening hours of the holiday window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayHours {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

/// Uniform hours for one category on a set of weekdays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub category: ServiceCategory,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    /// Weekdays open with `open_time - close_time`
    pub days: Vec<Weekday>,
    /// Weekdays carrying an explicit closed window
    pub closed_days: Vec<Weekday>,
    /// Holiday hours; `None` leaves the holiday window closed
    pub holiday: Option<HolidayHours>,
}

impl RecurrenceRule {
    /// Open on `days` from `open_time` to `close_time`
    pub fn on(
        category: ServiceCategory,
        days: impl IntoIterator<Item = Weekday>,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Self {
        Self {
            category,
            open_time,
            close_time,
            days: days.into_iter().collect(),
            closed_days: Vec::new(),
            holiday: None,
        }
    }

    /// Open every day of the week with the same hours
    pub fn daily(category: ServiceCategory, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self::on(category, WHOLE_WEEK, open_time, close_time)
    }

    /// Add explicit closed windows for `days`
    pub fn closed_on(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.closed_days.extend(days);
        self
    }

    /// Open the holiday window with the given hours
    pub fn with_holiday(mut self, open_time: NaiveTime, close_time: NaiveTime) -> Self {
        self.holiday = Some(HolidayHours {
            open_time,
            close_time,
        });
        self
    }

    /// Structural checks for rules that come from outside the code base
    ///
    /// [`ScheduleBuilder::build`] itself never fails; loaders call this first.
    pub fn validate(&self) -> AppResult<()> {
        if self.days.is_empty() && self.closed_days.is_empty() && self.holiday.is_none() {
            return Err(AppError::new(ErrorCode::EmptyRecurrence)
                .with_detail("category", self.category.as_str()));
        }
        if let Some(day) = self.days.iter().find(|d| self.closed_days.contains(*d)) {
            return Err(AppError::validation(format!(
                "{} is both open and closed for {}",
                weekday_name(*day),
                self.category.as_str()
            ))
            .with_detail("category", self.category.as_str())
            .with_detail("day", weekday_name(*day)));
        }
        Ok(())
    }
}

/// Expands recurrence rules into a location's [`Schedule`]
#[derive(Debug, Clone, Default)]
pub struct ScheduleBuilder {
    location_id: i64,
    rules: Vec<RecurrenceRule>,
}

impl ScheduleBuilder {
    pub fn new(location_id: i64) -> Self {
        Self {
            location_id,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: RecurrenceRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(mut self, rules: impl IntoIterator<Item = RecurrenceRule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Build the window set
    ///
    /// Categories come out in the order their first rule appears. Within a
    /// category: open days, then closed days (rule by rule), then the single
    /// holiday window.
    pub fn build(&self) -> Schedule {
        let mut categories: Vec<ServiceCategory> = Vec::new();
        for rule in &self.rules {
            if !categories.contains(&rule.category) {
                categories.push(rule.category);
            }
        }

        let mut windows = Vec::new();
        for category in categories {
            let rules = self.rules.iter().filter(|r| r.category == category);
            let mut holiday = None;

            for rule in rules {
                windows.extend(rule.days.iter().map(|day| {
                    OpeningWindow::open(
                        self.location_id,
                        category,
                        Some(*day),
                        rule.open_time,
                        rule.close_time,
                    )
                }));
                windows.extend(
                    rule.closed_days
                        .iter()
                        .map(|day| OpeningWindow::closed(self.location_id, category, Some(*day))),
                );
                holiday = holiday.or(rule.holiday);
            }

            windows.push(match holiday {
                Some(hours) => OpeningWindow::open(
                    self.location_id,
                    category,
                    None,
                    hours.open_time,
                    hours.close_time,
                ),
                None => OpeningWindow::closed(self.location_id, category, None),
            });
        }

        // Ids must be unique within one schedule so edits hit one window
        let base_id = shared::util::snowflake_id();
        for (offset, window) in (0_i64..).zip(windows.iter_mut()) {
            window.id = base_id + offset;
        }

        tracing::debug!(
            location_id = self.location_id,
            rules = self.rules.len(),
            windows = windows.len(),
            "Schedule built from recurrence rules"
        );

        Schedule::new(self.location_id, windows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_daily_rule_adds_closed_holiday() {
        let schedule = ScheduleBuilder::new(3)
            .rule(RecurrenceRule::daily(ServiceCategory::DineIn, hm(7, 0), hm(22, 0)))
            .build();

        let windows = schedule.windows();
        assert_eq!(windows.len(), 8);
        assert!(windows[..7].iter().all(|w| !w.is_closed && w.open_time == hm(7, 0)));
        assert!(windows.iter().all(|w| w.location_id == 3));

        let holiday = &windows[7];
        assert!(holiday.is_holiday());
        assert!(holiday.is_closed);
    }

    #[test]
    fn test_one_holiday_per_category() {
        let schedule = ScheduleBuilder::new(1)
            .rule(RecurrenceRule::on(
                ServiceCategory::DineIn,
                [Weekday::Mon, Weekday::Tue, Weekday::Wed],
                hm(10, 0),
                hm(22, 0),
            ))
            .rule(RecurrenceRule::daily(ServiceCategory::Takeaway, hm(12, 0), hm(22, 0)))
            .rule(RecurrenceRule::on(
                ServiceCategory::DineIn,
                [Weekday::Thu, Weekday::Fri, Weekday::Sat, Weekday::Sun],
                hm(8, 0),
                hm(22, 0),
            ))
            .build();

        for category in [ServiceCategory::DineIn, ServiceCategory::Takeaway] {
            assert_eq!(schedule.holidays(category).count(), 1);
        }
        assert_eq!(schedule.for_category(ServiceCategory::DineIn).count(), 8);

        // DineIn windows stay together even though its rules were split
        let first_eight: Vec<_> = schedule.windows()[..8].iter().map(|w| w.category).collect();
        assert!(first_eight.iter().all(|c| *c == ServiceCategory::DineIn));
    }

    #[test]
    fn test_closed_days_and_open_holiday() {
        let rule = RecurrenceRule::on(
            ServiceCategory::SpecialEvent,
            [Weekday::Fri, Weekday::Sat, Weekday::Sun],
            hm(14, 0),
            hm(2, 0),
        )
        .closed_on([Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu])
        .with_holiday(hm(14, 0), hm(2, 0));
        let schedule = ScheduleBuilder::new(1).rule(rule).build();

        let mon = schedule.lookup(ServiceCategory::SpecialEvent, Weekday::Mon);
        assert!(mon.window().is_some());
        assert!(mon.is_closed());

        let holidays: Vec<_> = schedule.holidays(ServiceCategory::SpecialEvent).collect();
        assert_eq!(holidays.len(), 1);
        assert!(!holidays[0].is_closed);
        assert!(holidays[0].spans_midnight());
    }

    #[test]
    fn test_window_ids_unique() {
        let schedule = ScheduleBuilder::new(1)
            .rule(RecurrenceRule::daily(ServiceCategory::DineIn, hm(7, 0), hm(22, 0)))
            .rule(RecurrenceRule::daily(ServiceCategory::Takeaway, hm(12, 0), hm(22, 0)))
            .build();

        let mut ids: Vec<i64> = schedule.windows().iter().map(|w| w.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn test_empty_builder() {
        let schedule = ScheduleBuilder::new(1).build();
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_validate_rejects_empty_rule() {
        let rule = RecurrenceRule::on(ServiceCategory::Buffet, Vec::new(), hm(16, 0), hm(22, 0));
        let err = rule.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyRecurrence);
        assert_eq!(err.details.unwrap().get("category").unwrap(), "BUFFET");
    }

    #[test]
    fn test_validate_rejects_open_and_closed_day() {
        let rule = RecurrenceRule::on(ServiceCategory::Buffet, [Weekday::Fri], hm(16, 0), hm(22, 0))
            .closed_on([Weekday::Fri]);
        let err = rule.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "Friday is both open and closed for BUFFET");
        assert_eq!(err.details.unwrap().get("day").unwrap(), "Friday");
    }

    #[test]
    fn test_validate_accepts_holiday_only_rule() {
        let rule = RecurrenceRule::on(ServiceCategory::Buffet, Vec::new(), hm(0, 0), hm(0, 0))
            .with_holiday(hm(12, 0), hm(15, 0));
        assert!(rule.validate().is_ok());
    }
}
