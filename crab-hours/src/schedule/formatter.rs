//! Hours text for a single window

use chrono::NaiveTime;
use shared::models::{CLOSED_LABEL, OpeningWindow};
use shared::serde_helpers::hhmm;

/// Render a window as `"HH:MM - HH:MM"`, or the closed label
///
/// Missing and closed windows both give the closed label. Windows that run
/// past midnight are printed as stored (`"14:00 - 02:00"`).
pub fn format_hours(window: Option<&OpeningWindow>) -> String {
    match window {
        Some(w) if !w.is_closed => {
            format!("{} - {}", format_time(w.open_time), format_time(w.close_time))
        }
        _ => CLOSED_LABEL.to_string(),
    }
}

/// Zero-padded 24-hour `HH:MM`
pub fn format_time(time: NaiveTime) -> String {
    time.format(hhmm::FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use shared::models::ServiceCategory;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_open_window() {
        let w = OpeningWindow::open(1, ServiceCategory::DineIn, Some(Weekday::Mon), hm(7, 0), hm(22, 0));
        assert_eq!(format_hours(Some(&w)), "07:00 - 22:00");
    }

    #[test]
    fn test_midnight_spanning_printed_literally() {
        let w = OpeningWindow::open(1, ServiceCategory::SpecialEvent, Some(Weekday::Fri), hm(14, 0), hm(2, 0));
        assert_eq!(format_hours(Some(&w)), "14:00 - 02:00");

        let w = OpeningWindow::open(1, ServiceCategory::SpecialEvent, Some(Weekday::Mon), hm(14, 0), hm(0, 0));
        assert_eq!(format_hours(Some(&w)), "14:00 - 00:00");
    }

    #[test]
    fn test_closed_ignores_times() {
        let mut w = OpeningWindow::open(1, ServiceCategory::Buffet, Some(Weekday::Mon), hm(16, 0), hm(22, 0));
        w.is_closed = true;
        assert_eq!(format_hours(Some(&w)), "Closed");
    }

    #[test]
    fn test_absent_is_closed() {
        assert_eq!(format_hours(None), "Closed");
    }

    #[test]
    fn test_minutes_zero_padded() {
        assert_eq!(format_time(hm(9, 5)), "09:05");
        assert_eq!(format_time(hm(23, 59)), "23:59");
        assert_eq!(format_time(NaiveTime::MIN), "00:00");
    }

    #[test]
    fn test_repeatable() {
        let w = OpeningWindow::open(1, ServiceCategory::Takeaway, None, hm(12, 30), hm(21, 45));
        assert_eq!(format_hours(Some(&w)), format_hours(Some(&w)));
        assert_eq!(format_hours(Some(&w)), "12:30 - 21:45");
    }
}
