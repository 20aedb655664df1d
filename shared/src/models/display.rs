//! Display rows for rendered opening hours

use serde::{Deserialize, Serialize};

use super::opening_hour::ServiceCategory;

/// Label used for Monday through Thursday when they share hours
pub const MONDAY_THROUGH_THURSDAY_LABEL: &str = "Monday - Thursday";
/// Label used for every holiday row
pub const HOLIDAYS_LABEL: &str = "Holidays";
/// Hours text for closed or unconfigured days
pub const CLOSED_LABEL: &str = "Closed";

/// One rendered line of a weekly schedule
///
/// Rows carry no identity beyond their position; they are rebuilt on every
/// render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub label: String,
    pub hours_text: String,
    pub is_closed: bool,
}

impl std::fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.hours_text)
    }
}

/// Rendered rows for one service category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRows {
    pub category: ServiceCategory,
    pub rows: Vec<DisplayRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_row_text() {
        let row = DisplayRow {
            label: MONDAY_THROUGH_THURSDAY_LABEL.to_string(),
            hours_text: "07:00 - 22:00".to_string(),
            is_closed: false,
        };
        assert_eq!(row.to_string(), "Monday - Thursday: 07:00 - 22:00");
    }

    #[test]
    fn test_category_rows_serialize() {
        let rows = CategoryRows {
            category: ServiceCategory::Buffet,
            rows: vec![DisplayRow {
                label: HOLIDAYS_LABEL.to_string(),
                hours_text: CLOSED_LABEL.to_string(),
                is_closed: true,
            }],
        };
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json["category"], "BUFFET");
        assert_eq!(json["rows"][0]["label"], "Holidays");
        assert_eq!(json["rows"][0]["is_closed"], true);
    }
}
