//! Location catalog
//!
//! The set of locations and the recurrence rules that describe their opening
//! hours. Passed around explicitly (never process-wide state) and loaded
//! either from a JSON file or from the catalog embedded in the binary.
//!
//! # File format
//!
//! ```json
//! {
//!   "locations": [{
//!     "id": 1,
//!     "name": "Aalborg",
//!     "rules": [
//!       { "category": "DINE_IN", "open": "07:00", "close": "22:00",
//!         "days": ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] },
//!       { "category": "SPECIAL_EVENT", "open": "14:00", "close": "02:00",
//!         "days": ["Fri", "Sat", "Sun"], "closed_days": ["Mon"],
//!         "holiday": { "open": "14:00", "close": "02:00" } }
//!     ]
//!   }]
//! }
//! ```
//!
//! Times are validated here; the scheduling core only ever sees valid
//! `NaiveTime` values.

use std::collections::HashSet;
use std::path::Path;

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use shared::models::{Location, ServiceCategory, weekday_name};

use crate::schedule::{RecurrenceRule, Schedule, ScheduleBuilder};
use crate::utils::time::parse_time;
use crate::utils::{AppError, AppResult, ErrorCode};

const DEFAULT_CATALOG: &str = include_str!("../catalog/default.json");

/// On-disk catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub locations: Vec<LocationEntry>,
}

/// One location as written in a catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationEntry {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One recurrence rule as written in a catalog file (times are `HH:MM`)
///
/// `open` and `close` are required as soon as `days` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    pub category: ServiceCategory,
    pub open: Option<String>,
    pub close: Option<String>,
    #[serde(default)]
    pub days: Vec<Weekday>,
    #[serde(default)]
    pub closed_days: Vec<Weekday>,
    pub holiday: Option<HoursEntry>,
}

/// `HH:MM` pair for the holiday window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursEntry {
    pub open: String,
    pub close: String,
}

impl RuleEntry {
    /// Parse times and check the rule's structure
    pub fn to_rule(&self) -> AppResult<RecurrenceRule> {
        let mut rule = RecurrenceRule::on(
            self.category,
            self.days.iter().copied(),
            self.time_field("open", self.open.as_deref())?,
            self.time_field("close", self.close.as_deref())?,
        )
        .closed_on(self.closed_days.iter().copied());

        if let Some(holiday) = &self.holiday {
            rule = rule.with_holiday(parse_time(&holiday.open)?, parse_time(&holiday.close)?);
        }

        rule.validate()?;
        Ok(rule)
    }

    /// Closed-only and holiday-only rules may leave their times out
    fn time_field(&self, field: &str, raw: Option<&str>) -> AppResult<NaiveTime> {
        match raw {
            Some(raw) => parse_time(raw),
            None if self.days.is_empty() => Ok(NaiveTime::MIN),
            None => Err(AppError::required_field(field)
                .with_detail("category", self.category.as_str())),
        }
    }
}

/// Rules of one category may not repeat a weekday or a holiday window
fn check_rule_overlap(rules: &[RecurrenceRule]) -> AppResult<()> {
    let mut days = HashSet::new();
    let mut holidays = HashSet::new();

    for rule in rules {
        let category = rule.category.as_str();
        for day in rule.days.iter().chain(&rule.closed_days) {
            if !days.insert((rule.category, *day)) {
                return Err(AppError::validation(format!(
                    "{} is listed more than once for {}",
                    weekday_name(*day),
                    category
                ))
                .with_detail("category", category)
                .with_detail("day", weekday_name(*day)));
            }
        }
        if rule.holiday.is_some() && !holidays.insert(rule.category) {
            return Err(AppError::validation(format!(
                "More than one holiday window for {}",
                category
            ))
            .with_detail("category", category));
        }
    }
    Ok(())
}

/// A location together with the rules describing its hours
#[derive(Debug, Clone)]
pub struct CatalogLocation {
    /// Location details; `opening_hours` is left empty
    pub location: Location,
    pub rules: Vec<RecurrenceRule>,
}

impl CatalogLocation {
    pub fn id(&self) -> i64 {
        self.location.id
    }

    /// Expand the rules into a fresh schedule snapshot
    pub fn schedule(&self) -> Schedule {
        ScheduleBuilder::new(self.location.id)
            .rules(self.rules.iter().cloned())
            .build()
    }

    /// The location with its opening windows populated
    pub fn to_location(&self) -> Location {
        Location {
            opening_hours: self.schedule().windows().to_vec(),
            ..self.location.clone()
        }
    }
}

impl TryFrom<&LocationEntry> for CatalogLocation {
    type Error = AppError;

    fn try_from(entry: &LocationEntry) -> AppResult<Self> {
        let rules = entry
            .rules
            .iter()
            .map(|r| {
                r.to_rule()
                    .map_err(|e| e.with_detail("location_id", entry.id))
            })
            .collect::<AppResult<Vec<_>>>()?;
        check_rule_overlap(&rules).map_err(|e| e.with_detail("location_id", entry.id))?;

        Ok(Self {
            location: Location {
                id: entry.id,
                name: entry.name.clone(),
                address: entry.address.clone(),
                city: entry.city.clone(),
                telephone: entry.telephone.clone(),
                email: entry.email.clone(),
                opening_hours: Vec::new(),
            },
            rules,
        })
    }
}

/// Validated set of catalog locations
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    locations: Vec<CatalogLocation>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate location ids
    pub fn new(locations: Vec<CatalogLocation>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for entry in &locations {
            if !seen.insert(entry.id()) {
                return Err(AppError::with_message(
                    ErrorCode::DuplicateLocation,
                    format!("Location id {} appears more than once", entry.id()),
                )
                .with_detail("location_id", entry.id()));
            }
        }
        Ok(Self { locations })
    }

    /// Catalog shipped with the binary
    pub fn default_catalog() -> AppResult<Self> {
        Self::from_json_str(DEFAULT_CATALOG)
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("Invalid catalog: {}", e))
                .with_detail("line", e.line())
                .with_detail("column", e.column())
        })?;

        let locations = file
            .locations
            .iter()
            .map(CatalogLocation::try_from)
            .collect::<AppResult<Vec<_>>>()?;

        Self::new(locations)
    }

    /// Read and validate a catalog file
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Cannot read catalog {}: {}", path.display(), e))
                .with_detail("path", path.display().to_string())
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            locations = catalog.locations.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    pub fn locations(&self) -> &[CatalogLocation] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn find(&self, id: i64) -> AppResult<&CatalogLocation> {
        self.locations
            .iter()
            .find(|l| l.id() == id)
            .ok_or_else(|| AppError::location_not_found(id))
    }

    /// Schedule snapshot for every location, in catalog order
    pub fn schedules(&self) -> Vec<Schedule> {
        self.locations.iter().map(CatalogLocation::schedule).collect()
    }
}
