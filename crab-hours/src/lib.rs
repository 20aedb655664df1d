//! Crab Hours - opening hours for restaurant locations
//!
//! # Overview
//!
//! Each location keeps opening windows per service category (restaurant,
//! takeaway, buffet, special events). This crate turns those windows into
//! the rows shown to guests, merging Monday - Thursday when all four days
//! share the same hours.
//!
//! - **Schedule** (`schedule`): window snapshot, lookup, grouping, formatting
//! - **Catalog** (`catalog`): locations and their recurrence rules
//!
//! # Module structure
//!
//! ```text
//! crab-hours/src/
//! ├── core/          # configuration
//! ├── schedule/      # snapshot, builder, grouper, formatter
//! ├── catalog.rs     # location catalog (JSON / built-in)
//! └── utils/         # logger, time parsing, errors
//! ```

pub mod catalog;
pub mod core;
pub mod schedule;
pub mod utils;

pub use catalog::{Catalog, CatalogLocation};
pub use core::Config;
pub use schedule::{
    DaySlot, RecurrenceRule, Schedule, ScheduleBuilder, display_rows, display_schedule,
    format_hours,
};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, read configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    init_logger_with_file(&config.log_level, config.log_json, log_dir.as_deref())?;

    tracing::debug!(
        environment = %config.environment,
        work_dir = %config.work_dir.display(),
        "Environment ready"
    );
    Ok(config)
}

/// Load the configured catalog, or the built-in one when no path is set
pub fn load_catalog(config: &Config) -> AppResult<Catalog> {
    match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => {
            tracing::info!("CATALOG_PATH not set, using built-in catalog");
            Catalog::default_catalog()
        }
    }
}
