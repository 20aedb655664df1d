use std::path::PathBuf;

/// Runtime configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./work_dir | Working directory (logs live under `logs/`) |
/// | LOG_LEVEL | info | Log level when `RUST_LOG` is not set |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_TO_FILE | false | Also write daily rotating log files |
/// | CATALOG_PATH | (unset) | JSON location catalog; built-in catalog if unset |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// CATALOG_PATH=./catalog.json LOG_LEVEL=debug cargo run -p crab-hours
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: PathBuf,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    pub catalog_path: Option<PathBuf>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "./work_dir".into())
                .into(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Directory for rotating log files, when file logging is enabled
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_to_file.then(|| self.work_dir.join("logs"))
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
