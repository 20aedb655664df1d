//! Location Model

use serde::{Deserialize, Serialize};

use super::opening_hour::OpeningWindow;

/// Restaurant location (one site of the chain)
///
/// Owns its opening windows exclusively; windows are never shared between
/// locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    pub telephone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub opening_hours: Vec<OpeningWindow>,
}
