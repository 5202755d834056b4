//! General application configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default output format name.
fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// RFC 3339 instant used as "now" for date-range filters.
    /// Empty means the system clock.
    #[serde(default)]
    pub reference_time: String,

    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            reference_time: String::new(),
            default_format: default_format(),
        }
    }
}

impl GeneralConfig {
    /// Parse `reference_time`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the value is set but is not an
    /// RFC 3339 timestamp.
    pub fn reference_time(&self) -> Result<Option<DateTime<Utc>>, ConfigError> {
        let raw = self.reference_time.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|parsed| Some(parsed.with_timezone(&Utc)))
            .map_err(|error| ConfigError::InvalidValue {
                field: String::from("general.reference_time"),
                reason: format!("'{raw}' is not an RFC 3339 timestamp: {error}"),
            })
    }
}
