//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration (`LOG_*` variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(rename = "log_level", default = "default_level")]
    pub level: String,
    /// Explicit format override: `"json"` or `"pretty"`. When unset the
    /// format follows `APP_ENV`.
    #[serde(rename = "log_format", default)]
    pub format: Option<String>,
}

impl LoggingConfig {
    /// Resolve whether to emit JSON given the environment default.
    pub fn json(&self, environment_default: bool) -> bool {
        match self.format.as_deref() {
            Some("json") => true,
            Some("pretty") => false,
            _ => environment_default,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
