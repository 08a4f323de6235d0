//! Service identity and listener configuration.

use serde::{Deserialize, Serialize};

/// Environments whose logs are emitted as JSON.
const STRUCTURED_LOG_ENVIRONMENTS: [&str; 3] = ["production", "staging", "development"];

/// Service-level settings (`APP_*` variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Service name reported in logs and gRPC error details.
    #[serde(rename = "app_name", default = "default_name")]
    pub name: String,
    /// Deployment environment (`production`, `staging`, `development`, `local`, ...).
    #[serde(rename = "app_env", default = "default_environment")]
    pub environment: String,
    /// Service version reported to the tracer.
    #[serde(rename = "app_version", default = "default_version")]
    pub version: String,
    /// REST listener port.
    #[serde(rename = "app_http_port", default = "default_http_port")]
    pub http_port: u16,
    /// gRPC listener port.
    #[serde(rename = "app_grpc_port", default = "default_grpc_port")]
    pub grpc_port: u16,
    /// IANA timezone applied to database sessions.
    #[serde(rename = "app_timezone", default = "default_timezone")]
    pub timezone: String,
}

impl AppSettings {
    /// Whether the service runs in production.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether logs should be emitted as JSON for this environment.
    pub fn structured_logs(&self) -> bool {
        STRUCTURED_LOG_ENVIRONMENTS.contains(&self.environment.as_str())
    }
}

fn default_name() -> String {
    "document-service".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_http_port() -> u16 {
    6969
}

fn default_grpc_port() -> u16 {
    4949
}

fn default_timezone() -> String {
    "UTC".to_string()
}
