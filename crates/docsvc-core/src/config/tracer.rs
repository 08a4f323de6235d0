//! APM tracer configuration.

use serde::{Deserialize, Serialize};

/// Datadog agent settings (`DD_*` variables).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerConfig {
    /// Whether request spans are tagged for the APM agent.
    #[serde(rename = "dd_enable_tracer", default)]
    pub enable_tracer: bool,
    /// Agent host.
    #[serde(rename = "dd_agent_host", default = "default_agent_host")]
    pub agent_host: String,
    /// Agent port.
    #[serde(rename = "dd_agent_port", default = "default_agent_port")]
    pub agent_port: u16,
    /// Suffix appended to the environment name reported to the agent.
    #[serde(rename = "dd_env_suffix", default)]
    pub env_suffix: String,
}

impl TracerConfig {
    /// `host:port` of the agent.
    pub fn agent_addr(&self) -> String {
        format!("{}:{}", self.agent_host, self.agent_port)
    }

    /// Environment name reported to the agent.
    pub fn environment(&self, app_environment: &str) -> String {
        if self.env_suffix.is_empty() {
            return app_environment.to_string();
        }
        format!("{app_environment}-{}", self.env_suffix)
    }
}

fn default_agent_host() -> String {
    "127.0.0.1".to_string()
}

fn default_agent_port() -> u16 {
    8126
}
