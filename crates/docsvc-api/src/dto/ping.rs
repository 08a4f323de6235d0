use serde::{Deserialize, Serialize};

/// Body of `GET /ping`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingStatus {
    pub status: String,
}

impl PingStatus {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
        }
    }
}
