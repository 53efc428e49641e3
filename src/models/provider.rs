//! Response shapes of the third-party status endpoints.

use serde::{Deserialize, Serialize};

/// Statuspage `api/v2/status.json` payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatuspageResponse {
    pub status: StatuspageStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatuspageStatus {
    /// `none`, `minor`, `major` or `critical`
    pub indicator: String,
    pub description: String,
}

/// Slack `api/v2.0.0/current` payload. Only the overall health is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackCurrentResponse {
    /// `ok`, `degraded` or `outage`
    pub status: String,
}
