//! DTOs for the status endpoint.

use serde::Serialize;

/// Service status with component checks.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub environment: String,
    pub version: String,
    pub checks: StatusChecks,
}

#[derive(Debug, Serialize)]
pub struct StatusChecks {
    pub database: CheckStatus,
}

/// Individual component health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
