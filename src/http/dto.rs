//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

// The record type serializes itself; no separate wire struct needed.
pub use crate::models::FlightLeg;

/// Response envelope returned by every data endpoint.
///
/// `success` reflects whether the query produced a usable result; `errors`
/// carries the run's diagnostics verbatim, so a successful response may still
/// list warnings about rejected rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the query produced a usable result
    pub success: bool,
    /// Human-readable outcome summary
    pub message: String,
    /// Diagnostics accumulated during the run
    pub errors: Vec<String>,
    /// The response payload
    pub data: T,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
