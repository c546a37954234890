//! HTTP handlers for the REST API.
//!
//! Each handler delegates to the service layer and wraps the resulting
//! `(records, diagnostics)` pair into the response envelope. Handlers are
//! infallible: every failure mode of the core surfaces as diagnostics inside
//! the envelope, never as an error status.

use axum::{extract::State, Json};
use tracing::info;

use super::dto::{ApiResponse, FlightLeg, HealthResponse};
use super::state::AppState;
use crate::services::loader::FILE_PROCESSING_ERROR;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// GET /v1/flights
///
/// All valid flight legs from the CSV file, with diagnostics for every
/// rejected row.
pub async fn get_flights(State(state): State<AppState>) -> Json<ApiResponse<Vec<FlightLeg>>> {
    let (legs, diagnostics) = state.service.flight_legs().await;
    info!(legs = legs.len(), diagnostics = diagnostics.len(), "flights query served");

    let response = if legs.is_empty() {
        ApiResponse {
            success: false,
            message: "Flight information not retrieved.".to_string(),
            errors: diagnostics,
            data: legs,
        }
    } else {
        ApiResponse {
            success: true,
            message: if diagnostics.is_empty() {
                "Flight information retrieved successfully.".to_string()
            } else {
                "Flight information retrieved with some warnings.".to_string()
            },
            errors: diagnostics,
            data: legs,
        }
    };

    Json(response)
}

/// GET /v1/flights/inconsistencies
///
/// Flight legs participating in a chain inconsistency: legs of the same
/// flight number whose arrival airport does not match the departure airport
/// of the next leg in departure-time order.
pub async fn get_inconsistent_flights(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<FlightLeg>>> {
    let (legs, diagnostics) = state.service.inconsistent_legs().await;
    info!(legs = legs.len(), diagnostics = diagnostics.len(), "inconsistency query served");

    let response = if !legs.is_empty() {
        ApiResponse {
            success: true,
            message: if diagnostics.is_empty() {
                format!("{} inconsistencies found.", legs.len())
            } else {
                format!("{} inconsistencies found with some data warnings.", legs.len())
            },
            errors: diagnostics,
            data: legs,
        }
    } else if diagnostics.iter().any(|d| d == FILE_PROCESSING_ERROR) {
        // The whole batch was abandoned; an empty result here says nothing
        // about the data itself.
        ApiResponse {
            success: false,
            message: "Some issue with the data source.".to_string(),
            errors: diagnostics,
            data: legs,
        }
    } else {
        ApiResponse {
            success: true,
            message: "No inconsistent flight chains found.".to_string(),
            errors: diagnostics,
            data: legs,
        }
    };

    Json(response)
}
