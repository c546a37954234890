//! Service layer for CSV ingestion and chain-consistency analysis.
//!
//! [`loader`] turns raw CSV lines into validated [`crate::models::FlightLeg`]
//! records plus diagnostics; [`analyzer`] walks the validated records for
//! chain breaks; [`flight_service`] ties the two together behind the
//! [`FlightDataService`] trait consumed by the HTTP layer.

pub mod analyzer;
pub mod flight_service;
pub mod loader;


#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;

pub use flight_service::{CsvFlightService, FlightDataService};
pub use loader::CsvRecordLoader;
