//! Application state for the HTTP server.

use crate::services::FlightDataService;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Flight data query service
    pub service: Arc<dyn FlightDataService>,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(service: Arc<dyn FlightDataService>) -> Self {
        Self { service }
    }
}
