//! Flight data service: the public query surface over loader and analyzer.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;

use crate::models::FlightLeg;
use crate::services::analyzer;
use crate::services::loader::CsvRecordLoader;
use crate::source::LineSource;

/// Read-only flight data queries.
///
/// Both operations return a `(records, diagnostics)` pair and never fail;
/// callers decide how to present an empty record set with diagnostics.
#[async_trait]
pub trait FlightDataService: Send + Sync {
    /// All valid flight legs plus row-level diagnostics.
    async fn flight_legs(&self) -> (Vec<FlightLeg>, Vec<String>);

    /// Legs participating in a chain inconsistency, plus the loader's
    /// diagnostics merged with any the analysis itself raised.
    async fn inconsistent_legs(&self) -> (Vec<FlightLeg>, Vec<String>);
}

/// CSV-backed implementation of [`FlightDataService`].
pub struct CsvFlightService {
    loader: CsvRecordLoader,
}

impl CsvFlightService {
    pub fn new(csv_path: impl Into<String>, source: Arc<dyn LineSource>) -> Self {
        Self {
            loader: CsvRecordLoader::new(csv_path, source),
        }
    }
}

#[async_trait]
impl FlightDataService for CsvFlightService {
    async fn flight_legs(&self) -> (Vec<FlightLeg>, Vec<String>) {
        self.loader.load().await
    }

    async fn inconsistent_legs(&self) -> (Vec<FlightLeg>, Vec<String>) {
        let (legs, mut diagnostics) = self.loader.load().await;

        if legs.is_empty() {
            warn!("Chain analysis skipped: no flight data available.");
            return (Vec::new(), diagnostics);
        }

        let (inconsistent, analysis_diagnostics) = analyzer::find_inconsistencies(&legs);
        info!("Found {} inconsistent flight legs.", inconsistent.len());
        diagnostics.extend(analysis_diagnostics);

        (inconsistent, diagnostics)
    }
}
