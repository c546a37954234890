//! CSV record loading and per-row validation.
//!
//! The loader reads the flight-legs file through a [`LineSource`], splits each
//! line on commas and validates the result. A failed row contributes one or
//! more diagnostics and is excluded; processing continues with the next line.
//! Only an unreadable file aborts the whole batch.
//!
//! The comma split is naive: quoted fields containing commas are not
//! supported. This is a documented limitation of the input format.

use log::{error, warn};
use std::sync::Arc;

use crate::models::{parse_datetime, FlightLeg};
use crate::source::LineSource;

/// Number of columns every data row must provide.
pub const EXPECTED_FIELD_COUNT: usize = 8;

/// Diagnostic emitted when the batch is abandoned on an unrecoverable fault.
pub const FILE_PROCESSING_ERROR: &str = "Unexpected error occurred while processing the file.";

/// Unrecoverable batch failure.
///
/// Distinct from per-row rejection: when this surfaces, every provisionally
/// accepted record of the call is discarded and a single generic diagnostic
/// is returned instead.
#[derive(Debug, thiserror::Error)]
#[error("unrecoverable read failure: {0}")]
pub(crate) struct BatchAbort(#[from] std::io::Error);

/// Loads and validates flight legs from a CSV file.
pub struct CsvRecordLoader {
    csv_path: String,
    source: Arc<dyn LineSource>,
}

impl CsvRecordLoader {
    pub fn new(csv_path: impl Into<String>, source: Arc<dyn LineSource>) -> Self {
        Self {
            csv_path: csv_path.into(),
            source,
        }
    }

    /// Load the CSV file, returning the valid legs and accumulated diagnostics.
    ///
    /// Never fails: a missing file or an unreadable one yields an empty record
    /// set with a single diagnostic describing the fault.
    pub async fn load(&self) -> (Vec<FlightLeg>, Vec<String>) {
        if !self.source.exists(&self.csv_path) {
            let diagnostic = format!("CSV file couldn't be found at path: {}", self.csv_path);
            error!("{}", diagnostic);
            return (Vec::new(), vec![diagnostic]);
        }

        match self.read_records().await {
            Ok(outcome) => outcome,
            Err(abort) => {
                // All-or-nothing fallback: records accumulated before the
                // fault never escape read_records.
                error!("Abandoning CSV batch: {}", abort);
                (Vec::new(), vec![FILE_PROCESSING_ERROR.to_string()])
            }
        }
    }

    async fn read_records(&self) -> Result<(Vec<FlightLeg>, Vec<String>), BatchAbort> {
        let lines = self.source.read_lines(&self.csv_path).await?;

        let mut legs = Vec::new();
        let mut diagnostics = Vec::new();

        // Line 1 is the header row and is always skipped.
        for line in lines.iter().skip(1) {
            match parse_row(line) {
                Ok(leg) => legs.push(leg),
                Err(row_diagnostics) => {
                    for diagnostic in &row_diagnostics {
                        warn!("{}", diagnostic);
                    }
                    diagnostics.extend(row_diagnostics);
                }
            }
        }

        Ok((legs, diagnostics))
    }
}

/// Parse and validate a single data row.
///
/// `Err` carries every diagnostic the row produced; the row is then excluded
/// from the valid set. Rejection reasons, in check order: too few columns,
/// unparseable departure datetime, unparseable arrival datetime, one or more
/// empty required fields. An unparseable id alone does not reject the row;
/// it defaults to 0.
fn parse_row(line: &str) -> Result<FlightLeg, Vec<String>> {
    let fields: Vec<&str> = line.split(',').collect();

    // Guard the id lookup: a row whose column 0 is absent must still produce
    // a diagnostic rather than an index fault.
    let row_id = fields.first().map(|field| field.trim()).unwrap_or_default();

    if fields.len() < EXPECTED_FIELD_COUNT {
        return Err(vec![format!(
            "Id {}: Incorrect number of columns. Expected {}, got {}.",
            row_id,
            EXPECTED_FIELD_COUNT,
            fields.len()
        )]);
    }

    if parse_datetime(fields[5]).is_none() {
        return Err(vec![format!(
            "Id {}: Invalid DepartureDatetime '{}'.",
            row_id,
            fields[5].trim()
        )]);
    }

    if parse_datetime(fields[7]).is_none() {
        return Err(vec![format!(
            "Id {}: Invalid ArrivalDatetime '{}'.",
            row_id,
            fields[7].trim()
        )]);
    }

    let leg = FlightLeg {
        id: row_id.parse().unwrap_or(0),
        aircraft_registration_number: fields[1].to_string(),
        aircraft_type: fields[2].to_string(),
        flight_number: fields[3].to_string(),
        departure_airport: fields[4].to_string(),
        departure_datetime: fields[5].to_string(),
        arrival_airport: fields[6].to_string(),
        arrival_datetime: fields[7].to_string(),
    };

    let missing = leg.missing_required_fields();
    if !missing.is_empty() {
        // One diagnostic per failing field; partial acceptance is disallowed.
        return Err(missing
            .into_iter()
            .map(|name| format!("Id {}: {} is required.", row_id, name))
            .collect());
    }

    Ok(leg)
}
