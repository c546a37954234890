//! Flight leg record and timestamp handling.
//!
//! A [`FlightLeg`] is one validated row of the flight-legs CSV. Instances only
//! exist after passing the loader's column-count, datetime and required-field
//! checks; no partially valid record is ever exposed.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp patterns accepted for departure/arrival datetimes, tried in
/// order against the trimmed value. A fixed list keeps parsing portable
/// across environments instead of depending on the host locale.
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a flight timestamp using the accepted [`DATETIME_FORMATS`].
///
/// Returns `None` when the value matches none of the patterns.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// One validated flight leg.
///
/// Datetime fields keep the original CSV strings; the loader has already
/// verified they parse with [`parse_datetime`]. Wire names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    pub id: i64,
    pub aircraft_registration_number: String,
    pub aircraft_type: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub departure_datetime: String,
    pub arrival_airport: String,
    pub arrival_datetime: String,
}

impl FlightLeg {
    /// Names of all required string fields that are empty or whitespace-only.
    ///
    /// Field names are reported in PascalCase, matching the diagnostic text
    /// of the public API (`"Id 4: FlightNumber is required."`).
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let checks: [(&'static str, &str); 7] = [
            ("AircraftRegistrationNumber", &self.aircraft_registration_number),
            ("AircraftType", &self.aircraft_type),
            ("FlightNumber", &self.flight_number),
            ("DepartureAirport", &self.departure_airport),
            ("DepartureDatetime", &self.departure_datetime),
            ("ArrivalAirport", &self.arrival_airport),
            ("ArrivalDatetime", &self.arrival_datetime),
        ];

        checks
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
