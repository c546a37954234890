//! Flight chain consistency analysis.
//!
//! A chain (itinerary) is the set of legs sharing a flight number, ordered by
//! departure time. A chain is inconsistent when the arrival airport of one
//! leg does not equal the departure airport of the next.

use log::error;
use std::collections::{HashMap, HashSet};

use crate::models::{parse_datetime, FlightLeg};

/// Find every leg participating in a chain inconsistency.
///
/// For each flight number, legs are deduplicated by the
/// (departure airport, arrival airport, departure datetime) triple keeping the
/// first occurrence, ordered ascending by parsed departure time, then walked
/// pairwise: both legs of every adjacent mismatch are appended to the result.
/// A leg mismatching both its predecessor and its successor therefore appears
/// twice; the output is not deduplicated.
///
/// Airport codes are compared exactly, case-sensitive.
///
/// The caller guarantees every departure datetime parses (the loader validated
/// them). If that contract is violated, analysis stops: the offending value is
/// reported as a diagnostic and whatever inconsistencies were accumulated so
/// far are still returned.
pub fn find_inconsistencies(legs: &[FlightLeg]) -> (Vec<FlightLeg>, Vec<String>) {
    let mut inconsistent = Vec::new();
    let mut diagnostics = Vec::new();

    for chain in group_by_flight_number(legs) {
        match order_chain(chain) {
            Ok(ordered) => {
                for pair in ordered.windows(2) {
                    if pair[0].arrival_airport != pair[1].departure_airport {
                        inconsistent.push(pair[0].clone());
                        inconsistent.push(pair[1].clone());
                    }
                }
            }
            Err(diagnostic) => {
                error!("Chain analysis aborted: {}", diagnostic);
                diagnostics.push(diagnostic);
                break;
            }
        }
    }

    (inconsistent, diagnostics)
}

/// Group legs by flight number, preserving first-encounter order of the
/// groups so repeated runs over the same input yield identical output.
fn group_by_flight_number(legs: &[FlightLeg]) -> Vec<Vec<&FlightLeg>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&FlightLeg>> = Vec::new();

    for leg in legs {
        match index.get(leg.flight_number.as_str()) {
            Some(&position) => groups[position].push(leg),
            None => {
                index.insert(leg.flight_number.as_str(), groups.len());
                groups.push(vec![leg]);
            }
        }
    }

    groups
}

/// Deduplicate a chain and order it by parsed departure time.
///
/// Duplicate (departure airport, arrival airport, departure datetime) triples
/// keep the first occurrence and are dropped silently; duplicates alone never
/// constitute an inconsistency. The sort is stable, so legs departing at the
/// same instant keep their first-seen order.
fn order_chain(chain: Vec<&FlightLeg>) -> Result<Vec<&FlightLeg>, String> {
    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let mut keyed = Vec::with_capacity(chain.len());

    for leg in chain {
        let triple = (
            leg.departure_airport.as_str(),
            leg.arrival_airport.as_str(),
            leg.departure_datetime.as_str(),
        );
        if !seen.insert(triple) {
            continue;
        }

        let departure = parse_datetime(&leg.departure_datetime).ok_or_else(|| {
            format!(
                "Unexpected error during inconsistency analysis: unparseable DepartureDatetime '{}'.",
                leg.departure_datetime.trim()
            )
        })?;
        keyed.push((departure, leg));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, leg)| leg).collect())
}
