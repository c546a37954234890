//! # Flight Data Rust Backend
//!
//! Flight chain consistency analysis service.
//!
//! This crate ingests a flat CSV file describing flight legs, validates each
//! record, and detects logical breaks in multi-leg flight chains: cases where
//! a flight number's legs, ordered by departure time, do not form a continuous
//! itinerary (the arrival airport of one leg must equal the departure airport
//! of the next). The results are exposed as a REST API via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The validated [`models::FlightLeg`] record and timestamp parsing
//! - [`source`]: Line source abstraction over the CSV file (filesystem or in-memory)
//! - [`services`]: Record loading/validation and chain-consistency analysis
//! - [`config`]: Environment-based runtime configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Data flows strictly one way: loader → analyzer → HTTP layer. Both service
//! operations return a `(records, diagnostics)` pair and never fail; rejected
//! rows and run-level faults surface as human-readable diagnostics alongside
//! whatever records survived.

pub mod config;

pub mod models;
pub mod source;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
