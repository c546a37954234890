//! Flight Data HTTP Server Binary
//!
//! Entry point for the flight data REST API server. It loads the
//! configuration, wires the CSV-backed flight service, sets up the HTTP
//! router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! CSV_PATH=data/flights.csv cargo run --bin flightdata-server
//! ```
//!
//! # Environment Variables
//!
//! - `CSV_PATH`: Path of the flight-legs CSV file (required)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use flightdata_rust::config::Config;
use flightdata_rust::http::{create_router, AppState};
use flightdata_rust::services::{CsvFlightService, FlightDataService};
use flightdata_rust::source::FsLineSource;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Flight Data HTTP Server");

    let config = Config::from_env()?;
    info!("Serving flight data from {}", config.csv_path);

    // The CSV is re-read per request; the service itself is stateless and
    // shared as a read-only singleton.
    let source = Arc::new(FsLineSource);
    let service =
        Arc::new(CsvFlightService::new(config.csv_path.clone(), source)) as Arc<dyn FlightDataService>;
    let state = AppState::new(service);

    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
