//! Runtime configuration from environment variables.

use std::env;

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
    #[error("{0} must be a valid port number")]
    InvalidPort(&'static str),
}

/// Service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the flight-legs CSV file
    pub csv_path: String,
    /// Server bind host
    pub host: String,
    /// Server bind port
    pub port: u16,
}

impl Config {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CSV_PATH` (required): path of the flight-legs CSV file
    /// - `HOST` (optional, default: 0.0.0.0): server bind host
    /// - `PORT` (optional, default: 8080): server bind port
    ///
    /// # Errors
    /// Returns an error if `CSV_PATH` is not set or `PORT` is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let csv_path = env::var("CSV_PATH").map_err(|_| ConfigError::MissingVar("CSV_PATH"))?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort("PORT"))?;

        Ok(Self {
            csv_path,
            host,
            port,
        })
    }
}
