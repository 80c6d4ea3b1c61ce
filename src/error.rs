//! Error types for adresse-geocoder

use thiserror::Error;

/// Main error type for geocoding operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Geocoding request failed with status {status}")]
    GeocodingRequest { status: u16, body: String },

    #[error("No results found")]
    MissingResults,

    #[error("Coordinates are missing from the response at index {0}")]
    MissingCoordinates(usize),

    #[error("Properties are missing from the response at index {0}")]
    MissingProperties(usize),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for geocoding operations
pub type Result<T> = std::result::Result<T, Error>;
