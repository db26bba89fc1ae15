//! Error types for the toldo facade.

use thiserror::Error;

/// Errors raised at the boundary around the geometry generator.
#[derive(Error, Debug)]
pub enum ToldoError {
    /// An I/O error occurred while reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input could not be parsed or output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be parsed.
    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required field is absent.
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A field is present but is not a finite number.
    #[error("'{0}' must be a valid number")]
    InvalidNumber(String),

    /// A dimension that must be positive is zero or negative.
    #[error("'{0}' must be a positive value")]
    NonPositive(String),

    /// A dimension exceeds [`crate::request::MAX_DIMENSION`].
    #[error("'{0}' exceeds the maximum dimension")]
    TooLarge(String),

    /// The requested export format is not supported.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The geometry has no faces to write.
    #[error("geometry has no faces")]
    EmptyGeometry,
}

/// Result type for toldo operations.
pub type Result<T> = std::result::Result<T, ToldoError>;
