//! Error types for the location-forecast crate.
use metfor::HectoPascal;
use thiserror::Error;

/// Error type for the crate.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The model configuration is not usable.
    #[error("Invalid model configuration: {0}")]
    InvalidConfig(String),
    /// The same pressure level appears more than once in a column.
    #[error("Duplicate pressure level in column: {0:?}")]
    DuplicateLevel(HectoPascal),

    /// Forward an error from reading a configuration file.
    #[error("Error reading configuration: {0}")]
    Io(#[from] std::io::Error),
    /// Forward an error from parsing a configuration file.
    #[error("Error parsing configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// Forward an error from the JSON encoder.
    #[error("Error encoding forecast: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, ForecastError>;
