//! Error types for the dataset crate.

use thiserror::Error;

/// Errors that can occur while acquiring or decoding restaurant data.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O error while reading or writing a cache file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache file or API response was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request to the search API failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A listing was missing a field construction cannot proceed without
    #[error("Missing required field `{field}` for business {name:?}")]
    MissingField { field: &'static str, name: String },

    /// A field held a value outside its domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    /// No cache file exists for the term and no API key is configured
    #[error("No cached dataset for {term:?} and no API key configured")]
    NoDataSource { term: String },
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, DatasetError>;
