//! Store error types
//!
//! Defines the failures surfaced by loading and looking up Olympic data.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::{CountryId, ModelError};

/// Errors that can occur while fetching the dataset
#[derive(Error, Debug)]
pub enum LoadError {
    /// HTTP request failed (connect, body read, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Source answered with a non-success status
    #[error("Source returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Reading a local source failed
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: std::io::Error },

    /// Payload was not a JSON array of country records
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a country id
    #[error("Invalid dataset: {0}")]
    DuplicateId(#[from] ModelError),
}

/// Errors that can occur when looking a country up
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No dataset is loaded, or it is empty
    #[error("Olympic data not available")]
    NotLoaded,

    /// Dataset is loaded but has no record with this id
    #[error("Country with id {0} not found")]
    NotFound(CountryId),
}

/// Result type alias for store loads
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LookupError::NotFound(99);
        assert_eq!(err.to_string(), "Country with id 99 not found");

        let err = LookupError::NotLoaded;
        assert_eq!(err.to_string(), "Olympic data not available");

        let err = LoadError::Status {
            url: "http://localhost/olympic.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Source returned HTTP 404 for http://localhost/olympic.json"
        );
    }

    #[test]
    fn test_model_error_conversion() {
        let err: LoadError = ModelError::DuplicateId(4).into();
        assert!(matches!(err, LoadError::DuplicateId(ModelError::DuplicateId(4))));
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: LoadError = json_err.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
