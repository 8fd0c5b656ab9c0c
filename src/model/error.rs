//! Dataset validation errors

use thiserror::Error;

use super::types::CountryId;

/// Errors raised when raw records do not form a valid dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two country records share the same lookup id
    #[error("Duplicate country id: {0}")]
    DuplicateId(CountryId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::DuplicateId(3);
        assert_eq!(err.to_string(), "Duplicate country id: 3");
    }
}
