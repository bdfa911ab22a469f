//! Error types for the address book
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using AddressBookError
pub type Result<T> = std::result::Result<T, AddressBookError>;

/// Unified error type for address book operations
#[derive(Debug, Error)]
pub enum AddressBookError {
    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("contact with ID {0} already exists")]
    DuplicateId(String),

    #[error("contact {0} not found")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Decoding Errors
    // -------------------------------------------------------------------------
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("configuration error: {0}")]
    Config(String),
}

impl AddressBookError {
    /// Shorthand for a `MalformedRecord` built from anything displayable
    pub fn malformed(detail: impl std::fmt::Display) -> Self {
        Self::MalformedRecord(detail.to_string())
    }
}

impl From<csv::Error> for AddressBookError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(io) => Self::Io(io),
                other => Self::MalformedRecord(format!("{:?}", other)),
            }
        } else {
            Self::MalformedRecord(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AddressBookError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Io(err.into())
        } else {
            Self::MalformedRecord(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AddressBookError = csv::Error::from(io).into();
        assert!(matches!(err, AddressBookError::Io(ref e) if e.kind() == std::io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn json_syntax_error_maps_to_malformed() {
        let err: AddressBookError = serde_json::from_str::<serde_json::Value>("{nope")
            .unwrap_err()
            .into();
        assert!(matches!(err, AddressBookError::MalformedRecord(_)));
    }

    #[test]
    fn display_names_the_id() {
        let err = AddressBookError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "contact abc not found");
    }
}
