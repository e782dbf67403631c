//! Error types for the fra-core library.

use thiserror::Error;

/// Main error type for the fra library.
#[derive(Error, Debug)]
pub enum FraError {
    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Document digitization error.
    #[error("digitization error: {0}")]
    Digitize(#[from] DigitizeError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the record store.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// A field failed validation on insert.
    #[error("validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Status string outside the known claim statuses.
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// A value could not be parsed into its typed form.
    #[error("invalid {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Snapshot file could not be read or written.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl StoreError {
    pub(crate) fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_value(field: &str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

/// Errors raised before a document reaches the extractor.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DigitizeError {
    /// The request carried no document.
    #[error("No file uploaded")]
    NoFile,

    /// Only images and PDFs are accepted.
    #[error("Only image files and PDFs are allowed (got {0})")]
    UnsupportedType(String),

    /// The document exceeds the configured upload limit.
    #[error("file of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },
}

/// Result type for the fra library.
pub type Result<T> = std::result::Result<T, FraError>;
