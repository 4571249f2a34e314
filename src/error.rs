//! Error types for productstore
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in the record store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Candidate product is missing one or more required fields
    #[error("Validation failed: missing required fields: {}", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    /// Another product already uses this code
    #[error("Duplicate code: {0}")]
    DuplicateCode(String),

    /// Price cannot be written as a JSON number
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// Every u64 id has already been handed out
    #[error("Id space exhausted")]
    IdsExhausted,

    /// No product with this id
    #[error("Product not found: {0}")]
    NotFound(u64),

    /// Backing file could not be loaded
    #[error("Load failed: {0}")]
    Load(String),

    /// Backing file could not be written
    #[error("Persist failed: {0}")]
    Persist(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the error came from a missing backing file rather than bad content
    pub fn is_missing_file(&self) -> bool {
        matches!(self, StoreError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
