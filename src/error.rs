//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A form field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The submitted email is already used by another contact
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// No contact with the given id
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// The underlying database failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// User-facing message for errors the user can correct, mirroring the
    /// wording shown in the forms.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.message()),
            Self::DuplicateEmail(_) => Some("Email already exists"),
            Self::NotFound(_) | Self::Storage(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
