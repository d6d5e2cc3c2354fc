//! Error types for Marquee
//!
//! Explicit error types with context, using thiserror.

use thiserror::Error;

/// Result type alias for Marquee operations
pub type Result<T> = std::result::Result<T, Error>;

/// Marquee error types
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid guest ID: {id}, reason: {reason}")]
    InvalidGuestId { id: String, reason: String },

    #[error("Guest ID too long: {length} bytes exceeds limit of {limit} bytes")]
    GuestIdTooLong { length: usize, limit: usize },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid configuration: {field}, reason: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {reason}")]
    Internal { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid guest ID error
    pub fn invalid_guest_id(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGuestId {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }
}
