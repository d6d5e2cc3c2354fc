//! Registry error types
//!
//! Explicit error variants with context.
//!
//! Only genuinely invalid requests are errors. A reservation or release
//! that is denied because of the current holder is an expected outcome and
//! surfaces as `Ok(false)`, never as an error - callers must be able to
//! tell "seat unavailable" apart from "no such seat".

use thiserror::Error;

/// Registry-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Seat number outside the configured range `1..=seat_count`
    #[error("seat {seat_number} is out of range, auditorium has seats 1..={seat_count}")]
    SeatOutOfRange { seat_number: u32, seat_count: u32 },

    /// Registry constructed with an unusable seat count
    #[error("invalid seat count {seat_count}: {reason}")]
    InvalidSeatCount { seat_count: u32, reason: String },
}

impl RegistryError {
    /// Create a seat out of range error
    pub fn seat_out_of_range(seat_number: u32, seat_count: u32) -> Self {
        Self::SeatOutOfRange {
            seat_number,
            seat_count,
        }
    }

    /// Create an invalid seat count error
    pub fn invalid_seat_count(seat_count: u32, reason: impl Into<String>) -> Self {
        Self::InvalidSeatCount {
            seat_count,
            reason: reason.into(),
        }
    }
}

/// Result type for registry operations
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
