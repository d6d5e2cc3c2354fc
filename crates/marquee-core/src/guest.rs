//! Guest identification
//!
//! Explicit, validated identifiers for the actors competing over seats.

use crate::constants::GUEST_ID_LENGTH_BYTES_MAX;
use crate::error::{Error, Result};
use crate::io::RngProvider;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a guest
///
/// A guest is an opaque actor competing for seats. The registry only ever
/// compares guest IDs for equality; it attaches no other meaning to them.
///
/// IDs are validated on construction and immutable afterwards.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct GuestId(String);

impl GuestId {
    /// Create a new GuestId with validation
    ///
    /// # Errors
    /// Returns error if the id is empty, too long, or contains characters
    /// outside `[A-Za-z0-9._-]`.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.is_empty() {
            return Err(Error::InvalidGuestId {
                id,
                reason: "guest ID cannot be empty".into(),
            });
        }

        if id.len() > GUEST_ID_LENGTH_BYTES_MAX {
            return Err(Error::GuestIdTooLong {
                length: id.len(),
                limit: GUEST_ID_LENGTH_BYTES_MAX,
            });
        }

        let valid = id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.');

        if !valid {
            return Err(Error::InvalidGuestId {
                id,
                reason: "guest ID contains invalid characters".into(),
            });
        }

        Ok(Self(id))
    }

    /// Create a GuestId without validation (for internal use)
    ///
    /// # Safety
    /// Caller must ensure the ID is valid.
    #[doc(hidden)]
    pub fn new_unchecked(id: String) -> Self {
        debug_assert!(!id.is_empty());
        debug_assert!(id.len() <= GUEST_ID_LENGTH_BYTES_MAX);
        Self(id)
    }

    /// Get the guest ID as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate a unique guest ID with injected RNG
    ///
    /// Deterministic under a seeded provider, which is what makes a seeded
    /// workload replayable.
    pub fn generate_with_rng(rng: &dyn RngProvider) -> Self {
        let suffix = rng.next_u64();
        Self::new_unchecked(format!("guest-{:016x}", suffix))
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for GuestId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
