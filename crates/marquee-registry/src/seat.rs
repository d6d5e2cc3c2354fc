//! Seat state
//!
//! A seat's holder is modeled as an explicit sum type rather than a magic
//! sentinel value, so "unreserved" can never be confused with "reserved by
//! a guest with an empty identifier".

use marquee_core::GuestId;
use serde::{Deserialize, Serialize};

/// Current state of a single seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    /// Seat has no holder
    #[default]
    Free,

    /// Seat is held by exactly this guest
    HeldBy(GuestId),
}

impl SeatState {
    /// Whether the seat has no holder
    pub fn is_free(&self) -> bool {
        matches!(self, Self::Free)
    }

    /// The current holder, if any
    pub fn holder(&self) -> Option<&GuestId> {
        match self {
            Self::Free => None,
            Self::HeldBy(guest) => Some(guest),
        }
    }

    /// Whether the seat is held by exactly this guest
    pub fn is_held_by(&self, guest: &GuestId) -> bool {
        self.holder() == Some(guest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str) -> GuestId {
        GuestId::new(name).unwrap()
    }

    #[test]
    fn test_default_is_free() {
        let state = SeatState::default();
        assert!(state.is_free());
        assert!(state.holder().is_none());
    }

    #[test]
    fn test_held_by() {
        let state = SeatState::HeldBy(guest("guest-1"));
        assert!(!state.is_free());
        assert!(state.is_held_by(&guest("guest-1")));
        assert!(!state.is_held_by(&guest("guest-2")));
    }
}
