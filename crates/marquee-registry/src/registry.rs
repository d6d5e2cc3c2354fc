//! The seat-reservation registry
//!
//! One independent critical section per seat: reserve is "compare holder
//! to Free, swap to HeldBy(guest)", release is "compare holder to
//! HeldBy(guest), swap to Free". Nothing else mutates seat state.

use crate::error::{RegistryError, RegistryResult};
use crate::seat::SeatState;
use marquee_core::constants::SEAT_COUNT_MAX;
use marquee_core::GuestId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Concurrent registry of seats `1..=capacity`
///
/// # Concurrency contract
///
/// - Per seat, all reserve/release calls are totally ordered by that
///   seat's mutex; exactly one of N racing reservations wins.
/// - Across seats, operations proceed fully in parallel - there is no
///   registry-wide lock.
/// - No operation blocks waiting for another guest: every call completes
///   with a definite outcome after at most one short critical section.
///   Callers that want to wait for a seat must poll.
pub struct SeatRegistry {
    /// Seat cells, indexed by `seat_number - 1`
    seats: Vec<Mutex<SeatState>>,

    /// Number of seats currently held
    ///
    /// Mutated only inside the owning seat's critical section, so any
    /// read is consistent with the serialization the per-seat locks
    /// induce.
    reserved_count: AtomicUsize,
}

impl SeatRegistry {
    /// Create a registry with seats `1..=seat_count`, all free
    ///
    /// # Errors
    /// Returns `InvalidSeatCount` if `seat_count` is zero or exceeds
    /// `SEAT_COUNT_MAX`.
    pub fn new(seat_count: u32) -> RegistryResult<Self> {
        if seat_count == 0 {
            return Err(RegistryError::invalid_seat_count(
                seat_count,
                "must be at least 1",
            ));
        }

        if seat_count > SEAT_COUNT_MAX {
            return Err(RegistryError::invalid_seat_count(
                seat_count,
                format!("exceeds limit {}", SEAT_COUNT_MAX),
            ));
        }

        let seats = (0..seat_count)
            .map(|_| Mutex::new(SeatState::Free))
            .collect();

        Ok(Self {
            seats,
            reserved_count: AtomicUsize::new(0),
        })
    }

    /// Number of seats in the auditorium
    pub fn capacity(&self) -> u32 {
        self.seats.len() as u32
    }

    /// Try to reserve a seat for a guest
    ///
    /// Returns `Ok(true)` if the seat was free and is now held by `guest`,
    /// `Ok(false)` if it was already held - by anyone, including `guest`
    /// itself: asking again for a seat you hold is a denial, not a no-op
    /// success.
    ///
    /// # Errors
    /// Returns `SeatOutOfRange` before touching any state if `seat_number`
    /// is not in `1..=capacity`.
    pub fn reserve(&self, seat_number: u32, guest: &GuestId) -> RegistryResult<bool> {
        let cell = self.cell(seat_number)?;
        let mut state = lock_seat(cell);

        if !state.is_free() {
            tracing::trace!(seat = seat_number, guest = %guest, "reserve denied");
            return Ok(false);
        }

        *state = SeatState::HeldBy(guest.clone());
        self.reserved_count.fetch_add(1, Ordering::SeqCst);
        tracing::trace!(seat = seat_number, guest = %guest, "seat reserved");
        Ok(true)
    }

    /// Try to release a seat on behalf of a guest
    ///
    /// Returns `Ok(true)` only if `guest` is the seat's current holder.
    /// A free seat or a seat held by someone else yields `Ok(false)` with
    /// no state change.
    ///
    /// # Errors
    /// Returns `SeatOutOfRange` before touching any state if `seat_number`
    /// is not in `1..=capacity`.
    pub fn release(&self, seat_number: u32, guest: &GuestId) -> RegistryResult<bool> {
        let cell = self.cell(seat_number)?;
        let mut state = lock_seat(cell);

        if !state.is_held_by(guest) {
            tracing::trace!(seat = seat_number, guest = %guest, "release denied");
            return Ok(false);
        }

        *state = SeatState::Free;
        self.reserved_count.fetch_sub(1, Ordering::SeqCst);
        tracing::trace!(seat = seat_number, guest = %guest, "seat released");
        Ok(true)
    }

    /// Whether a seat has no holder at the instant of the read
    ///
    /// Advisory only: the answer may be stale by the time a subsequent
    /// `reserve` runs. Check-then-act across two calls is not atomic;
    /// correctness rests entirely on `reserve`'s own atomicity.
    ///
    /// # Errors
    /// Returns `SeatOutOfRange` if `seat_number` is not in `1..=capacity`.
    pub fn is_available(&self, seat_number: u32) -> RegistryResult<bool> {
        let cell = self.cell(seat_number)?;
        let state = lock_seat(cell);
        Ok(state.is_free())
    }

    /// The current holder of a seat, if any
    ///
    /// Advisory in the same way as [`is_available`](Self::is_available).
    ///
    /// # Errors
    /// Returns `SeatOutOfRange` if `seat_number` is not in `1..=capacity`.
    pub fn holder(&self, seat_number: u32) -> RegistryResult<Option<GuestId>> {
        let cell = self.cell(seat_number)?;
        let state = lock_seat(cell);
        Ok(state.holder().cloned())
    }

    /// Number of seats currently held
    ///
    /// A point-in-time snapshot consistent with some valid interleaving of
    /// the concurrent operations, not necessarily the most recent one.
    pub fn reserved_count(&self) -> usize {
        self.reserved_count.load(Ordering::SeqCst)
    }

    /// Look up the cell for a seat number, validating the range
    fn cell(&self, seat_number: u32) -> RegistryResult<&Mutex<SeatState>> {
        if seat_number == 0 || seat_number > self.capacity() {
            return Err(RegistryError::seat_out_of_range(
                seat_number,
                self.capacity(),
            ));
        }

        // Range checked above; seats are numbered from 1
        Ok(&self.seats[(seat_number - 1) as usize])
    }
}

impl std::fmt::Debug for SeatRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatRegistry")
            .field("capacity", &self.capacity())
            .field("reserved_count", &self.reserved_count())
            .finish()
    }
}

/// Lock a seat cell, recovering from poisoning
///
/// A seat cell is only ever written by single assignment, so a panic in
/// another thread cannot leave it mid-update; the poisoned guard still
/// holds a coherent `SeatState`.
fn lock_seat(cell: &Mutex<SeatState>) -> MutexGuard<'_, SeatState> {
    cell.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_guest(n: u32) -> GuestId {
        GuestId::new(format!("guest-{}", n)).unwrap()
    }

    fn test_registry(seat_count: u32) -> SeatRegistry {
        SeatRegistry::new(seat_count).unwrap()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[test]
    fn test_new_registry_all_seats_free() {
        let registry = test_registry(100);
        assert_eq!(registry.capacity(), 100);
        assert_eq!(registry.reserved_count(), 0);
        for seat in 1..=100 {
            assert!(registry.is_available(seat).unwrap());
        }
    }

    #[test]
    fn test_new_rejects_zero_seats() {
        assert!(matches!(
            SeatRegistry::new(0),
            Err(RegistryError::InvalidSeatCount { .. })
        ));
    }

    #[test]
    fn test_new_rejects_oversized_auditorium() {
        assert!(matches!(
            SeatRegistry::new(SEAT_COUNT_MAX + 1),
            Err(RegistryError::InvalidSeatCount { .. })
        ));
    }

    // =========================================================================
    // Reserve
    // =========================================================================

    #[test]
    fn test_reserve_free_seat() {
        let registry = test_registry(10);
        assert!(registry.reserve(1, &test_guest(1)).unwrap());
        assert!(!registry.is_available(1).unwrap());
        assert_eq!(registry.holder(1).unwrap(), Some(test_guest(1)));
        assert_eq!(registry.reserved_count(), 1);
    }

    #[test]
    fn test_reserve_held_seat_denied() {
        let registry = test_registry(10);
        assert!(registry.reserve(1, &test_guest(1)).unwrap());
        assert!(!registry.reserve(1, &test_guest(2)).unwrap());

        // Holder unchanged
        assert_eq!(registry.holder(1).unwrap(), Some(test_guest(1)));
        assert_eq!(registry.reserved_count(), 1);
    }

    #[test]
    fn test_reserve_own_seat_twice_is_denied() {
        // Asking again for a seat you already hold fails; it is not an
        // idempotent success, and the count moves by exactly 1.
        let registry = test_registry(10);
        assert!(registry.reserve(1, &test_guest(1)).unwrap());
        assert!(!registry.reserve(1, &test_guest(1)).unwrap());
        assert_eq!(registry.reserved_count(), 1);
    }

    // =========================================================================
    // Release
    // =========================================================================

    #[test]
    fn test_release_by_holder() {
        let registry = test_registry(10);
        registry.reserve(1, &test_guest(1)).unwrap();

        assert!(registry.release(1, &test_guest(1)).unwrap());
        assert!(registry.is_available(1).unwrap());
        assert_eq!(registry.reserved_count(), 0);
    }

    #[test]
    fn test_release_by_non_holder_denied() {
        let registry = test_registry(10);
        registry.reserve(1, &test_guest(1)).unwrap();

        assert!(!registry.release(1, &test_guest(2)).unwrap());

        // No mutation: holder and availability unchanged
        assert_eq!(registry.holder(1).unwrap(), Some(test_guest(1)));
        assert!(!registry.is_available(1).unwrap());
        assert_eq!(registry.reserved_count(), 1);
    }

    #[test]
    fn test_release_free_seat_denied() {
        let registry = test_registry(10);
        assert!(!registry.release(1, &test_guest(1)).unwrap());
        assert_eq!(registry.reserved_count(), 0);
    }

    #[test]
    fn test_round_trip_reservation() {
        // reserve(s, a), release(s, a), reserve(s, b) -> true, true, true
        let registry = test_registry(10);
        let a = test_guest(1);
        let b = test_guest(2);

        assert!(registry.reserve(3, &a).unwrap());
        assert!(registry.release(3, &a).unwrap());
        assert!(registry.reserve(3, &b).unwrap());

        assert_eq!(registry.holder(3).unwrap(), Some(b));
        assert_eq!(registry.reserved_count(), 1);
    }

    // =========================================================================
    // Range validation
    // =========================================================================

    #[test]
    fn test_seat_zero_out_of_range() {
        let registry = test_registry(10);
        let guest = test_guest(1);

        assert!(matches!(
            registry.reserve(0, &guest),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert!(matches!(
            registry.release(0, &guest),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert!(matches!(
            registry.is_available(0),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert_eq!(registry.reserved_count(), 0);
    }

    #[test]
    fn test_seat_past_capacity_out_of_range() {
        let registry = test_registry(10);
        let guest = test_guest(1);

        assert!(matches!(
            registry.reserve(11, &guest),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert!(matches!(
            registry.release(11, &guest),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert!(matches!(
            registry.holder(11),
            Err(RegistryError::SeatOutOfRange { .. })
        ));
        assert_eq!(registry.reserved_count(), 0);
    }

    #[test]
    fn test_out_of_range_error_carries_context() {
        let registry = test_registry(10);
        let err = registry.is_available(99).unwrap_err();
        assert_eq!(
            err,
            RegistryError::SeatOutOfRange {
                seat_number: 99,
                seat_count: 10
            }
        );
    }

    // =========================================================================
    // Counting
    // =========================================================================

    #[test]
    fn test_reserved_count_tracks_reservations() {
        let registry = test_registry(10);

        for seat in 1..=5 {
            registry.reserve(seat, &test_guest(seat)).unwrap();
        }
        assert_eq!(registry.reserved_count(), 5);

        for seat in 1..=2 {
            registry.release(seat, &test_guest(seat)).unwrap();
        }
        assert_eq!(registry.reserved_count(), 3);
    }

    #[test]
    fn test_denied_operations_leave_count_unchanged() {
        let registry = test_registry(10);
        registry.reserve(1, &test_guest(1)).unwrap();

        registry.reserve(1, &test_guest(2)).unwrap(); // denied
        registry.release(1, &test_guest(2)).unwrap(); // denied
        registry.release(2, &test_guest(2)).unwrap(); // denied, seat free

        assert_eq!(registry.reserved_count(), 1);
    }
}
