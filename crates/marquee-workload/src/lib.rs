//! Marquee Workload
//!
//! Drives the seat registry with many concurrent simulated guests.
//!
//! Each guest is assigned an ID and a seat number up front, then performs
//! exactly one action against the registry: it checks whether its seat
//! looks available and, based on that possibly-stale answer, tries to
//! reserve it or to cancel the existing reservation. The availability
//! check is deliberately advisory - the registry's own atomicity is what
//! keeps racing guests correct, not the check.
//!
//! Runs are replayable: guest IDs and seat assignments are drawn from a
//! seeded RNG, and the seed is logged so any run can be repeated.

use marquee_core::{
    Error, GuestId, MarqueeConfig, Result, RngProvider, StdRngProvider,
};
use marquee_registry::{RegistryResult, SeatRegistry};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;

// =============================================================================
// Guest Task
// =============================================================================

/// What a single guest ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestOutcome {
    /// Seat looked free and the reservation won
    Reserved,
    /// Seat looked free but another guest reserved it first
    ReserveDenied,
    /// Seat looked taken and this guest was the holder, so it cancelled
    Released,
    /// Seat looked taken and this guest was not the holder
    ReleaseDenied,
}

/// Run one guest's single action against the registry
///
/// Check-then-act on purpose: the `is_available` answer may be stale by
/// the time `reserve` runs, which is exactly the contention the registry
/// must absorb.
///
/// # Errors
/// Returns `SeatOutOfRange` if `seat_number` is outside the registry's
/// range; the driver only hands out in-range seats, so this indicates a
/// driver bug.
pub fn run_guest(
    registry: &SeatRegistry,
    guest: &GuestId,
    seat_number: u32,
) -> RegistryResult<GuestOutcome> {
    tracing::debug!(guest = %guest, seat = seat_number, "guest checking seat");

    let outcome = if registry.is_available(seat_number)? {
        if registry.reserve(seat_number, guest)? {
            GuestOutcome::Reserved
        } else {
            GuestOutcome::ReserveDenied
        }
    } else if registry.release(seat_number, guest)? {
        GuestOutcome::Released
    } else {
        GuestOutcome::ReleaseDenied
    };

    tracing::info!(guest = %guest, seat = seat_number, outcome = ?outcome, "guest finished");
    Ok(outcome)
}

// =============================================================================
// Report
// =============================================================================

/// Aggregated results of a workload run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkloadReport {
    /// Number of guests that ran
    pub guests_total: usize,
    /// Reservations that won their seat
    pub reservations_succeeded: usize,
    /// Reservations denied because the seat was already held
    pub reservations_denied: usize,
    /// Cancellations by the rightful holder
    pub releases_succeeded: usize,
    /// Cancellations denied (not the holder, or seat already free)
    pub releases_denied: usize,
    /// `reserved_count()` after every guest finished
    pub seats_reserved_final: usize,
}

impl WorkloadReport {
    fn record(&mut self, outcome: GuestOutcome) {
        self.guests_total += 1;
        match outcome {
            GuestOutcome::Reserved => self.reservations_succeeded += 1,
            GuestOutcome::ReserveDenied => self.reservations_denied += 1,
            GuestOutcome::Released => self.releases_succeeded += 1,
            GuestOutcome::ReleaseDenied => self.releases_denied += 1,
        }
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Run a full workload: spawn the configured guests, wait for all of
/// them, and aggregate their outcomes
///
/// Guest concurrency is bounded by `workload.concurrency_max` permits.
///
/// # Errors
/// Returns `InvalidConfiguration` if the config fails validation, or an
/// internal error if a guest task fails.
pub async fn run_workload(config: &MarqueeConfig) -> Result<WorkloadReport> {
    config.validate()?;

    let seat_count = config.auditorium.seat_count;
    let guest_count = config.workload.guest_count;

    let seed = config.workload.seed.unwrap_or_else(rand::random);
    tracing::info!(
        seed,
        seats = seat_count,
        guests = guest_count,
        concurrency = config.workload.concurrency_max,
        "starting workload (set workload.seed = {} to replay)",
        seed
    );

    let rng = StdRngProvider::with_seed(seed);
    let registry = Arc::new(
        SeatRegistry::new(seat_count).map_err(|e| Error::internal(e.to_string()))?,
    );
    let semaphore = Arc::new(Semaphore::new(config.workload.concurrency_max));

    // Assign IDs and seats up front so the RNG is consumed in a fixed
    // order regardless of task interleaving.
    let mut handles = Vec::with_capacity(guest_count);
    for _ in 0..guest_count {
        let guest = GuestId::generate_with_rng(&rng);
        let seat_number = rng.gen_range(1, u64::from(seat_count) + 1) as u32;

        let registry = Arc::clone(&registry);
        let semaphore = Arc::clone(&semaphore);
        handles.push(tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| Error::internal(format!("semaphore closed: {}", e)))?;
            run_guest(&registry, &guest, seat_number)
                .map_err(|e| Error::internal(format!("guest task failed: {}", e)))
        }));
    }

    let mut report = WorkloadReport::default();
    for handle in handles {
        let outcome = handle
            .await
            .map_err(|e| Error::internal(format!("guest task panicked: {}", e)))??;
        report.record(outcome);
    }

    report.seats_reserved_final = registry.reserved_count();

    debug_assert_eq!(
        report.reservations_succeeded - report.releases_succeeded,
        report.seats_reserved_final,
        "successful reservations minus successful releases must equal held seats"
    );

    tracing::info!(
        reserved = report.reservations_succeeded,
        released = report.releases_succeeded,
        denied = report.reservations_denied + report.releases_denied,
        final_count = report.seats_reserved_final,
        "workload complete"
    );

    Ok(report)
}
