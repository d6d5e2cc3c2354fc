//! Constants for Marquee
//!
//! All limits are explicit, use big-endian naming (most significant first),
//! and include units in the name.

// =============================================================================
// Auditorium Limits
// =============================================================================

/// Default number of seats in the auditorium
pub const SEAT_COUNT_DEFAULT: u32 = 100;

/// Maximum number of seats a registry may be constructed with
pub const SEAT_COUNT_MAX: u32 = 1_000_000;

// =============================================================================
// Guest Limits
// =============================================================================

/// Maximum length of a guest ID in bytes
pub const GUEST_ID_LENGTH_BYTES_MAX: usize = 128;

// =============================================================================
// Workload Limits
// =============================================================================

/// Default number of simulated guests per workload run
pub const WORKLOAD_GUESTS_COUNT_DEFAULT: usize = 50;

/// Maximum number of simulated guests per workload run
pub const WORKLOAD_GUESTS_COUNT_MAX: usize = 100_000;

/// Default number of guest tasks allowed to run concurrently
pub const WORKLOAD_CONCURRENCY_COUNT_DEFAULT: usize = 10;

/// Maximum number of guest tasks allowed to run concurrently
pub const WORKLOAD_CONCURRENCY_COUNT_MAX: usize = 1_024;

// Compile-time assertions for constant validity
const _: () = {
    assert!(SEAT_COUNT_DEFAULT >= 1);
    assert!(SEAT_COUNT_DEFAULT <= SEAT_COUNT_MAX);
    assert!(GUEST_ID_LENGTH_BYTES_MAX >= 32);
    assert!(WORKLOAD_GUESTS_COUNT_DEFAULT <= WORKLOAD_GUESTS_COUNT_MAX);
    assert!(WORKLOAD_CONCURRENCY_COUNT_DEFAULT >= 1);
    assert!(WORKLOAD_CONCURRENCY_COUNT_DEFAULT <= WORKLOAD_CONCURRENCY_COUNT_MAX);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_workload() {
        // 100 seats, 50 guests, pool of 10
        assert_eq!(SEAT_COUNT_DEFAULT, 100);
        assert_eq!(WORKLOAD_GUESTS_COUNT_DEFAULT, 50);
        assert_eq!(WORKLOAD_CONCURRENCY_COUNT_DEFAULT, 10);
    }

    #[test]
    fn test_limits_have_units_in_names() {
        // All byte limits end in _BYTES_, all count limits in _COUNT_
        let _: usize = GUEST_ID_LENGTH_BYTES_MAX;
        let _: u32 = SEAT_COUNT_MAX;
        let _: usize = WORKLOAD_GUESTS_COUNT_MAX;
    }
}
