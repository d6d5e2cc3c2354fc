//! Marquee Registry
//!
//! The seat-reservation registry: a shared, in-process store mapping every
//! seat in `1..=capacity` to its current holder.
//!
//! # Guarantees
//!
//! - Each seat is held by at most one guest at any instant
//! - Only the current holder can release a seat
//! - `reserved_count` is always consistent with some serialization of the
//!   concurrent reserve/release calls
//!
//! Seats synchronize independently: contention on one seat never blocks
//! operations on another.

pub mod error;
pub mod registry;
pub mod seat;

pub use error::{RegistryError, RegistryResult};
pub use registry::SeatRegistry;
pub use seat::SeatState;
