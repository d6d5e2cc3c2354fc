//! Marquee Core
//!
//! Core types, errors, and constants for the Marquee seat-reservation
//! system.
//!
//! # Overview
//!
//! Marquee models a fixed auditorium of uniquely numbered seats that many
//! concurrent guests try to reserve or cancel. This crate carries the
//! pieces shared by the registry and the workload driver:
//!
//! - Guest identification ([`GuestId`])
//! - Configuration with validation ([`MarqueeConfig`])
//! - Explicit limits ([`constants`])
//! - Injectable randomness for replayable workloads ([`RngProvider`])

pub mod config;
pub mod constants;
pub mod error;
pub mod guest;
pub mod io;

pub use config::{AuditoriumConfig, MarqueeConfig, WorkloadConfig};
pub use constants::*;
pub use error::{Error, Result};
pub use guest::GuestId;
pub use io::{RngProvider, StdRngProvider};
