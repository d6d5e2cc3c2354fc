//! Configuration for Marquee
//!
//! Explicit defaults, validation, reasonable limits.

use crate::constants::*;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Main configuration for a Marquee run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Auditorium configuration
    #[serde(default)]
    pub auditorium: AuditoriumConfig,

    /// Workload driver configuration
    #[serde(default)]
    pub workload: WorkloadConfig,
}

impl MarqueeConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.auditorium.validate()?;
        self.workload.validate()?;
        Ok(())
    }
}

/// Auditorium configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditoriumConfig {
    /// Number of seats, numbered 1..=seat_count
    #[serde(default = "default_seat_count")]
    pub seat_count: u32,
}

fn default_seat_count() -> u32 {
    SEAT_COUNT_DEFAULT
}

impl Default for AuditoriumConfig {
    fn default() -> Self {
        Self {
            seat_count: default_seat_count(),
        }
    }
}

impl AuditoriumConfig {
    fn validate(&self) -> Result<()> {
        if self.seat_count == 0 {
            return Err(Error::InvalidConfiguration {
                field: "auditorium.seat_count".into(),
                reason: "must be at least 1".into(),
            });
        }

        if self.seat_count > SEAT_COUNT_MAX {
            return Err(Error::InvalidConfiguration {
                field: "auditorium.seat_count".into(),
                reason: format!("{} exceeds limit {}", self.seat_count, SEAT_COUNT_MAX),
            });
        }

        Ok(())
    }
}

/// Workload driver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of simulated guests to spawn
    #[serde(default = "default_guest_count")]
    pub guest_count: usize,

    /// Maximum number of guest tasks running at once
    #[serde(default = "default_concurrency_max")]
    pub concurrency_max: usize,

    /// Seed for guest IDs and seat assignments (random if unset)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_guest_count() -> usize {
    WORKLOAD_GUESTS_COUNT_DEFAULT
}

fn default_concurrency_max() -> usize {
    WORKLOAD_CONCURRENCY_COUNT_DEFAULT
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            guest_count: default_guest_count(),
            concurrency_max: default_concurrency_max(),
            seed: None,
        }
    }
}

impl WorkloadConfig {
    fn validate(&self) -> Result<()> {
        if self.guest_count == 0 {
            return Err(Error::InvalidConfiguration {
                field: "workload.guest_count".into(),
                reason: "must be at least 1".into(),
            });
        }

        if self.guest_count > WORKLOAD_GUESTS_COUNT_MAX {
            return Err(Error::InvalidConfiguration {
                field: "workload.guest_count".into(),
                reason: format!(
                    "{} exceeds limit {}",
                    self.guest_count, WORKLOAD_GUESTS_COUNT_MAX
                ),
            });
        }

        if self.concurrency_max == 0 {
            return Err(Error::InvalidConfiguration {
                field: "workload.concurrency_max".into(),
                reason: "must be at least 1".into(),
            });
        }

        if self.concurrency_max > WORKLOAD_CONCURRENCY_COUNT_MAX {
            return Err(Error::InvalidConfiguration {
                field: "workload.concurrency_max".into(),
                reason: format!(
                    "{} exceeds limit {}",
                    self.concurrency_max, WORKLOAD_CONCURRENCY_COUNT_MAX
                ),
            });
        }

        Ok(())
    }
}
