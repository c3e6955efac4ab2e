//! # Bus construction settings.
//!
//! [`BusConfig`] centralizes throttling parameters supplied at construction;
//! they are immutable for the bus's lifetime.
//!
//! ## Sentinel values
//! - `throttle_interval = 0s` → no admission gating
//! - `throttle_limit = 0` → unlimited

use std::time::Duration;

/// Construction-time configuration for an [`EventBus`](crate::EventBus).
///
/// ## Field semantics
/// - `throttle_interval`: minimum spacing between successive dispatch
///   operations (`0s` = no gating)
/// - `throttle_limit`: burst-count allowance; accepted and carried but not
///   currently enforced — only the interval gates admission (`0` = unlimited)
#[derive(Clone, Copy, Debug)]
pub struct BusConfig {
    /// Minimum spacing the gate enforces between dispatches.
    pub throttle_interval: Duration,

    /// Reserved burst allowance.
    ///
    /// Stored for forward compatibility; admission control is purely
    /// interval-based.
    pub throttle_limit: usize,
}

impl BusConfig {
    /// Convenience constructor mirroring the field order.
    pub fn new(throttle_interval: Duration, throttle_limit: usize) -> Self {
        Self {
            throttle_interval,
            throttle_limit,
        }
    }

    /// Returns the interval as an `Option` (`None` = no gating).
    #[inline]
    pub fn interval(&self) -> Option<Duration> {
        if self.throttle_interval == Duration::ZERO {
            None
        } else {
            Some(self.throttle_interval)
        }
    }
}

impl Default for BusConfig {
    /// Default configuration: no throttling (`interval = 0s`, `limit = 0`).
    fn default() -> Self {
        Self {
            throttle_interval: Duration::ZERO,
            throttle_limit: 0,
        }
    }
}
