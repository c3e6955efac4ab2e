//! # Retry delay policy: exponential growth, cap, jitter.
//!
//! [`RetryPolicy`] maps an attempt number to a backoff delay:
//! `base × factor^attempt`, clamped to `cap`, then randomized per the
//! configured [`Jitter`]. The base delay is derived purely from the attempt
//! number — jitter output never feeds back into later calculations, so the
//! delay curve cannot drift.
//!
//! The policy is stateless: the attempt counter belongs to the delivery that
//! drives it, and `delay()` is safe to call from concurrent dispatches.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use evbus::{Jitter, RetryPolicy};
//!
//! let policy = RetryPolicy {
//!     base: Duration::from_millis(100),
//!     cap: Duration::from_secs(10),
//!     factor: 2.0,
//!     jitter: Jitter::None,
//! };
//!
//! assert_eq!(policy.delay(0), Duration::from_millis(100));
//! assert_eq!(policy.delay(2), Duration::from_millis(400));
//! // 100ms × 2^20 overflows the cap
//! assert_eq!(policy.delay(20), Duration::from_secs(10));
//! ```

use std::time::Duration;

use crate::policies::jitter::Jitter;

/// Backoff parameters for retrying a failed delivery.
///
/// - `base` — delay for attempt 0;
/// - `factor` — multiplicative growth per attempt (`>= 1.0` recommended);
/// - `cap` — upper bound on the computed delay;
/// - `jitter` — randomization applied after clamping.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    /// Delay before the first retry.
    pub base: Duration,
    /// Maximum delay; growth is clamped here before jitter.
    pub cap: Duration,
    /// Growth factor per attempt.
    pub factor: f64,
    /// Randomization applied to the clamped delay.
    pub jitter: Jitter,
}

impl Default for RetryPolicy {
    /// Returns `base = 100ms`, `cap = 30s`, `factor = 2.0`, `jitter = Equal`.
    fn default() -> Self {
        Self {
            base: Duration::from_millis(100),
            cap: Duration::from_secs(30),
            factor: 2.0,
            jitter: Jitter::default(),
        }
    }
}

impl RetryPolicy {
    /// Computes the jittered delay for the given attempt number (0-indexed).
    ///
    /// Overflowing or non-finite intermediates clamp to `cap`; a `factor`
    /// below 1.0 shrinks delays instead of growing them (not typical).
    pub fn delay(&self, attempt: u32) -> Duration {
        let cap_ms = self.cap.as_secs_f64() * 1_000.0;
        let exp = attempt.min(i32::MAX as u32) as i32;
        let raw_ms = self.base.as_secs_f64() * 1_000.0 * self.factor.powi(exp);

        let clamped = if !raw_ms.is_finite() || raw_ms < 0.0 || raw_ms > cap_ms {
            self.cap
        } else {
            Duration::from_secs_f64(raw_ms / 1_000.0)
        };

        self.jitter.apply(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(base_ms: u64, cap: Duration, factor: f64) -> RetryPolicy {
        RetryPolicy {
            base: Duration::from_millis(base_ms),
            cap,
            factor,
            jitter: Jitter::None,
        }
    }

    #[test]
    fn test_attempt_zero_is_base() {
        let p = plain(100, Duration::from_secs(30), 2.0);
        assert_eq!(p.delay(0), Duration::from_millis(100));
    }

    #[test]
    fn test_exponential_growth() {
        let p = plain(100, Duration::from_secs(30), 2.0);
        assert_eq!(p.delay(1), Duration::from_millis(200));
        assert_eq!(p.delay(2), Duration::from_millis(400));
        assert_eq!(p.delay(3), Duration::from_millis(800));
    }

    #[test]
    fn test_factor_one_is_constant() {
        let p = plain(250, Duration::from_secs(30), 1.0);
        for attempt in 0..12 {
            assert_eq!(p.delay(attempt), Duration::from_millis(250));
        }
    }

    #[test]
    fn test_growth_clamps_at_cap() {
        let p = plain(100, Duration::from_secs(1), 2.0);
        assert_eq!(p.delay(30), Duration::from_secs(1));
    }

    #[test]
    fn test_base_above_cap_clamps() {
        let p = plain(10_000, Duration::from_secs(5), 2.0);
        assert_eq!(p.delay(0), Duration::from_secs(5));
    }

    #[test]
    fn test_huge_attempt_does_not_overflow() {
        let p = plain(100, Duration::from_secs(60), 2.0);
        assert_eq!(p.delay(u32::MAX), Duration::from_secs(60));
    }

    #[test]
    fn test_jittered_delay_varies_and_medians_grow() {
        let p = RetryPolicy {
            base: Duration::from_millis(100),
            cap: Duration::from_secs(3600),
            factor: 2.0,
            jitter: Jitter::Equal,
        };

        let mut medians = Vec::new();
        for attempt in 0..3 {
            let mut samples: Vec<Duration> = (0..101).map(|_| p.delay(attempt)).collect();
            assert!(
                samples.iter().any(|s| *s != samples[0]),
                "attempt {attempt}: no jitter observed"
            );
            samples.sort();
            medians.push(samples[samples.len() / 2]);
        }
        assert!(medians[0] <= medians[1] && medians[1] <= medians[2]);
    }

    #[test]
    fn test_equal_jitter_bounded_by_computed_delay() {
        let p = RetryPolicy {
            base: Duration::from_millis(100),
            cap: Duration::from_secs(30),
            factor: 2.0,
            jitter: Jitter::Equal,
        };
        for attempt in 0..15 {
            let exact = (100.0 * 2.0f64.powi(attempt)).min(30_000.0);
            let d = p.delay(attempt as u32);
            assert!(d <= Duration::from_millis(exact as u64));
            assert!(d >= Duration::from_millis((exact / 2.0) as u64));
        }
    }
}
