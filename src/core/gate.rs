//! # Throttle gate: minimum spacing between dispatches.
//!
//! The gate tracks a single timestamp, the end of the most recent dispatch.
//! [`ThrottleGate::admit`] sleeps out whatever remains of the interval;
//! [`ThrottleGate::touch`] stamps the timestamp after the handler loop.
//! Because the stamp happens after processing, effective spacing between two
//! dispatch starts is `interval + (time spent processing the previous
//! event)` — throttling composes with per-event processing time, not purely
//! with the gap between calls.
//!
//! The gate is owned by the bus inside the dispatch mutex: its
//! read-modify-write is atomic under the same exclusion as the handler loop.

use std::time::Duration;

use tokio::time::{self, Instant};

/// Admission control state: one interval, one timestamp.
pub(crate) struct ThrottleGate {
    interval: Duration,
    // Accepted at construction, not consulted for admission.
    #[allow(dead_code)]
    limit: usize,
    last_dispatch: Option<Instant>,
}

impl ThrottleGate {
    pub(crate) fn new(interval: Duration, limit: usize) -> Self {
        Self {
            interval,
            limit,
            last_dispatch: None,
        }
    }

    /// Suspends the caller until at least `interval` has passed since the
    /// previous [`touch`](Self::touch). The first-ever admission never waits.
    pub(crate) async fn admit(&mut self) {
        if self.interval == Duration::ZERO {
            return;
        }
        if let Some(last) = self.last_dispatch {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                time::sleep(self.interval - elapsed).await;
            }
        }
    }

    /// Stamps the gate; the next [`admit`](Self::admit) measures from here.
    pub(crate) fn touch(&mut self) {
        self.last_dispatch = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_first_admission_never_waits() {
        let mut gate = ThrottleGate::new(Duration::from_millis(200), 0);
        let before = Instant::now();
        gate.admit().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_admit_spaces_out_from_touch() {
        let mut gate = ThrottleGate::new(Duration::from_millis(200), 0);
        gate.admit().await;
        gate.touch();

        let stamped = Instant::now();
        gate.admit().await;
        assert!(stamped.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_interval_passes_through() {
        let mut gate = ThrottleGate::new(Duration::from_millis(100), 0);
        gate.touch();
        time::sleep(Duration::from_millis(150)).await;

        let before = Instant::now();
        gate.admit().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_interval_disables_gating() {
        let mut gate = ThrottleGate::new(Duration::ZERO, 0);
        gate.touch();
        let before = Instant::now();
        gate.admit().await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }
}
