//! # Jitter: randomized perturbation of retry delays.
//!
//! [`Jitter`] decorrelates retries from handlers or processes that fail at
//! the same moment. Without it, every failing party sleeps the same computed
//! delay and wakes up together.
//!
//! - [`Jitter::None`] — exact delay, fully predictable
//! - [`Jitter::Full`] — uniform in `[0, delay]`
//! - [`Jitter::Equal`] — `delay/2 + uniform[0, delay/2]`
//! - [`Jitter::Spread`] — uniform in `delay ± delay·ratio`

use std::time::Duration;

use rand::Rng;

/// Randomization applied to a computed backoff delay.
///
/// `Full` spreads load the hardest but can collapse a delay to zero; `Equal`
/// keeps at least half of the computed delay; `Spread` keeps the delay
/// centered and lets the window width be configured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jitter {
    /// No randomization. Use for single-retrier setups or deterministic tests.
    None,

    /// Uniform in `[0, delay]`.
    Full,

    /// `delay/2 + uniform[0, delay/2]`; preserves ~75% of the delay on average.
    Equal,

    /// Uniform in `[delay·(1-ratio), delay·(1+ratio)]`, clamped at zero.
    ///
    /// `ratio` is the half-width of the randomization window relative to the
    /// delay; `0.2` means ±20%. Values are expected in `[0.0, 1.0]`.
    Spread {
        ratio: f64,
    },
}

impl Default for Jitter {
    /// Returns [`Jitter::Equal`].
    fn default() -> Self {
        Jitter::Equal
    }
}

impl Jitter {
    /// Applies this jitter to `delay`.
    pub fn apply(&self, delay: Duration) -> Duration {
        let ms = delay.as_millis().min(u128::from(u64::MAX)) as u64;
        if ms == 0 {
            return Duration::ZERO;
        }

        let mut rng = rand::rng();
        let jittered = match self {
            Jitter::None => return delay,
            Jitter::Full => rng.random_range(0..=ms),
            Jitter::Equal => {
                let half = ms / 2;
                half + rng.random_range(0..=ms - half)
            }
            Jitter::Spread { ratio } => {
                let ratio = ratio.clamp(0.0, 1.0);
                let half_window = (ms as f64 * ratio) as u64;
                if half_window == 0 {
                    return delay;
                }
                let lo = ms.saturating_sub(half_window);
                rng.random_range(lo..=ms.saturating_add(half_window))
            }
        };
        Duration::from_millis(jittered)
    }
}
