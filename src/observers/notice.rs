//! # Diagnostic notices emitted by the dispatch pipeline.
//!
//! [`NoticeKind`] classifies what happened; [`Notice`] carries the metadata
//! (event name, handler identity, attempt number, delay, reason). Notices
//! are the bus's log stream: observers consume them for logging, metrics or
//! alerting.
//!
//! ## Ordering
//! Each notice has a globally unique sequence number (`seq`) that increases
//! monotonically; use it to restore order when notices are consumed from
//! independent observer queues.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

/// Global sequence counter for notice ordering.
static NOTICE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of diagnostic notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// One delivery attempt failed.
    ///
    /// Sets: `event`, `handler`, `attempt`, `reason`.
    HandlerFailed,

    /// A retry was scheduled after a failed attempt.
    ///
    /// Sets: `event`, `handler`, `attempt` (the attempt that failed),
    /// `delay_ms` (wait before the next attempt).
    RetryScheduled,

    /// The continuation predicate forbade further attempts.
    ///
    /// Sets: `event`, `handler`, `attempt` (last attempt made; 0 when the
    /// delivery was refused before the first attempt).
    RetryExhausted,

    /// A dispatch call completed; every handler reached a terminal state.
    ///
    /// Sets: `event`, `reason` (delivery summary).
    Dispatched,
}

/// Diagnostic record with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - remaining fields are set depending on the [`NoticeKind`]
#[derive(Clone, Debug)]
pub struct Notice {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Notice classification.
    pub kind: NoticeKind,

    /// Event name, if applicable.
    pub event: Option<Arc<str>>,
    /// Handler (or observer) identity, if applicable.
    pub handler: Option<Arc<str>>,
    /// Attempt number (1-based; 0 = refused before the first attempt).
    pub attempt: Option<u32>,
    /// Backoff delay before the next attempt, in milliseconds.
    pub delay_ms: Option<u64>,
    /// Human-readable reason or summary (error message, panic info,
    /// delivery totals).
    pub reason: Option<Arc<str>>,
}

impl Notice {
    /// Creates a notice of the given kind with the current timestamp and the
    /// next sequence number.
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            seq: NOTICE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            event: None,
            handler: None,
            attempt: None,
            delay_ms: None,
            reason: None,
        }
    }

    /// Attaches an event name.
    #[inline]
    pub fn with_event(mut self, event: impl Into<Arc<str>>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Attaches a handler (or observer) identity.
    #[inline]
    pub fn with_handler(mut self, handler: impl Into<Arc<str>>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Attaches an attempt number.
    #[inline]
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Attaches a backoff delay (stored as milliseconds).
    #[inline]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = Some(delay.as_millis().min(u128::from(u64::MAX)) as u64);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Notice::new(NoticeKind::Dispatched);
        let b = Notice::new(NoticeKind::Dispatched);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_builders_set_fields() {
        let n = Notice::new(NoticeKind::RetryScheduled)
            .with_event("e")
            .with_handler("h")
            .with_attempt(2)
            .with_delay(Duration::from_millis(150))
            .with_reason("boom");

        assert_eq!(n.kind, NoticeKind::RetryScheduled);
        assert_eq!(n.event.as_deref(), Some("e"));
        assert_eq!(n.handler.as_deref(), Some("h"));
        assert_eq!(n.attempt, Some(2));
        assert_eq!(n.delay_ms, Some(150));
        assert_eq!(n.reason.as_deref(), Some("boom"));
    }
}
