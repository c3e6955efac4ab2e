//! Error types used by the bus and by handlers.
//!
//! Two enums cover the error surface:
//!
//! - [`BusError`] — caller-contract violations raised by registry operations.
//! - [`HandlerError`] — failures returned by handler invocations.
//!
//! Handler failures never surface to the dispatch caller: the engine recovers
//! them locally and feeds them into the retry machinery. Both types provide
//! `as_label` for stable snake_case identifiers in logs/metrics.

use thiserror::Error;

/// # Errors raised by bus operations themselves.
///
/// These are fail-fast contract violations reported at the call that
/// introduced them (e.g. `subscribe`), never deferred to dispatch time.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum BusError {
    /// Subscription attempted with an empty event name.
    #[error("event name must be non-empty")]
    EmptyEventName,
}

impl BusError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evbus::BusError;
    ///
    /// assert_eq!(BusError::EmptyEventName.as_label(), "bus_empty_event_name");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BusError::EmptyEventName => "bus_empty_event_name",
        }
    }
}

/// # Failures returned by handler invocations.
///
/// A handler signals the outcome of one delivery attempt by returning
/// `Result<(), HandlerError>`. [`HandlerError::Fail`] is eligible for retry;
/// [`HandlerError::Fatal`] aborts the delivery without consulting the retry
/// predicate.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Attempt failed but a later attempt may succeed.
    #[error("handler failed: {reason}")]
    Fail {
        /// Human-readable failure description.
        reason: String,
    },

    /// Non-recoverable failure; the delivery is aborted immediately.
    #[error("handler failed fatally (no retry): {reason}")]
    Fatal {
        /// Human-readable failure description.
        reason: String,
    },
}

impl HandlerError {
    /// Creates a retryable failure.
    pub fn fail(reason: impl Into<String>) -> Self {
        HandlerError::Fail {
            reason: reason.into(),
        }
    }

    /// Creates a non-retryable failure.
    pub fn fatal(reason: impl Into<String>) -> Self {
        HandlerError::Fatal {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Fatal { .. } => "handler_fatal",
        }
    }

    /// Indicates whether the failure is eligible for another attempt.
    ///
    /// # Example
    /// ```
    /// use evbus::HandlerError;
    ///
    /// assert!(HandlerError::fail("boom").is_retryable());
    /// assert!(!HandlerError::fatal("nope").is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, HandlerError::Fail { .. })
    }
}
