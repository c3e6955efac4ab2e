//! # Core handler trait.
//!
//! `Handle` is the contract between the bus and subscriber code: one async
//! method receiving the event, returning success or a [`HandlerError`].
//! Failure is an ordinary return value — the dispatch engine consumes it and
//! decides whether to retry; nothing propagates to the publisher.
//!
//! The shared handle type is [`HandlerRef`] (`Arc<dyn Handle>`). The same
//! `HandlerRef` may be subscribed under several event names, or several times
//! under one name (it will then be invoked once per registration).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;

/// Shared handle to a registered handler.
pub type HandlerRef = Arc<dyn Handle>;

/// # Contract for event handlers.
///
/// Invoked by the dispatch engine, sequentially with respect to other
/// handlers of the same dispatch. Implementations should avoid blocking the
/// async runtime (prefer async I/O and cooperative waits).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use evbus::{Event, Handle, HandlerError};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Handle for Audit {
///     async fn call(&self, event: &Event) -> Result<(), HandlerError> {
///         // write audit record...
///         let _ = event;
///         Ok(())
///     }
///
///     fn name(&self) -> &str { "audit" }
/// }
/// ```
#[async_trait]
pub trait Handle: Send + Sync + 'static {
    /// Processes one delivery attempt for `event`.
    ///
    /// Returning `Err` feeds the retry state machine; returning
    /// [`HandlerError::Fatal`] aborts the delivery without further attempts.
    async fn call(&self, event: &Event) -> Result<(), HandlerError>;

    /// Human-readable identity used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
