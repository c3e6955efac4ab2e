//! # Function-backed handler (`HandlerFn`)
//!
//! [`HandlerFn`] wraps a closure `F: Fn(Event) -> Fut`, producing a fresh
//! future per invocation. The closure receives its own clone of the event
//! (clones are cheap — `Arc`-backed), so the future owns its input and no
//! lifetime threading is needed. Shared state across invocations goes through
//! an explicit `Arc` inside the closure.
//!
//! ## Example
//! ```rust
//! use evbus::{Event, HandlerError, HandlerFn, HandlerRef};
//!
//! let h: HandlerRef = HandlerFn::arc("printer", |ev: Event| async move {
//!     println!("got {}", ev.name());
//!     Ok::<_, HandlerError>(())
//! });
//!
//! assert_eq!(h.name(), "printer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::handler::Handle;

/// Handler implementation backed by a closure.
pub struct HandlerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> HandlerFn<F> {
    /// Creates a new function-backed handler.
    ///
    /// Prefer [`HandlerFn::arc`] when you immediately need a
    /// [`HandlerRef`](crate::HandlerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the handler and returns it as a shared `Arc` handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Handle for HandlerFn<F>
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn call(&self, event: &Event) -> Result<(), HandlerError> {
        (self.f)(event.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Payload;

    #[tokio::test]
    async fn test_closure_sees_event_payload() {
        let h = HandlerFn::arc("probe", |ev: Event| async move {
            match ev.payload().downcast_ref::<u32>() {
                Some(9) => Ok(()),
                _ => Err(HandlerError::fail("unexpected payload")),
            }
        });

        let ev = Event::new("e", Payload::new(9u32));
        assert!(h.call(&ev).await.is_ok());

        let bad = Event::new("e", Payload::new("nope"));
        assert!(h.call(&bad).await.is_err());
    }
}
