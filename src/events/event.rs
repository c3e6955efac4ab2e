//! # Event record: name, opaque payload, priority.
//!
//! An [`Event`] is immutable once constructed and cheap to clone — the name
//! and payload are `Arc`-backed, so handlers and diagnostics can share one
//! record without copying data.
//!
//! The bus never inspects the payload. Handlers that know the concrete type
//! recover it with [`Payload::downcast_ref`].
//!
//! ## Example
//! ```rust
//! use evbus::{Event, Payload, Priority};
//!
//! let ev = Event::new("order.created", Payload::new(42u32)).with_priority(Priority::High);
//!
//! assert_eq!(ev.name(), "order.created");
//! assert_eq!(ev.priority(), Priority::High);
//! assert_eq!(ev.payload().downcast_ref::<u32>(), Some(&42));
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Relative importance of an event.
///
/// Carried on the record and visible to handlers; the bus delivers events in
/// dispatch order regardless of priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    /// Returns [`Priority::Medium`].
    fn default() -> Self {
        Priority::Medium
    }
}

/// Opaque, shareable event payload.
///
/// Wraps any `Send + Sync` value behind an `Arc`; cloning shares the same
/// underlying value.
#[derive(Clone)]
pub struct Payload(Arc<dyn Any + Send + Sync>);

impl Payload {
    /// Wraps a value as an opaque payload.
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Payload(Arc::new(value))
    }

    /// Returns a reference to the payload if it is of type `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}

/// Named event delivered to subscribed handlers.
///
/// Identity is by value: two events built from the same parts are
/// interchangeable. The record is owned by the dispatch call that carries it
/// and discarded when dispatch returns.
#[derive(Clone, Debug)]
pub struct Event {
    name: Arc<str>,
    payload: Payload,
    priority: Priority,
}

impl Event {
    /// Creates an event with [`Priority::Medium`].
    pub fn new(name: impl Into<Arc<str>>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
            priority: Priority::default(),
        }
    }

    /// Sets the priority.
    #[inline]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Event name; registry lookup is case-sensitive exact match on this.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared handle to the event name.
    #[inline]
    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Opaque payload.
    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Priority the event was published with.
    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }
}
