//! # Handler registry: event name → ordered handlers.
//!
//! Keys are case-sensitive exact-match strings. Each key holds its handlers
//! in insertion order; duplicates are permitted and invoked once per
//! registration.
//!
//! ## Locking
//! The registry carries its own `RwLock`, deliberately finer-grained than
//! the bus-wide dispatch lock: [`HandlerRegistry::lookup`] clones the handler
//! list (a snapshot of `Arc` handles), so a dispatch in flight never holds
//! the registry lock across handler execution, and subscribe/unsubscribe
//! contend with dispatch only for the instant of the snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::BusError;
use crate::handlers::handler::HandlerRef;

/// Concurrent map from event name to the ordered handlers subscribed to it.
#[derive(Default)]
pub struct HandlerRegistry {
    entries: RwLock<HashMap<Arc<str>, Vec<HandlerRef>>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `handler` to the list for `name`, creating the list if absent.
    ///
    /// Visible to subsequent lookups immediately and atomically with respect
    /// to other registry operations. No deduplication is performed.
    ///
    /// # Errors
    /// [`BusError::EmptyEventName`] if `name` is empty.
    pub fn subscribe(&self, name: &str, handler: HandlerRef) -> Result<(), BusError> {
        if name.is_empty() {
            return Err(BusError::EmptyEventName);
        }
        let mut entries = self.entries.write();
        entries.entry(Arc::from(name)).or_default().push(handler);
        Ok(())
    }

    /// Removes the first entry under `name` that is the same handler
    /// (`Arc` identity).
    ///
    /// Silent no-op when the name or handler is absent. The key is dropped
    /// once its list empties.
    pub fn unsubscribe(&self, name: &str, handler: &HandlerRef) {
        let mut entries = self.entries.write();
        if let Some(list) = entries.get_mut(name) {
            if let Some(pos) = list.iter().position(|h| Arc::ptr_eq(h, handler)) {
                list.remove(pos);
            }
            if list.is_empty() {
                entries.remove(name);
            }
        }
    }

    /// Returns a snapshot of the handlers for `name`, in registration order.
    ///
    /// The returned `Vec` is isolated from concurrent mutation: iterating it
    /// during dispatch is unaffected by subscribe/unsubscribe on other
    /// threads.
    pub fn lookup(&self, name: &str) -> Vec<HandlerRef> {
        self.entries.read().get(name).cloned().unwrap_or_default()
    }

    /// Number of handlers currently registered under `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.entries.read().get(name).map_or(0, Vec::len)
    }
}
