//! # EventBus: public dispatch surface.
//!
//! One bus instance owns the handler registry, the throttle gate and the
//! observer fan-out. The handle is cheap to clone (`Arc`-backed); clones
//! share all state.
//!
//! ## Serialization
//! A single async mutex guards {throttle admission + the whole per-dispatch
//! handler loop, retry sleeps included, + the throttle stamp}. At most one
//! dispatch runs at a time; a second concurrent dispatch blocks until the
//! first fully completes, and dispatch calls observe a strict total order.
//! The registry lock is separate: subscribe/unsubscribe contend with an
//! in-flight dispatch only for the instant of the handler-list snapshot.
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use evbus::{BusConfig, Event, EventBus, HandlerError, HandlerFn, Payload};
//!
//! # async fn demo() -> Result<(), evbus::BusError> {
//! let bus = EventBus::new(BusConfig::new(Duration::from_millis(200), 0));
//!
//! bus.subscribe("greeting", HandlerFn::arc("printer", |ev: Event| async move {
//!     println!("payload: {:?}", ev.payload().downcast_ref::<&str>());
//!     Ok::<_, HandlerError>(())
//! }))?;
//!
//! bus.dispatch(Event::new("greeting", Payload::new("hello"))).await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::core::config::BusConfig;
use crate::core::engine;
use crate::core::gate::ThrottleGate;
use crate::error::BusError;
use crate::events::Event;
use crate::handlers::{HandlerRef, HandlerRegistry};
use crate::observers::{Notice, NoticeKind, Observe, ObserverSet};

struct Inner {
    registry: HandlerRegistry,
    // The bus-wide dispatch lock; holding the gate state inside it makes the
    // throttle read-modify-write atomic with the handler loop.
    gate: Mutex<ThrottleGate>,
    observers: ObserverSet,
}

/// Throttled in-process event bus with retrying, fault-isolated dispatch.
///
/// Cloning shares the underlying bus. All state lives for exactly as long as
/// the last handle.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<Inner>,
}

impl EventBus {
    /// Creates a bus with no observers attached.
    pub fn new(config: BusConfig) -> Self {
        Self::with_observers(config, Vec::new())
    }

    /// Creates a bus and attaches diagnostic observers.
    ///
    /// Spawns one worker task per observer; requires a running tokio runtime
    /// when `observers` is non-empty.
    pub fn with_observers(config: BusConfig, observers: Vec<Arc<dyn Observe>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry: HandlerRegistry::new(),
                gate: Mutex::new(ThrottleGate::new(
                    config.throttle_interval,
                    config.throttle_limit,
                )),
                observers: ObserverSet::new(observers),
            }),
        }
    }

    /// Registers `handler` under `name`; duplicates are permitted and will be
    /// invoked once per registration.
    ///
    /// # Errors
    /// [`BusError::EmptyEventName`] if `name` is empty.
    pub fn subscribe(&self, name: &str, handler: HandlerRef) -> Result<(), BusError> {
        self.inner.registry.subscribe(name, handler)
    }

    /// Removes the first registration of `handler` under `name`; silent no-op
    /// when either is absent.
    pub fn unsubscribe(&self, name: &str, handler: &HandlerRef) {
        self.inner.registry.unsubscribe(name, handler)
    }

    /// Number of handlers currently registered under `name`.
    pub fn handler_count(&self, name: &str) -> usize {
        self.inner.registry.handler_count(name)
    }

    /// Delivers `event` to every handler registered under its name, one
    /// attempt each, in registration order.
    ///
    /// Handler failures are reported to observers and never abort the call
    /// nor skip later handlers. Returns once every handler has been tried
    /// (or immediately after the throttle stamp when none are registered).
    pub async fn dispatch(&self, event: Event) {
        // Single attempt per handler: the retry machine driven by a
        // one-attempt budget.
        self.dispatch_with_retry(event, |attempt| attempt < 1, |_| Duration::ZERO)
            .await;
    }

    /// Delivers `event` with a caller-supplied retry policy.
    ///
    /// `should_retry` is polled with each handler's own attempt count — 0
    /// before its first attempt, `k` after its `k`-th failure — so one
    /// handler exhausting its attempts never starves the next. `next_delay(n)`
    /// yields the wait after a failed attempt, indexed from 0. A predicate
    /// that always returns true retries forever — bounding it is the caller's
    /// responsibility; a deadline can be layered by making it time-aware.
    pub async fn dispatch_with_retry<P, D>(&self, event: Event, should_retry: P, next_delay: D)
    where
        P: Fn(u32) -> bool + Send + Sync,
        D: Fn(u32) -> Duration + Send + Sync,
    {
        let mut gate = self.inner.gate.lock().await;
        gate.admit().await;

        let handlers = self.inner.registry.lookup(event.name());
        let mut delivered = 0usize;
        let mut attempts_total = 0u32;
        for handler in &handlers {
            let outcome = engine::deliver(
                &event,
                handler,
                &should_retry,
                &next_delay,
                &self.inner.observers,
            )
            .await;
            match outcome {
                engine::Delivery::Succeeded { attempts } => {
                    delivered += 1;
                    attempts_total = attempts_total.saturating_add(attempts);
                }
                engine::Delivery::Aborted { attempts } => {
                    attempts_total = attempts_total.saturating_add(attempts);
                }
            }
        }

        if !handlers.is_empty() {
            self.inner.observers.emit(
                Notice::new(NoticeKind::Dispatched)
                    .with_event(event.name_arc())
                    .with_reason(format!(
                        "{delivered}/{} handlers delivered, {attempts_total} attempts",
                        handlers.len()
                    )),
            );
        }

        // Stamped after the handler loop: spacing to the next dispatch starts
        // from the end of this one.
        gate.touch();
    }
}
