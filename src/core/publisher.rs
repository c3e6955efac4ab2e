//! # Publisher: event-construction facade over the bus.
//!
//! A [`Publisher`] packages name + payload + priority into an [`Event`] and
//! hands it to the bus, optionally with an attempt budget and a
//! [`RetryPolicy`]. It adds no delivery logic of its own — everything hard
//! lives in the dispatch pipeline.
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use evbus::{BusConfig, EventBus, Payload, Priority, Publisher, RetryPolicy};
//!
//! # async fn demo() {
//! let bus = EventBus::new(BusConfig::default());
//! let publisher = Publisher::new(bus);
//!
//! publisher.publish("metrics.flush", Payload::new(128u64), Priority::Low).await;
//! publisher
//!     .publish_with_retry(
//!         "billing.charge",
//!         Payload::new("invoice-7"),
//!         Priority::High,
//!         3,
//!         RetryPolicy::default(),
//!     )
//!     .await;
//! # }
//! ```

use crate::core::bus::EventBus;
use crate::events::{Event, Payload, Priority};
use crate::policies::RetryPolicy;

/// Thin event-producing facade; cheap to clone alongside its bus.
#[derive(Clone)]
pub struct Publisher {
    bus: EventBus,
}

impl Publisher {
    /// Wraps a bus handle.
    pub fn new(bus: EventBus) -> Self {
        Self { bus }
    }

    /// Constructs an event and dispatches it, one attempt per handler.
    pub async fn publish(&self, name: &str, payload: Payload, priority: Priority) {
        let event = Event::new(name, payload).with_priority(priority);
        self.bus.dispatch(event).await;
    }

    /// Constructs an event and dispatches it with an attempt budget.
    ///
    /// Each handler gets at most `attempts` invocations; waits between them
    /// follow `policy`. `attempts = 0` delivers to nobody (the throttle stamp
    /// still updates).
    pub async fn publish_with_retry(
        &self,
        name: &str,
        payload: Payload,
        priority: Priority,
        attempts: u32,
        policy: RetryPolicy,
    ) {
        let event = Event::new(name, payload).with_priority(priority);
        self.bus
            .dispatch_with_retry(event, move |attempt| attempt < attempts, move |attempt| {
                policy.delay(attempt)
            })
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BusConfig;
    use crate::error::HandlerError;
    use crate::handlers::HandlerFn;
    use crate::policies::Jitter;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_publish_applies_priority_and_payload() {
        let bus = EventBus::new(BusConfig::default());
        let seen = Arc::new(std::sync::Mutex::new(None));
        let sink = Arc::clone(&seen);

        bus.subscribe(
            "evt",
            HandlerFn::arc("probe", move |ev: Event| {
                let sink = Arc::clone(&sink);
                async move {
                    let n = *ev.payload().downcast_ref::<u64>().unwrap();
                    *sink.lock().unwrap() = Some((n, ev.priority()));
                    Ok::<_, HandlerError>(())
                }
            }),
        )
        .unwrap();

        Publisher::new(bus)
            .publish("evt", Payload::new(5u64), Priority::Low)
            .await;
        assert_eq!(*seen.lock().unwrap(), Some((5, Priority::Low)));
    }

    #[tokio::test]
    async fn test_publish_with_retry_honors_attempt_budget() {
        let bus = EventBus::new(BusConfig::default());
        let calls = Arc::new(AtomicU32::new(0));
        let seen = Arc::clone(&calls);

        bus.subscribe(
            "evt",
            HandlerFn::arc("always-fails", move |_ev: Event| {
                let seen = Arc::clone(&seen);
                async move {
                    seen.fetch_add(1, Ordering::SeqCst);
                    Err::<(), _>(HandlerError::fail("boom"))
                }
            }),
        )
        .unwrap();

        let policy = RetryPolicy {
            base: Duration::ZERO,
            cap: Duration::ZERO,
            factor: 1.0,
            jitter: Jitter::None,
        };
        Publisher::new(bus)
            .publish_with_retry("evt", Payload::new(()), Priority::Medium, 4, policy)
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }
}
