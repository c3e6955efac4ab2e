//! # evbus
//!
//! **evbus** is a throttled in-process event bus for Rust.
//!
//! Publishers post named events with payloads and priority; any number of
//! handlers subscribe to event names; the bus serializes delivery, enforces a
//! minimum spacing between dispatches, and rides out handler failures with
//! bounded, jittered-backoff retries.
//!
//! ## Architecture
//! ```text
//!  Publisher ──► EventBus::dispatch(event)
//!                    │
//!                    │  one dispatch at a time (bus-wide lock)
//!                    ▼
//!              ┌──────────────────────────────────────────────┐
//!              │ ThrottleGate   wait out min spacing          │
//!              │ Registry       name → handlers (snapshot)    │
//!              │ Engine         per-handler retry machine:    │
//!              │                attempt → fail → backoff →    │
//!              │                attempt … until Ok/refused    │
//!              └──────┬───────────────────────────────────────┘
//!                     │ Notices (failures, retries, completions)
//!                     ▼
//!              ObserverSet ──► worker per observer ──► on_notice()
//! ```
//!
//! ## Guarantees
//! - Handlers of one dispatch run sequentially, in registration order.
//! - Dispatch calls observe a strict total order; two events' handler loops
//!   never interleave.
//! - A failing (or panicking) handler can neither fail the dispatch call nor
//!   prevent later handlers from running.
//! - Retry delays grow exponentially and are jittered, so simultaneous
//!   failers don't wake in lockstep.
//!
//! ## Features
//! | Area           | Description                                       | Key types                          |
//! |----------------|---------------------------------------------------|------------------------------------|
//! | **Events**     | Named records with opaque payloads and priority.  | [`Event`], [`Payload`], [`Priority`] |
//! | **Handlers**   | Async subscribers; closures or trait impls.       | [`Handle`], [`HandlerFn`], [`HandlerRef`] |
//! | **Dispatch**   | Throttled, serialized, fault-isolated delivery.   | [`EventBus`], [`BusConfig`]        |
//! | **Retries**    | Exponential backoff with configurable jitter.     | [`RetryPolicy`], [`Jitter`]        |
//! | **Diagnostics**| Structured notices fanned out to observers.       | [`Notice`], [`Observe`], [`ObserverSet`] |
//! | **Errors**     | Typed bus and handler errors.                     | [`BusError`], [`HandlerError`]     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```no_run
//! use std::time::Duration;
//! use evbus::{
//!     BusConfig, Event, EventBus, HandlerError, HandlerFn, Payload, Priority, Publisher,
//!     RetryPolicy,
//! };
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Dispatches at most once every 200ms.
//!     let bus = EventBus::new(BusConfig::new(Duration::from_millis(200), 0));
//!
//!     bus.subscribe(
//!         "order.created",
//!         HandlerFn::arc("billing", |ev: Event| async move {
//!             let order = ev.payload().downcast_ref::<u64>().copied();
//!             println!("charging for order {order:?}");
//!             Ok::<_, HandlerError>(())
//!         }),
//!     )?;
//!
//!     // Up to 3 attempts per handler, jittered exponential backoff between.
//!     Publisher::new(bus)
//!         .publish_with_retry(
//!             "order.created",
//!             Payload::new(42u64),
//!             Priority::High,
//!             3,
//!             RetryPolicy::default(),
//!         )
//!         .await;
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod handlers;
mod observers;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{BusConfig, EventBus, Publisher};
pub use error::{BusError, HandlerError};
pub use events::{Event, Payload, Priority};
pub use handlers::{Handle, HandlerFn, HandlerRef, HandlerRegistry};
pub use observers::{Notice, NoticeKind, Observe, ObserverSet};
pub use policies::{Jitter, RetryPolicy};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
