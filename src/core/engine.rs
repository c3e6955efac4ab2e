//! # Delivery engine: per-handler retry state machine.
//!
//! One delivery runs one handler against one event until a terminal state:
//!
//! ```text
//! PENDING ──(pred false)──► ABORTED
//!    │ pred true
//!    ▼
//! ATTEMPTING ──Ok──────────► SUCCEEDED
//!    │ Err
//!    ├─(fatal)─────────────► ABORTED
//!    ├─(pred false)────────► ABORTED
//!    ▼ pred true
//! WAITING ──(delay elapsed)─► ATTEMPTING
//! ```
//!
//! ## Rules
//! - The continuation predicate receives the delivery's own attempt count:
//!   0 before the first attempt, `k` after the `k`-th failure. Every handler
//!   gets a fresh counter, so one handler exhausting its attempts cannot
//!   starve the next.
//! - The engine imposes no retry bound of its own — a predicate that always
//!   returns true retries forever, by design.
//! - Failures (including panics) are consumed at the attempt boundary and
//!   reported as notices; nothing propagates to the dispatch caller.
//! - `next_delay` is indexed from 0: the wait after the first failure is
//!   `next_delay(0)`.

use std::any::Any;
use std::time::Duration;

use futures::FutureExt;
use tokio::time;

use crate::error::HandlerError;
use crate::events::Event;
use crate::handlers::HandlerRef;
use crate::observers::{Notice, NoticeKind, ObserverSet};

/// Terminal state of one (event, handler) delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    /// The handler returned cleanly on the recorded attempt.
    Succeeded { attempts: u32 },
    /// The delivery stopped without a clean return; `attempts` is 0 when the
    /// predicate refused the first attempt.
    Aborted { attempts: u32 },
}

/// Runs the delivery state machine for one handler.
pub(crate) async fn deliver(
    event: &Event,
    handler: &HandlerRef,
    should_retry: &(dyn Fn(u32) -> bool + Send + Sync),
    next_delay: &(dyn Fn(u32) -> Duration + Send + Sync),
    observers: &ObserverSet,
) -> Delivery {
    if !should_retry(0) {
        observers.emit(
            Notice::new(NoticeKind::RetryExhausted)
                .with_event(event.name_arc())
                .with_handler(handler.name().to_owned())
                .with_attempt(0),
        );
        return Delivery::Aborted { attempts: 0 };
    }

    let mut attempt: u32 = 0;
    loop {
        attempt += 1;

        let error = match invoke(event, handler).await {
            Ok(()) => return Delivery::Succeeded { attempts: attempt },
            Err(error) => error,
        };

        observers.emit(
            Notice::new(NoticeKind::HandlerFailed)
                .with_event(event.name_arc())
                .with_handler(handler.name().to_owned())
                .with_attempt(attempt)
                .with_reason(error.to_string()),
        );

        if !error.is_retryable() {
            return Delivery::Aborted { attempts: attempt };
        }
        if !should_retry(attempt) {
            observers.emit(
                Notice::new(NoticeKind::RetryExhausted)
                    .with_event(event.name_arc())
                    .with_handler(handler.name().to_owned())
                    .with_attempt(attempt),
            );
            return Delivery::Aborted { attempts: attempt };
        }

        let delay = next_delay(attempt - 1);
        observers.emit(
            Notice::new(NoticeKind::RetryScheduled)
                .with_event(event.name_arc())
                .with_handler(handler.name().to_owned())
                .with_attempt(attempt)
                .with_delay(delay),
        );
        time::sleep(delay).await;
    }
}

/// One attempt, with the panic boundary folded into the result.
async fn invoke(event: &Event, handler: &HandlerRef) -> Result<(), HandlerError> {
    let fut = handler.call(event);
    match std::panic::AssertUnwindSafe(fut).catch_unwind().await {
        Ok(result) => result,
        Err(panic) => Err(HandlerError::fail(panic_reason(panic))),
    }
}

fn panic_reason(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("handler panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("handler panicked: {s}")
    } else {
        "handler panicked".to_owned()
    }
}
