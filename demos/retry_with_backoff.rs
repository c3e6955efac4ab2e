//! # Demo: retry_with_backoff
//!
//! A handler that fails twice before succeeding, retried under an attempt
//! budget with jittered exponential backoff.
//!
//! ## Flow
//! ```text
//! dispatch_with_retry(event, |attempt| attempt < 5, policy)
//!   ├─► attempt 1 → Err("boom #1")   [failed]  [retry delay≈100ms]
//!   ├─► attempt 2 → Err("boom #2")   [failed]  [retry delay≈200ms]
//!   └─► attempt 3 → Ok               [dispatched]
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example retry_with_backoff --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use evbus::{
    BusConfig, Event, EventBus, HandlerError, HandlerFn, Jitter, LogWriter, Payload, RetryPolicy,
};

static FAILURES_LEFT: AtomicU32 = AtomicU32::new(2);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = EventBus::with_observers(BusConfig::default(), vec![Arc::new(LogWriter) as _]);

    bus.subscribe(
        "job.run",
        HandlerFn::arc("flaky", |ev: Event| async move {
            if FAILURES_LEFT.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(HandlerError::fail(format!("boom while running {}", ev.name())));
            }
            println!("[flaky] finally made it");
            Ok(())
        }),
    )?;

    let policy = RetryPolicy {
        base: Duration::from_millis(100),
        cap: Duration::from_secs(2),
        factor: 2.0,
        jitter: Jitter::Equal,
    };

    bus.dispatch_with_retry(
        Event::new("job.run", Payload::new("nightly-rollup")),
        |attempt| attempt < 5,
        move |attempt| policy.delay(attempt),
    )
    .await;

    println!("[main] done.");
    Ok(())
}
