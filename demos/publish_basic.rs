//! # Demo: publish_basic
//!
//! A bus with a 200ms throttle interval, two handlers on one event name, and
//! the built-in [`LogWriter`] observer printing the notice stream.
//!
//! ## Run
//! ```bash
//! cargo run --example publish_basic --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use evbus::{BusConfig, Event, EventBus, HandlerError, HandlerFn, LogWriter, Payload, Priority};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let bus = EventBus::with_observers(
        BusConfig::new(Duration::from_millis(200), 0),
        vec![Arc::new(LogWriter) as _],
    );

    bus.subscribe(
        "sensor.reading",
        HandlerFn::arc("store", |ev: Event| async move {
            let value = ev.payload().downcast_ref::<f64>().copied().unwrap_or(0.0);
            println!("[store] {} = {value}", ev.name());
            Ok::<_, HandlerError>(())
        }),
    )?;
    bus.subscribe(
        "sensor.reading",
        HandlerFn::arc("alert", |ev: Event| async move {
            if ev.priority() == Priority::High {
                println!("[alert] high-priority reading!");
            }
            Ok::<_, HandlerError>(())
        }),
    )?;

    for i in 0..5 {
        let priority = if i == 3 { Priority::High } else { Priority::Medium };
        bus.dispatch(Event::new("sensor.reading", Payload::new(i as f64 * 1.5)).with_priority(priority))
            .await;
    }

    println!("[main] done.");
    Ok(())
}
