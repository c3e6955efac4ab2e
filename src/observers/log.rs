//! # Simple logging observer for debugging and demos.
//!
//! [`LogWriter`] prints notices to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [failed] event=order.created handler=billing attempt=1 err="connection refused"
//! [retry] event=order.created handler=billing after_attempt=1 delay=200ms
//! [exhausted] event=order.created handler=billing attempts=3
//! [dispatched] event=order.created
//! ```
//!
//! Not intended for production use — implement a custom
//! [`Observe`](crate::Observe) for structured logging or metrics.

use async_trait::async_trait;

use crate::observers::notice::{Notice, NoticeKind};
use crate::observers::observer::Observe;

/// Stdout logging observer, enabled via the `logging` feature.
pub struct LogWriter;

#[async_trait]
impl Observe for LogWriter {
    async fn on_notice(&self, n: &Notice) {
        match n.kind {
            NoticeKind::HandlerFailed => {
                println!(
                    "[failed] event={:?} handler={:?} attempt={:?} err={:?}",
                    n.event, n.handler, n.attempt, n.reason
                );
            }
            NoticeKind::RetryScheduled => {
                println!(
                    "[retry] event={:?} handler={:?} after_attempt={:?} delay_ms={:?}",
                    n.event, n.handler, n.attempt, n.delay_ms
                );
            }
            NoticeKind::RetryExhausted => {
                println!(
                    "[exhausted] event={:?} handler={:?} attempts={:?}",
                    n.event, n.handler, n.attempt
                );
            }
            NoticeKind::Dispatched => {
                println!("[dispatched] event={:?}", n.event);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log_writer"
    }
}
