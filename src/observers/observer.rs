//! # Observer trait for diagnostic notices.
//!
//! `Observe` is the extension point for plugging log sinks, metrics or
//! alerting into the bus. Each observer is driven by a dedicated worker loop
//! fed from a bounded queue owned by the
//! [`ObserverSet`](crate::observers::ObserverSet).
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) — they do not block the
//!   dispatch pipeline nor other observers.
//! - Each observer declares its queue capacity via
//!   [`Observe::queue_capacity`]; on overflow, notices for that observer are
//!   dropped (with a warning).

use async_trait::async_trait;

use crate::observers::notice::Notice;

/// Contract for diagnostic-notice consumers.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Processes a single notice.
    async fn on_notice(&self, notice: &Notice);

    /// Human-readable name (for warnings about this observer).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred capacity of this observer's queue.
    fn queue_capacity(&self) -> usize {
        256
    }
}
