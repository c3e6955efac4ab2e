//! Diagnostic notices and observer fan-out.
//!
//! The dispatch pipeline reports failures, retries and completions as
//! structured [`Notice`] records. An [`ObserverSet`] fans each notice out to
//! registered [`Observe`] implementations without blocking dispatch: every
//! observer gets a bounded queue and a dedicated worker task; overflow drops
//! the notice for that observer, and observer panics are contained.
//!
//! ## Contents
//! - [`Notice`], [`NoticeKind`] diagnostic data model
//! - [`Observe`] observer contract
//! - [`ObserverSet`] per-observer queues + workers
//! - [`LogWriter`] stdout sink (`logging` feature, demo/reference)

mod notice;
mod observer;
mod set;

pub use notice::{Notice, NoticeKind};
pub use observer::Observe;
pub use set::ObserverSet;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
