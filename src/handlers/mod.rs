//! Handler abstraction and registry.
//!
//! ## Contents
//! - [`Handle`] async handler contract, [`HandlerRef`] shared handle
//! - [`HandlerFn`] closure adapter (fresh future per invocation)
//! - [`HandlerRegistry`] name → ordered handlers, snapshot lookup
//!
//! ## Quick wiring
//! ```text
//! EventBus::subscribe ──► HandlerRegistry::subscribe (append, keep order)
//! dispatch ──► HandlerRegistry::lookup (snapshot) ──► engine invokes each
//! ```

mod handler;
mod handler_fn;
mod registry;

pub use handler::{Handle, HandlerRef};
pub use handler_fn::HandlerFn;
pub use registry::HandlerRegistry;
