//! Request dispatch for the console.
//!
//! A line of input becomes a [`Request`], the [`CommandRegistry`] routes it
//! to a handler, and the handler answers through the
//! [`Renderer`](crate::output::Renderer). [`run_loop`] ties the pieces to
//! the input stream and owns error recovery.

mod arguments;
mod console;
mod errors;
mod handlers;
mod registry;
mod request;

pub use console::run_loop;
pub use errors::DispatchError;
pub use registry::{CommandRegistry, Handler};
pub use request::{FieldReader, Request};

/// Log target for dispatch-level events.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
