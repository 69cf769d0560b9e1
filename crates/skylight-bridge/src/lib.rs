//! Native↔script RPC bridge for an embedded browser engine.
//!
//! Script code in the page calls bound stub functions that return promises;
//! the envelope travels through the platform message channel to
//! [`Bridge::handle_message`], which looks the method up in the binding
//! registry and invokes the native handler. The handler eventually settles
//! the call through a one-shot [`Responder`] (or the low-level
//! [`Bridge::settle`]), which dispatches the settling script back onto the
//! engine's owning thread.
//!
//! The bridge core depends only on the narrow [`Engine`] capability
//! interface; platform backends (such as the wry adapter) live in their own
//! crates.

mod bindings;
mod bridge;
mod engine;
mod envelope;
#[cfg(test)]
mod mock;
mod responder;
mod script;

pub use bindings::Handler;
pub use bridge::Bridge;
pub use engine::{Engine, Task};
pub use envelope::Envelope;
pub use responder::Responder;

/// The minimal JSON reader, re-exported for handler authors extracting
/// positional params.
pub use skylight_json as json;
