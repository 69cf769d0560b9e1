//! The narrow contract the bridge consumes from a browser engine.
//!
//! Platform backends live elsewhere; the bridge core depends on nothing but
//! these five capabilities.

/// A one-shot job moved onto the engine's owning thread.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Capability interface over an embedded browser engine.
///
/// One thread owns the engine and the page; all script evaluation happens
/// there. Implementations queue work as needed so that every method is safe
/// to call from any thread.
pub trait Engine: Send + Sync {
    /// Inject startup script, guaranteed to execute before any other page
    /// script runs, on every subsequent navigation.
    fn init(&self, js: &str);

    /// Evaluate script in the page asynchronously. Fire-and-forget; the
    /// result is discarded.
    fn eval(&self, js: &str);

    /// Navigate the page to `url`.
    fn navigate(&self, url: &str);

    /// Schedule `task` to run on the engine's owning thread. Tasks execute
    /// in the order they were posted.
    fn dispatch(&self, task: Task);
}
