use std::sync::Arc;

use crate::engine::Engine;
use crate::script;

/// One-shot handle for settling a single pending call.
///
/// Handed to a binding handler alongside the call arguments. Consuming
/// `resolve`/`reject` makes a second settlement of the same call
/// unrepresentable on this path. Safe to move to and settle from any thread;
/// the page is only touched from the owning thread.
pub struct Responder {
    engine: Arc<dyn Engine>,
    seq: String,
}

impl Responder {
    pub(crate) fn new(engine: Arc<dyn Engine>, seq: String) -> Self {
        Self { engine, seq }
    }

    /// The sequence token this responder settles.
    pub fn seq(&self) -> &str {
        &self.seq
    }

    /// Settle the call successfully. `result_json` must be valid JSON text;
    /// it is inlined verbatim into the settling script.
    pub fn resolve(self, result_json: &str) {
        settle(&self.engine, &self.seq, Ok(result_json));
    }

    /// Settle the call with an error. `error_json` must be valid JSON text,
    /// commonly an error object; no shape is enforced.
    pub fn reject(self, error_json: &str) {
        settle(&self.engine, &self.seq, Err(error_json));
    }
}

/// Dispatch the settling script onto the owning thread. Fire-and-forget:
/// posts and returns immediately.
pub(crate) fn settle(engine: &Arc<dyn Engine>, seq: &str, outcome: Result<&str, &str>) {
    let js = script::settle_script(seq, outcome);
    let target = Arc::clone(engine);
    engine.dispatch(Box::new(move || target.eval(&js)));
}
