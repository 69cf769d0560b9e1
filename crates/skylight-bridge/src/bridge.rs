//! The bridge proper: registry plus dispatch plus the resolution path.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::bindings::BindingTable;
use crate::engine::Engine;
use crate::envelope::Envelope;
use crate::responder::{settle, Responder};
use crate::script;

/// RPC layer connecting native handlers to script-callable names.
///
/// Script calls a bound stub, the platform channel delivers the envelope to
/// [`Bridge::handle_message`], the handler eventually settles the call, and
/// the settling script is dispatched back onto the engine's owning thread.
pub struct Bridge {
    engine: Arc<dyn Engine>,
    bindings: Mutex<BindingTable>,
}

impl Bridge {
    pub fn new(engine: Arc<dyn Engine>) -> Self {
        Self {
            engine,
            bindings: Mutex::new(BindingTable::default()),
        }
    }

    /// The engine this bridge drives.
    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Register `name` as a script-callable function.
    ///
    /// Installs the page-side stub for every subsequent load and inserts the
    /// handler into the registry. `name` is embedded verbatim into generated
    /// script — identifier safety is the caller's responsibility. Binding
    /// the same name again replaces the handler but appends another stub
    /// install fragment.
    pub fn bind(&self, name: &str, handler: impl Fn(Responder, &str) + Send + Sync + 'static) {
        self.engine.init(&script::stub_script(name));
        let replaced = self
            .bindings
            .lock()
            .unwrap()
            .insert(name, Arc::new(handler));
        if replaced {
            debug!(name, "binding replaced");
        } else {
            debug!(name, "binding registered");
        }
    }

    /// Register a synchronous binding: `f` runs on the delivery thread and
    /// its returned JSON settles the call immediately (`Ok` resolves, `Err`
    /// rejects).
    pub fn bind_sync(
        &self,
        name: &str,
        f: impl Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    ) {
        self.bind(name, move |responder, params| match f(params) {
            Ok(result) => responder.resolve(&result),
            Err(error) => responder.reject(&error),
        });
    }

    /// Settle the pending call `seq`.
    ///
    /// Safe to call from any thread: the script resolving or rejecting the
    /// page-side promise is dispatched onto the owning thread, never
    /// evaluated in place. The payload is inlined verbatim and must be valid
    /// JSON. Settling the same `seq` twice is undefined — prefer the
    /// one-shot [`Responder`] handed to handlers.
    pub fn settle(&self, seq: &str, outcome: Result<&str, &str>) {
        settle(&self.engine, seq, outcome);
    }

    /// Entry point for the platform message channel: called once per inbound
    /// message body, on whatever thread the platform delivers on. The
    /// matching handler runs synchronously on that thread.
    ///
    /// Malformed bodies and unknown methods are dropped with no error
    /// surface — absence and parse failure are deliberately
    /// indistinguishable on this path.
    pub fn handle_message(&self, body: &str) {
        let Some(envelope) = Envelope::parse(body) else {
            warn!(body_len = body.len(), "message rejected: malformed envelope");
            return;
        };
        // Clone the handler out so the lock is released before user code
        // runs; a handler may re-enter `bind`.
        let handler = self.bindings.lock().unwrap().get(&envelope.method);
        let Some(handler) = handler else {
            debug!(method = %envelope.method, "no binding for method, dropping message");
            return;
        };
        debug!(method = %envelope.method, seq = %envelope.seq, "dispatching call");
        let responder = Responder::new(Arc::clone(&self.engine), envelope.seq);
        handler(responder, &envelope.params);
    }

    /// Inject startup script ahead of page scripts on future loads.
    pub fn init(&self, js: &str) {
        self.engine.init(js);
    }

    /// Evaluate script in the page, fire-and-forget.
    pub fn eval(&self, js: &str) {
        self.engine.eval(js);
    }

    /// Navigate the page.
    pub fn navigate(&self, url: &str) {
        self.engine.navigate(url);
    }

    /// How many names are currently bound.
    pub fn binding_count(&self) -> usize {
        self.bindings.lock().unwrap().len()
    }
}
