use std::collections::HashMap;
use std::sync::Arc;

use crate::responder::Responder;

/// A native handler for one bound name, invoked with the one-shot responder
/// and the raw params JSON. The closure owns whatever state it needs.
pub type Handler = Arc<dyn Fn(Responder, &str) + Send + Sync + 'static>;

/// Script-visible name -> handler.
///
/// Owned by the bridge for its whole lifetime; there is no unbind. Entries
/// are keyed by name only — rebinding replaces the prior handler.
#[derive(Default)]
pub(crate) struct BindingTable {
    entries: HashMap<String, Handler>,
}

impl BindingTable {
    /// Insert or replace. Returns `true` when a prior entry was replaced.
    pub(crate) fn insert(&mut self, name: &str, handler: Handler) -> bool {
        self.entries.insert(name.to_owned(), handler).is_some()
    }

    pub(crate) fn get(&self, name: &str) -> Option<Handler> {
        self.entries.get(name).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Handler {
        Arc::new(|_, _| {})
    }

    #[test]
    fn insert_reports_replacement() {
        let mut table = BindingTable::default();
        assert!(!table.insert("add", noop()));
        assert!(table.insert("add", noop()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_is_by_exact_name() {
        let mut table = BindingTable::default();
        table.insert("add", noop());
        assert!(table.get("add").is_some());
        assert!(table.get("Add").is_none());
        assert!(table.get("add2").is_none());
    }
}
