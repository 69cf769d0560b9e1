//! In-memory engine double for unit tests.

use std::sync::{Arc, Mutex};

use crate::engine::{Engine, Task};

/// Records every script it is handed and queues dispatched tasks;
/// [`MockEngine::run_pending`] plays the part of the owning thread.
#[derive(Default)]
pub(crate) struct MockEngine {
    pub init_scripts: Mutex<Vec<String>>,
    pub evaluated: Mutex<Vec<String>>,
    pub navigations: Mutex<Vec<String>>,
    tasks: Mutex<Vec<Task>>,
}

impl MockEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Drain and run queued tasks in FIFO order, including any they enqueue
    /// in turn.
    pub fn run_pending(&self) {
        loop {
            let drained: Vec<Task> = std::mem::take(&mut *self.tasks.lock().unwrap());
            if drained.is_empty() {
                break;
            }
            for task in drained {
                task();
            }
        }
    }
}

impl Engine for MockEngine {
    fn init(&self, js: &str) {
        self.init_scripts.lock().unwrap().push(js.to_owned());
    }

    fn eval(&self, js: &str) {
        self.evaluated.lock().unwrap().push(js.to_owned());
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_owned());
    }

    fn dispatch(&self, task: Task) {
        self.tasks.lock().unwrap().push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatched_tasks_run_in_post_order() {
        let engine = MockEngine::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for n in 0..4 {
            let order = Arc::clone(&order);
            engine.dispatch(Box::new(move || order.lock().unwrap().push(n)));
        }

        assert!(order.lock().unwrap().is_empty());
        engine.run_pending();
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }
}
