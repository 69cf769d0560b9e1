//! Owning-thread execution for the wry backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use skylight_bridge::{Engine, Task};
use tracing::{debug, warn};
use wry::WebView;

use crate::uri;

/// A job queued for the thread that owns the WebView.
pub(crate) enum Job {
    Eval(String),
    LoadUrl(String),
    LoadHtml(String),
    Run(Task),
}

/// [`Engine`] implementation backed by a `wry::WebView`.
///
/// The WebView itself is not `Send` and never leaves its owning thread; this
/// handle is freely shareable. Every operation enqueues a [`Job`] and trips
/// the waker, and the owning thread drains the queue with
/// [`WryEngine::pump`].
pub struct WryEngine {
    jobs: Mutex<Vec<Job>>,
    startup_scripts: Mutex<Vec<String>>,
    attached: AtomicBool,
    waker: Box<dyn Fn() + Send + Sync>,
}

impl WryEngine {
    /// `waker` must nudge the owning thread's event loop into calling
    /// [`WryEngine::pump`] — with winit, an `EventLoopProxy` send.
    pub fn new(waker: impl Fn() + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            jobs: Mutex::new(Vec::new()),
            startup_scripts: Mutex::new(Vec::new()),
            attached: AtomicBool::new(false),
            waker: Box::new(waker),
        })
    }

    /// Startup scripts collected so far, in registration order. Applied by
    /// [`crate::attach_webview`] when the WebView is built.
    pub fn startup_scripts(&self) -> Vec<String> {
        self.startup_scripts.lock().unwrap().clone()
    }

    pub(crate) fn mark_attached(&self) {
        self.attached.store(true, Ordering::Release);
    }

    fn post(&self, job: Job) {
        self.jobs.lock().unwrap().push(job);
        (self.waker)();
    }

    /// Drain queued jobs in FIFO order, including jobs they enqueue in turn.
    /// Must run on the WebView's owning thread.
    pub fn pump(&self, webview: &WebView) {
        loop {
            let drained = std::mem::take(&mut *self.jobs.lock().unwrap());
            if drained.is_empty() {
                break;
            }
            for job in drained {
                if let Err(err) = run_job(webview, job) {
                    warn!(%err, "webview job failed");
                }
            }
        }
    }
}

fn run_job(webview: &WebView, job: Job) -> Result<(), wry::Error> {
    match job {
        Job::Eval(js) => webview.evaluate_script(&js),
        Job::LoadUrl(url) => webview.load_url(&url),
        Job::LoadHtml(html) => webview.load_html(&html),
        Job::Run(task) => {
            task();
            Ok(())
        }
    }
}

impl Engine for WryEngine {
    fn init(&self, js: &str) {
        self.startup_scripts.lock().unwrap().push(js.to_owned());
        if self.attached.load(Ordering::Acquire) {
            // wry cannot add user scripts to an already-built WebView. Cover
            // the current page now; future builds pick the script up from
            // the collected list.
            debug!("startup script registered after attach, evaluating for current page");
            self.post(Job::Eval(js.to_owned()));
        }
    }

    fn eval(&self, js: &str) {
        self.post(Job::Eval(js.to_owned()));
    }

    fn navigate(&self, url: &str) {
        match uri::html_from_uri(url) {
            Some(html) => self.post(Job::LoadHtml(html)),
            None => self.post(Job::LoadUrl(url.to_owned())),
        }
    }

    fn dispatch(&self, task: Task) {
        self.post(Job::Run(task));
    }
}
