//! Two native bindings behind a small page: a synchronous adder and a
//! worker-thread echo. Run with `cargo run --example calculator`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use skylight_bridge::json::{self, Selector};
use skylight_bridge::{Bridge, Engine};
use skylight_webview::{attach_webview, WebViewConfig, WryEngine};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <body>
    <button id="go">2 + 3</button>
    <pre id="out"></pre>
    <script>
      document.getElementById('go').addEventListener('click', function () {
        add(2, 3)
          .then(function (sum) { return slowEcho('sum is ' + sum); })
          .then(function (echoed) {
            document.getElementById('out').textContent = echoed;
          })
          .catch(function (err) {
            document.getElementById('out').textContent = 'error: ' + JSON.stringify(err);
          });
      });
    </script>
  </body>
</html>"#;

struct App {
    engine: Arc<WryEngine>,
    bridge: Arc<Bridge>,
    window: Option<Window>,
    webview: Option<wry::WebView>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("skylight calculator")
                    .with_inner_size(LogicalSize::new(480.0, 360.0)),
            )
            .expect("create window");
        let bounds = wry::Rect {
            position: wry::dpi::LogicalPosition::new(0.0, 0.0).into(),
            size: wry::dpi::LogicalSize::new(480.0, 360.0).into(),
        };
        let config = WebViewConfig::with_html(PAGE);
        let webview = attach_webview(&window, bounds, &config, &self.engine, &self.bridge)
            .expect("attach webview");
        self.window = Some(window);
        self.webview = Some(webview);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, _event: ()) {
        // The engine's waker fired: drain queued page work on this thread.
        if let Some(webview) = &self.webview {
            self.engine.pump(webview);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(webview) = &self.webview {
                    let _ = webview.set_bounds(wry::Rect {
                        position: wry::dpi::LogicalPosition::new(0.0, 0.0).into(),
                        size: wry::dpi::PhysicalSize::new(size.width, size.height).into(),
                    });
                }
            }
            _ => {}
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let event_loop = EventLoop::<()>::with_user_event()
        .build()
        .expect("event loop");
    let proxy = event_loop.create_proxy();
    let engine = WryEngine::new(move || {
        let _ = proxy.send_event(());
    });
    let bridge = Arc::new(Bridge::new(engine.clone() as Arc<dyn Engine>));

    bridge.bind_sync("add", |params| {
        let a = number(params, 0)?;
        let b = number(params, 1)?;
        Ok((a + b).to_string())
    });

    // Settled later, from a worker thread; the bridge hops back onto the
    // event loop before touching the page.
    bridge.bind("slowEcho", |responder, params| {
        let text = json::parse(params, Selector::Index(0)).unwrap_or_default();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            responder.resolve(&json::escape(&text));
        });
    });

    let mut app = App {
        engine,
        bridge,
        window: None,
        webview: None,
    };
    event_loop.run_app(&mut app).expect("run event loop");
}

fn number(params: &str, index: usize) -> Result<f64, String> {
    json::parse(params, Selector::Index(index))
        .map_err(|err| json::escape(&err.to_string()))?
        .parse()
        .map_err(|err: std::num::ParseFloatError| json::escape(&err.to_string()))
}
