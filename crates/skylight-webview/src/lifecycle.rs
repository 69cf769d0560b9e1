//! Building a bridged WebView.

use std::sync::Arc;

use skylight_bridge::Bridge;
use tracing::debug;
use wry::raw_window_handle;
use wry::{WebView, WebViewBuilder};

use crate::config::WebViewConfig;
use crate::engine::WryEngine;

/// Startup shim routing the stub protocol's host channel into wry's ipc.
/// Must be installed ahead of the binding stubs, which call
/// `window.external.invoke`.
pub const EXTERNAL_INVOKE_SCRIPT: &str =
    "window.external = { invoke: function(s) { window.ipc.postMessage(s); } };";

/// Create a WebView as a child of the given window, wired to the bridge.
///
/// Installs the host-channel shim and every startup script the engine has
/// collected (binding stubs included), and forwards inbound ipc bodies to
/// [`Bridge::handle_message`]. Bind before calling this so the stubs ride
/// along on every page load.
///
/// The caller keeps the returned WebView on the owning thread and calls
/// [`WryEngine::pump`] with it whenever the engine's waker fires.
pub fn attach_webview<W: raw_window_handle::HasWindowHandle>(
    window: &W,
    bounds: wry::Rect,
    config: &WebViewConfig,
    engine: &Arc<WryEngine>,
    bridge: &Arc<Bridge>,
) -> Result<WebView, wry::Error> {
    let mut builder = WebViewBuilder::new()
        .with_bounds(bounds)
        .with_transparent(config.transparent)
        .with_devtools(config.devtools)
        .with_focused(false)
        .with_initialization_script(EXTERNAL_INVOKE_SCRIPT);

    for js in engine.startup_scripts() {
        builder = builder.with_initialization_script(&js);
    }

    if let Some(ua) = &config.user_agent {
        builder = builder.with_user_agent(ua);
    }

    // Inbound channel: one call per message, on the platform's delivery
    // thread. The bridge does the rest.
    let ipc_bridge = Arc::clone(bridge);
    builder = builder.with_ipc_handler(move |request| {
        ipc_bridge.handle_message(request.body());
    });

    builder = builder.with_on_page_load_handler(|event, url| {
        let state = match event {
            wry::PageLoadEvent::Started => "started",
            wry::PageLoadEvent::Finished => "finished",
        };
        debug!(state, url = %url, "page load");
    });

    let initial_url;
    if let Some(url) = &config.url {
        builder = builder.with_url(url);
        initial_url = url.clone();
    } else if let Some(html) = &config.html {
        builder = builder.with_html(html);
        initial_url = "about:blank".to_string();
    } else {
        builder = builder.with_html("<html><body></body></html>");
        initial_url = "about:blank".to_string();
    }

    let webview = builder.build_as_child(window)?;
    engine.mark_attached();
    debug!(url = %initial_url, "bridged WebView created");

    Ok(webview)
}
