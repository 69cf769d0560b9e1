//! wry-backed engine for the Skylight bridge.
//!
//! Wraps the `wry` crate to provide:
//! - A shareable [`WryEngine`] implementing the bridge's engine contract,
//!   with all page work queued onto the owning thread
//! - WebView construction wired to a [`skylight_bridge::Bridge`]
//!   (startup stubs, host-channel shim, inbound ipc forwarding)
//! - `data:text/html,` navigation targets decoded to inline markup
//!
//! wry itself fronts the platform engines (WebKitGTK, WKWebView, WebView2),
//! so the bridge core never sees a concrete backend.

pub mod config;
pub mod engine;
pub mod lifecycle;
pub mod uri;

pub use config::WebViewConfig;
pub use engine::WryEngine;
pub use lifecycle::{attach_webview, EXTERNAL_INVOKE_SCRIPT};
