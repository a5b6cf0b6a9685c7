//! Desktop UI layer.
//!
//! Uses `wry` for the embedded web views and `tao` for windows:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The chrome (tab strip and navigation bar) is HTML/CSS/JS in its own web
//! view and talks to the Rust side over wry IPC.

pub mod webview_app;
