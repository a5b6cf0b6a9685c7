//! Host shell built on `tao` windows and `wry` web views.
//!
//! Architecture:
//! - Each window holds a chrome web view (tab strip, navigation buttons,
//!   address bar) in a fixed strip at the top, and one child content web view
//!   per tab filling the rest. Only the active tab's content view is visible.
//! - Chrome → Rust via `window.ipc.postMessage()` JSON commands, forwarded to
//!   the event loop as `UserEvent::Chrome`.
//! - Rust → chrome via `evaluate_script` with a `ChromeSnapshot`.
//! - Content views have no privileged IPC. Their only message is a history
//!   report used to answer back/forward availability.
//! - On Linux the views live in a `gtk::Fixed` inside the window's vbox so
//!   they can overlap and take explicit bounds.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy, EventLoopWindowTarget};
use tao::window::{Window, WindowBuilder, WindowId};
use tracing::{debug, error, info, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{Rect, WebView, WebViewBuilder};

use crate::app::App;
use crate::managers::tab_manager::TabManagerTrait;
use crate::ipc_handler::{self, ChromeCommand, Refresh, TitleUpdate};
use crate::managers::title_sync::TitleGate;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::shell::{self, LifecyclePolicy};
use crate::types::errors::{ShellError, ViewError};
use crate::types::settings::ShellSettings;
use crate::views::{BrowserView, ViewFactory};

const CHROME_HTML: &str = include_str!("../../resources/ui/chrome.html");
const CONTENT_JS: &str = include_str!("../../resources/ui/content_history.js");

/// Height of the chrome strip in logical pixels.
const CHROME_HEIGHT: f64 = 84.0;

#[derive(Debug)]
enum UserEvent {
    Chrome {
        window_id: WindowId,
        command: ChromeCommand,
    },
    TitleChanged {
        window_id: WindowId,
        tab_id: String,
        title: String,
    },
}

// ─── Layout ───

fn logical_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width, size.height)
}

fn chrome_bounds(window: &Window) -> Rect {
    let (width, _) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, CHROME_HEIGHT).into(),
    }
}

fn content_bounds(window: &Window) -> Rect {
    let (width, height) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, CHROME_HEIGHT).into(),
        size: LogicalSize::new(width, (height - CHROME_HEIGHT).max(0.0)).into(),
    }
}

// ─── Window surface ───

/// The native window plus whatever container child web views attach to.
struct Surface {
    #[cfg(target_os = "linux")]
    fixed: gtk::Fixed,
    window: Window,
}

impl Surface {
    fn new(window: Window) -> Result<Self, ShellError> {
        #[cfg(target_os = "linux")]
        {
            use gtk::prelude::*;
            use tao::platform::unix::WindowExtUnix;

            let vbox = window
                .default_vbox()
                .ok_or_else(|| ShellError::Window("missing GTK vbox".to_string()))?;
            let fixed = gtk::Fixed::new();
            vbox.pack_start(&fixed, true, true, 0);
            fixed.show_all();
            Ok(Self { fixed, window })
        }

        #[cfg(not(target_os = "linux"))]
        {
            Ok(Self { window })
        }
    }

    fn build<'a>(&'a self, builder: WebViewBuilder<'a>) -> wry::Result<WebView> {
        #[cfg(target_os = "linux")]
        {
            use wry::WebViewBuilderExtUnix;
            builder.build_gtk(&self.fixed)
        }

        #[cfg(not(target_os = "linux"))]
        {
            builder.build_as_child(&self.window)
        }
    }
}

// ─── Content views ───

#[derive(Debug, Default)]
struct HistoryFlags {
    back: AtomicBool,
    forward: AtomicBool,
}

/// A tab's content web view.
pub struct WryView {
    webview: WebView,
    title_gate: TitleGate,
    history: Arc<HistoryFlags>,
}

impl WryView {
    fn set_bounds(&self, bounds: Rect) {
        if let Err(e) = self.webview.set_bounds(bounds) {
            warn!(error = %e, "failed to resize content view");
        }
    }

    fn run_script(&self, js: &str) -> Result<(), ViewError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ViewError::Script(e.to_string()))
    }
}

impl BrowserView for WryView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        // Until the page reports, assume the previous page is behind us.
        self.history.back.store(true, Ordering::Release);
        self.history.forward.store(false, Ordering::Release);
        self.webview
            .load_url(url)
            .map_err(|e| ViewError::Navigation(e.to_string()))
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.webview
            .set_visible(visible)
            .map_err(|e| ViewError::Visibility(e.to_string()))
    }

    fn can_go_back(&self) -> bool {
        self.history.back.load(Ordering::Acquire)
    }

    fn can_go_forward(&self) -> bool {
        self.history.forward.load(Ordering::Acquire)
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        self.run_script("history.back()")
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        self.run_script("history.forward()")
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.webview
            .reload()
            .map_err(|e| ViewError::Navigation(e.to_string()))
    }

    fn title_gate(&self) -> &TitleGate {
        &self.title_gate
    }
}

struct WryViewFactory<'a> {
    surface: &'a Surface,
    proxy: &'a EventLoopProxy<UserEvent>,
    devtools: bool,
}

impl ViewFactory for WryViewFactory<'_> {
    type View = WryView;

    fn create(&mut self, tab_id: &str, url: &str, visible: bool) -> Result<WryView, ViewError> {
        let title_gate = TitleGate::new();
        let history = Arc::new(HistoryFlags::default());

        let gate = title_gate.clone();
        let title_proxy = self.proxy.clone();
        let window_id = self.surface.window.id();
        let title_tab = tab_id.to_string();
        let ipc_history = Arc::clone(&history);

        let builder = WebViewBuilder::new()
            .with_url(url)
            .with_bounds(content_bounds(&self.surface.window))
            .with_visible(visible)
            .with_devtools(self.devtools)
            .with_initialization_script(CONTENT_JS)
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                if let Some(report) = ipc_handler::parse_history_report(msg.body()) {
                    ipc_history.back.store(report.back, Ordering::Release);
                    ipc_history.forward.store(report.forward, Ordering::Release);
                }
            })
            .with_document_title_changed_handler(move |title| {
                if gate.is_attached() {
                    let _ = title_proxy.send_event(UserEvent::TitleChanged {
                        window_id,
                        tab_id: title_tab.clone(),
                        title,
                    });
                }
            });

        let webview = self
            .surface
            .build(builder)
            .map_err(|e| ViewError::Creation(e.to_string()))?;

        Ok(WryView {
            webview,
            title_gate,
            history,
        })
    }
}

// ─── Browser window ───

// Field order is drop order: tabs and their views go before the chrome and
// the window that hosts them.
struct BrowserWindow {
    app: App<WryView>,
    chrome: WebView,
    surface: Surface,
    proxy: EventLoopProxy<UserEvent>,
    devtools: bool,
}

impl BrowserWindow {
    fn open(
        target: &EventLoopWindowTarget<UserEvent>,
        proxy: EventLoopProxy<UserEvent>,
        settings: &ShellSettings,
    ) -> Result<Self, ShellError> {
        let window = WindowBuilder::new()
            .with_title(settings.window.title.as_str())
            .with_inner_size(tao::dpi::LogicalSize::new(
                f64::from(settings.window.width),
                f64::from(settings.window.height),
            ))
            .build(target)
            .map_err(|e| ShellError::Window(e.to_string()))?;
        let surface = Surface::new(window)?;
        let window_id = surface.window.id();
        let devtools = cfg!(debug_assertions) || settings.developer.devtools;

        let ipc_proxy = proxy.clone();
        let chrome_builder = WebViewBuilder::new()
            .with_html(CHROME_HTML)
            .with_bounds(chrome_bounds(&surface.window))
            .with_devtools(devtools)
            .with_ipc_handler(move |msg: wry::http::Request<String>| {
                match ipc_handler::parse_message(msg.body()) {
                    Ok(command) => {
                        let _ = ipc_proxy.send_event(UserEvent::Chrome { window_id, command });
                    }
                    Err(e) => warn!(error = %e, "unrecognised chrome message"),
                }
            });
        let chrome = surface
            .build(chrome_builder)
            .map_err(|e| ShellError::WebView(e.to_string()))?;

        let mut browser = Self {
            app: App::new(&settings.general),
            chrome,
            surface,
            proxy,
            devtools,
        };
        browser.render();
        info!(?window_id, "window opened");
        Ok(browser)
    }

    fn id(&self) -> WindowId {
        self.surface.window.id()
    }

    fn render(&mut self) {
        let mut factory = WryViewFactory {
            surface: &self.surface,
            proxy: &self.proxy,
            devtools: self.devtools,
        };
        self.app.render(&mut factory);
        self.push_snapshot();
    }

    fn push_snapshot(&self) {
        let script = ipc_handler::snapshot_script(&self.app.snapshot());
        if let Err(e) = self.chrome.evaluate_script(&script) {
            warn!(error = %e, "failed to update chrome");
        }
    }

    fn handle_command(&mut self, command: ChromeCommand) {
        debug!(?command, "chrome command");
        match ipc_handler::apply(&mut self.app, command) {
            Ok(Refresh::Render) => self.render(),
            Ok(Refresh::Quiet) => {}
            Err(e) => warn!(error = %e, "chrome command rejected"),
        }
    }

    // A full snapshot here would reset the address input under the user's
    // keystrokes while a page loads, so only the label is pushed.
    fn on_title_changed(&mut self, tab_id: &str, title: &str) {
        if !self.app.on_title_changed(tab_id, title) {
            return;
        }
        let Some(tab) = self.app.tab_manager.get_tab(tab_id) else {
            return;
        };
        let script = ipc_handler::title_script(&TitleUpdate {
            id: &tab.id,
            title: &tab.title,
        });
        if let Err(e) = self.chrome.evaluate_script(&script) {
            warn!(error = %e, "failed to update tab title");
        }
    }

    fn relayout(&mut self) {
        if let Err(e) = self.chrome.set_bounds(chrome_bounds(&self.surface.window)) {
            warn!(error = %e, "failed to resize chrome");
        }
        for view in self.app.views_mut().views_mut() {
            view.set_bounds(content_bounds(&self.surface.window));
        }
    }
}

/// Loads settings, falling back to defaults when the file is unreadable.
fn load_settings() -> SettingsEngine {
    let mut engine = SettingsEngine::new(None);
    if let Err(e) = engine.load() {
        warn!(path = engine.get_config_path(), error = %e, "using default settings");
    }
    engine
}

// ─── Main entry point ───

pub fn run() -> Result<(), ShellError> {
    let mut settings = load_settings();
    let policy = LifecyclePolicy::current();

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let mut windows: HashMap<WindowId, BrowserWindow> = HashMap::new();
    let first = BrowserWindow::open(&event_loop, proxy.clone(), settings.get_settings())?;
    windows.insert(first.id(), first);

    event_loop.run(move |event, target, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                window_id,
                event: WindowEvent::CloseRequested,
                ..
            } => {
                if let Some(browser) = windows.remove(&window_id) {
                    let (width, height) = logical_size(&browser.surface.window);
                    if let Err(e) = shell::remember_window_size(
                        &mut settings,
                        width.round() as u32,
                        height.round() as u32,
                    ) {
                        warn!(error = %e, "failed to save window size");
                    }
                    info!(?window_id, "window closed");
                }
                if policy.should_quit_when_all_closed(windows.len()) {
                    info!("last window closed, exiting");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent {
                window_id,
                event: WindowEvent::Resized(_),
                ..
            } => {
                if let Some(browser) = windows.get_mut(&window_id) {
                    browser.relayout();
                }
            }

            Event::Reopen {
                has_visible_windows,
                ..
            } => {
                if !has_visible_windows && policy.should_recreate_on_reopen(windows.len()) {
                    match BrowserWindow::open(target, proxy.clone(), settings.get_settings()) {
                        Ok(browser) => {
                            windows.insert(browser.id(), browser);
                        }
                        Err(e) => error!(error = %e, "failed to reopen window"),
                    }
                }
            }

            Event::UserEvent(UserEvent::Chrome { window_id, command }) => {
                if let Some(browser) = windows.get_mut(&window_id) {
                    browser.handle_command(command);
                }
            }

            Event::UserEvent(UserEvent::TitleChanged {
                window_id,
                tab_id,
                title,
            }) => {
                if let Some(browser) = windows.get_mut(&window_id) {
                    browser.on_title_changed(&tab_id, &title);
                }
            }

            _ => {}
        }
    });
}
