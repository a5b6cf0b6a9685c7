//! In-memory browser view.
//!
//! Keeps a back/forward stack the way a real engine does, without rendering
//! anything. Drives the console demo and the tests.

use tracing::trace;

use crate::managers::title_sync::TitleGate;
use crate::types::errors::ViewError;
use crate::views::{BrowserView, ViewFactory};

#[derive(Debug)]
pub struct HeadlessView {
    tab_id: String,
    entries: Vec<String>,
    index: usize,
    visible: bool,
    reloads: usize,
    title_gate: TitleGate,
}

impl HeadlessView {
    pub fn new(tab_id: &str, url: &str, visible: bool) -> Self {
        Self {
            tab_id: tab_id.to_string(),
            entries: vec![url.to_string()],
            index: 0,
            visible,
            reloads: 0,
            title_gate: TitleGate::new(),
        }
    }

    /// Address of the current history entry.
    pub fn current_url(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn history_len(&self) -> usize {
        self.entries.len()
    }

    pub fn reload_count(&self) -> usize {
        self.reloads
    }

    /// Simulates a link click inside the page: a navigation the tab manager
    /// does not know about.
    pub fn follow_link(&mut self, url: &str) {
        self.push_entry(url);
    }

    /// Simulates the page changing its title. Returns the `(tab_id, title)`
    /// notification, or `None` when no listener is attached.
    pub fn emit_title(&self, title: &str) -> Option<(String, String)> {
        if self.title_gate.is_attached() {
            Some((self.tab_id.clone(), title.to_string()))
        } else {
            None
        }
    }

    fn push_entry(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }
}

impl BrowserView for HeadlessView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        trace!(tab = %self.tab_id, url, "headless load");
        self.push_entry(url);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError> {
        self.visible = visible;
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        self.index > 0
    }

    fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        if self.can_go_back() {
            self.index -= 1;
        }
        Ok(())
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        if self.can_go_forward() {
            self.index += 1;
        }
        Ok(())
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.reloads += 1;
        Ok(())
    }

    fn title_gate(&self) -> &TitleGate {
        &self.title_gate
    }
}

/// Factory producing [`HeadlessView`]s.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    created: usize,
}

impl HeadlessFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of views created so far.
    pub fn created(&self) -> usize {
        self.created
    }
}

impl ViewFactory for HeadlessFactory {
    type View = HeadlessView;

    fn create(&mut self, tab_id: &str, url: &str, visible: bool) -> Result<HeadlessView, ViewError> {
        self.created += 1;
        Ok(HeadlessView::new(tab_id, url, visible))
    }
}
