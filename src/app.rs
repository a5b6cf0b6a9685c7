//! App Core.
//!
//! Central struct of one browser window: the tab list, one embedded view per
//! tab, and the active tab's title listener. Every user action is a
//! synchronous transition on the tab list followed by [`App::render`], which
//! makes the views reflect the new state.

use tracing::{debug, warn};

use crate::ipc_handler::{ChromeSnapshot, TabSummary};
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::managers::title_sync::TitleSync;
use crate::managers::view_registry::ViewRegistry;
use crate::types::errors::{TabError, ViewError};
use crate::types::settings::GeneralSettings;
use crate::views::{BrowserView, ViewFactory};

/// Which history-navigation primitive to run on the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    Back,
    Forward,
    Reload,
}

// Fields drop in order, so the title subscription is released before the
// views it listens to are destroyed.
pub struct App<V: BrowserView> {
    pub tab_manager: TabManager,
    title_sync: TitleSync,
    views: ViewRegistry<V>,
}

impl<V: BrowserView> App<V> {
    /// Creates an app with one default tab. Views appear on the first render.
    pub fn new(settings: &GeneralSettings) -> Self {
        Self::with_tab_manager(TabManager::from_settings(settings))
    }

    pub fn with_tab_manager(tab_manager: TabManager) -> Self {
        Self {
            tab_manager,
            title_sync: TitleSync::new(),
            views: ViewRegistry::new(),
        }
    }

    pub fn views(&self) -> &ViewRegistry<V> {
        &self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewRegistry<V> {
        &mut self.views
    }

    pub fn title_sync(&self) -> &TitleSync {
        &self.title_sync
    }

    pub fn new_tab(&mut self) -> String {
        let previous = self.tab_manager.active_tab_id().to_string();
        let id = self.tab_manager.new_tab();
        self.title_sync.release(&previous);
        id
    }

    pub fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        self.tab_manager.close_tab(tab_id)?;
        self.title_sync.release(tab_id);
        Ok(())
    }

    /// Activates `tab_id`. The previous tab's title listener is detached
    /// at once; the new one attaches on the next render.
    pub fn select_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let previous = self.tab_manager.active_tab_id().to_string();
        self.tab_manager.select_tab(tab_id)?;
        if previous != tab_id {
            self.title_sync.release(&previous);
        }
        Ok(())
    }

    pub fn edit_address(&mut self, text: &str) {
        self.tab_manager.edit_address_bar(text);
    }

    pub fn submit(&mut self) -> String {
        self.tab_manager.submit()
    }

    pub fn go_home(&mut self) {
        self.tab_manager.go_home();
    }

    /// Runs `command` on the active tab's view. Back and forward do nothing
    /// when the view has no entry in that direction; a missing view is ignored.
    pub fn navigate_view(&mut self, command: ViewCommand) {
        let active_id = self.tab_manager.active_tab_id();
        let Some(view) = self.views.get_mut(active_id) else {
            debug!(tab = %active_id, ?command, "no view for active tab");
            return;
        };

        let result: Result<(), ViewError> = match command {
            ViewCommand::Back if view.can_go_back() => view.go_back(),
            ViewCommand::Forward if view.can_go_forward() => view.go_forward(),
            ViewCommand::Reload => view.reload(),
            _ => Ok(()),
        };
        if let Err(e) = result {
            warn!(tab = %active_id, ?command, error = %e, "view navigation failed");
        }
    }

    /// Applies a title reported by `tab_id`'s view. Returns whether state
    /// changed; reports from tabs without an attached listener are dropped.
    pub fn on_title_changed(&mut self, tab_id: &str, title: &str) -> bool {
        if !self.title_sync.accepts(tab_id) {
            debug!(tab = %tab_id, "ignoring title from detached listener");
            return false;
        }
        self.tab_manager.update_tab_title(tab_id, title).is_ok()
    }

    /// Reconciles views with the tab list and re-targets the title listener.
    pub fn render<F>(&mut self, factory: &mut F)
    where
        F: ViewFactory<View = V>,
    {
        for id in self.views.reconcile(&self.tab_manager, factory) {
            self.title_sync.release(&id);
        }
        self.title_sync
            .sync(self.tab_manager.active_tab_id(), &self.views);
    }

    /// State the chrome UI draws from.
    pub fn snapshot(&self) -> ChromeSnapshot {
        ChromeSnapshot {
            tabs: self
                .tab_manager
                .get_all_tabs()
                .iter()
                .map(TabSummary::from)
                .collect(),
            active_id: self.tab_manager.active_tab_id().to_string(),
            address_text: self.tab_manager.address_bar_text().to_string(),
        }
    }
}
