use tracing::debug;

use crate::services::url_resolver;
use crate::types::errors::TabError;
use crate::types::settings::{GeneralSettings, DEFAULT_HOME_URL, DEFAULT_SEARCH_URL};
use crate::types::tab::{Tab, DEFAULT_TITLE};

/// Trait defining the tab management interface.
pub trait TabManagerTrait {
    fn new_tab(&mut self) -> String;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn select_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn edit_address_bar(&mut self, text: &str);
    fn submit(&mut self) -> String;
    fn go_home(&mut self);
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> &[Tab];
    fn get_active_tab(&self) -> &Tab;
    fn active_tab_id(&self) -> &str;
    fn address_bar_text(&self) -> &str;
    fn tab_count(&self) -> usize;
}

/// In-memory tab list with one active tab and the address bar text.
///
/// The list is never empty and the active id always names a tab in it.
#[derive(Debug, Clone)]
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: String,
    address_bar_text: String,
    home_url: String,
    search_url: String,
}

impl TabManager {
    /// Creates a manager holding one default tab.
    pub fn new(home_url: &str, search_url: &str) -> Self {
        let first = Tab::new(home_url);
        Self {
            active_tab_id: first.id.clone(),
            address_bar_text: first.url.clone(),
            tabs: vec![first],
            home_url: home_url.to_string(),
            search_url: search_url.to_string(),
        }
    }

    pub fn from_settings(settings: &GeneralSettings) -> Self {
        Self::new(&settings.home_url, &settings.search_url)
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn active_index(&self) -> usize {
        self.find_tab_index(&self.active_tab_id).unwrap_or(0)
    }

    fn activate(&mut self, index: usize) {
        self.active_tab_id = self.tabs[index].id.clone();
        self.address_bar_text = self.tabs[index].url.clone();
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new(DEFAULT_HOME_URL, DEFAULT_SEARCH_URL)
    }
}

impl TabManagerTrait for TabManager {
    /// Appends a default tab, makes it active and returns its ID.
    fn new_tab(&mut self) -> String {
        let tab = Tab::new(&self.home_url);
        let id = tab.id.clone();
        self.tabs.push(tab);
        self.activate(self.tabs.len() - 1);
        debug!(tab = %id, "tab opened");
        id
    }

    /// Closes a tab. Closing the active tab activates the first remaining
    /// tab; closing the last tab replaces it with a fresh default one.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        let was_active = self.active_tab_id == tab_id;

        self.tabs.remove(index);
        debug!(tab = %tab_id, "tab closed");

        if self.tabs.is_empty() {
            self.new_tab();
            return Ok(());
        }

        if was_active {
            self.activate(0);
        }

        Ok(())
    }

    /// Makes `tab_id` active and shows its url in the address bar,
    /// discarding any unsubmitted edit.
    fn select_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let index = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.activate(index);
        Ok(())
    }

    fn edit_address_bar(&mut self, text: &str) {
        self.address_bar_text = text.to_string();
    }

    /// Resolves the address bar text and navigates the active tab to it.
    /// Returns the resolved url.
    fn submit(&mut self) -> String {
        let url = url_resolver::resolve(&self.address_bar_text, &self.search_url);
        let index = self.active_index();
        self.tabs[index].url = url.clone();
        self.address_bar_text = url.clone();
        debug!(tab = %self.tabs[index].id, url = %url, "navigate");
        url
    }

    fn go_home(&mut self) {
        let index = self.active_index();
        self.tabs[index].url = self.home_url.clone();
        self.address_bar_text = self.home_url.clone();
    }

    /// Sets a tab's label, falling back to the placeholder for empty titles.
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.title = if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title.to_string()
        };
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn get_active_tab(&self) -> &Tab {
        &self.tabs[self.active_index()]
    }

    fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    fn address_bar_text(&self) -> &str {
        &self.address_bar_text
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }
}
