//! One embedded view per tab.
//!
//! `reconcile` makes the set of live views match the tab list: it creates
//! views for new tabs, loads a tab's url into its view when the url changed,
//! shows only the active view, and destroys the views of closed tabs. Hidden
//! views stay alive so their history survives tab switches.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::views::{BrowserView, ViewFactory};

struct ViewEntry<V> {
    view: V,
    /// Last url handed to `load_url` or used at creation.
    src: String,
    visible: bool,
}

pub struct ViewRegistry<V: BrowserView> {
    entries: HashMap<String, ViewEntry<V>>,
}

impl<V: BrowserView> ViewRegistry<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, tab_id: &str) -> bool {
        self.entries.contains_key(tab_id)
    }

    pub fn get(&self, tab_id: &str) -> Option<&V> {
        self.entries.get(tab_id).map(|e| &e.view)
    }

    pub fn get_mut(&mut self, tab_id: &str) -> Option<&mut V> {
        self.entries.get_mut(tab_id).map(|e| &mut e.view)
    }

    /// Url the view for `tab_id` was last told to load.
    pub fn src(&self, tab_id: &str) -> Option<&str> {
        self.entries.get(tab_id).map(|e| e.src.as_str())
    }

    pub fn is_visible(&self, tab_id: &str) -> bool {
        self.entries.get(tab_id).is_some_and(|e| e.visible)
    }

    /// Ids of the visible views.
    pub fn visible_ids(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, e)| e.visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn views_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.values_mut().map(|e| &mut e.view)
    }

    /// Ids of views whose tab no longer exists.
    fn stale_ids(&self, tabs: &TabManager) -> Vec<String> {
        self.entries
            .keys()
            .filter(|id| tabs.get_tab(id).is_none())
            .cloned()
            .collect()
    }

    /// Brings the views in line with `tabs`. Returns the ids of destroyed views.
    pub fn reconcile<F>(&mut self, tabs: &TabManager, factory: &mut F) -> Vec<String>
    where
        F: ViewFactory<View = V>,
    {
        let removed = self.stale_ids(tabs);
        for id in &removed {
            self.entries.remove(id);
            debug!(tab = %id, "view destroyed");
        }

        let active_id = tabs.active_tab_id();

        // Hide before showing so two views are never visible together.
        for (id, entry) in self.entries.iter_mut() {
            if entry.visible && id != active_id {
                match entry.view.set_visible(false) {
                    Ok(()) => entry.visible = false,
                    Err(e) => warn!(tab = %id, error = %e, "failed to hide view"),
                }
            }
        }

        for tab in tabs.get_all_tabs() {
            let visible = tab.id == active_id;
            match self.entries.get_mut(&tab.id) {
                Some(entry) => {
                    if entry.src != tab.url {
                        if let Err(e) = entry.view.load_url(&tab.url) {
                            warn!(tab = %tab.id, url = %tab.url, error = %e, "failed to load url");
                        }
                        entry.src = tab.url.clone();
                    }
                    if visible && !entry.visible {
                        match entry.view.set_visible(true) {
                            Ok(()) => entry.visible = true,
                            Err(e) => warn!(tab = %tab.id, error = %e, "failed to show view"),
                        }
                    }
                }
                None => match factory.create(&tab.id, &tab.url, visible) {
                    Ok(view) => {
                        debug!(tab = %tab.id, url = %tab.url, "view created");
                        self.entries.insert(
                            tab.id.clone(),
                            ViewEntry {
                                view,
                                src: tab.url.clone(),
                                visible,
                            },
                        );
                    }
                    Err(e) => warn!(tab = %tab.id, error = %e, "failed to create view"),
                },
            }
        }

        removed
    }
}

impl<V: BrowserView> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}
