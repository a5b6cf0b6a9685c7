//! Title-changed listener for the active tab.
//!
//! Every view carries a [`TitleGate`]; its title callback reports only while
//! the gate is attached. [`TitleSync`] holds at most one
//! [`TitleSubscription`], always for the active tab, and re-targets it as the
//! active tab changes. Dropping a subscription detaches its gate, so every
//! exit path (switching tabs, closing the tab, dropping the app) releases it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::managers::view_registry::ViewRegistry;
use crate::views::BrowserView;

/// Shared on/off switch between a view's title callback and its subscription.
#[derive(Debug, Clone, Default)]
pub struct TitleGate(Arc<AtomicBool>);

impl TitleGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn set_attached(&self, attached: bool) {
        self.0.store(attached, Ordering::Release);
    }
}

/// An attached title listener. Detaches on drop.
#[derive(Debug)]
pub struct TitleSubscription {
    tab_id: String,
    gate: TitleGate,
}

impl TitleSubscription {
    pub fn attach(tab_id: &str, gate: TitleGate) -> Self {
        gate.set_attached(true);
        Self {
            tab_id: tab_id.to_string(),
            gate,
        }
    }

    pub fn tab_id(&self) -> &str {
        &self.tab_id
    }
}

impl Drop for TitleSubscription {
    fn drop(&mut self) {
        self.gate.set_attached(false);
    }
}

/// Owns the single title subscription of the active tab.
#[derive(Debug, Default)]
pub struct TitleSync {
    current: Option<TitleSubscription>,
}

impl TitleSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the subscription at `active_id`'s view, detaching any other.
    pub fn sync<V: BrowserView>(&mut self, active_id: &str, views: &ViewRegistry<V>) {
        let up_to_date = self
            .current
            .as_ref()
            .is_some_and(|sub| sub.tab_id == active_id && views.contains(active_id));
        if up_to_date {
            return;
        }

        if let Some(old) = self.current.take() {
            debug!(tab = %old.tab_id, "title listener detached");
        }

        if let Some(view) = views.get(active_id) {
            self.current = Some(TitleSubscription::attach(active_id, view.title_gate().clone()));
            debug!(tab = %active_id, "title listener attached");
        }
    }

    /// Detaches the subscription if it belongs to `tab_id`.
    pub fn release(&mut self, tab_id: &str) {
        if self.attached_tab() == Some(tab_id) {
            self.current = None;
            debug!(tab = %tab_id, "title listener released");
        }
    }

    /// Tab whose listener is currently attached.
    pub fn attached_tab(&self) -> Option<&str> {
        self.current.as_ref().map(TitleSubscription::tab_id)
    }

    /// Whether a title notification from `tab_id` may be applied.
    ///
    /// Notifications queued before a detach arrive here after it and are
    /// rejected.
    pub fn accepts(&self, tab_id: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|sub| sub.tab_id == tab_id && sub.gate.is_attached())
    }
}
