//! Embedded browser view abstraction.
//!
//! A view renders one tab's content and owns its navigation history. The
//! tab manager never looks inside a view. It says what to load and whether
//! the view is shown; history navigation is delegated to the view itself.

pub mod headless;

use crate::managers::title_sync::TitleGate;
use crate::types::errors::ViewError;

/// One embedded content surface.
pub trait BrowserView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;
    fn set_visible(&mut self, visible: bool) -> Result<(), ViewError>;
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn go_back(&mut self) -> Result<(), ViewError>;
    fn go_forward(&mut self) -> Result<(), ViewError>;
    fn reload(&mut self) -> Result<(), ViewError>;
    /// Gate the view's title-changed callback checks before reporting.
    fn title_gate(&self) -> &TitleGate;
}

/// Creates views for newly opened tabs.
pub trait ViewFactory {
    type View: BrowserView;

    fn create(&mut self, tab_id: &str, url: &str, visible: bool) -> Result<Self::View, ViewError>;
}
