// State managers
// Managers own the stateful parts of the shell: the tab list, the per-tab
// views, and the active tab's title listener.

pub mod tab_manager;
pub mod title_sync;
pub mod view_registry;
