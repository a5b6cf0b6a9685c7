//! Window and process lifecycle policy for the host shell.

use serde_json::json;

use crate::platform;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::types::errors::SettingsError;

/// Decides when the process exits and when a window is recreated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecyclePolicy {
    keeps_running_without_windows: bool,
}

impl LifecyclePolicy {
    /// Policy following the convention of the platform we were built for.
    pub fn current() -> Self {
        Self::new(platform::keeps_running_without_windows())
    }

    pub fn new(keeps_running_without_windows: bool) -> Self {
        Self {
            keeps_running_without_windows,
        }
    }

    /// Quit once the last window is gone, unless the platform keeps
    /// windowless applications alive.
    pub fn should_quit_when_all_closed(&self, open_windows: usize) -> bool {
        open_windows == 0 && !self.keeps_running_without_windows
    }

    /// Reactivating the application with no windows open brings one back.
    pub fn should_recreate_on_reopen(&self, open_windows: usize) -> bool {
        open_windows == 0
    }
}

impl Default for LifecyclePolicy {
    fn default() -> Self {
        Self::current()
    }
}

/// Stores the logical size of a closing window so the next one opens at it.
pub fn remember_window_size<E: SettingsEngineTrait>(
    engine: &mut E,
    width: u32,
    height: u32,
) -> Result<(), SettingsError> {
    let current = &engine.get_settings().window;
    if current.width == width && current.height == height {
        return Ok(());
    }
    engine.set_value("window.width", json!(width))?;
    engine.set_value("window.height", json!(height))
}
