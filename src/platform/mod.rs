// Platform abstraction
// Provides the config path and window-lifecycle conventions for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for TabShell.
///
/// - **Linux**: `~/.config/tabshell` (or `$XDG_CONFIG_HOME/tabshell`)
/// - **macOS**: `~/Library/Application Support/TabShell`
/// - **Windows**: `%APPDATA%/TabShell`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Whether applications stay running after their last window closes.
///
/// True only on macOS, where the app lives on in the dock and is
/// reactivated from there.
pub fn keeps_running_without_windows() -> bool {
    #[cfg(target_os = "macos")]
    {
        macos::KEEPS_RUNNING_WITHOUT_WINDOWS
    }
    #[cfg(not(target_os = "macos"))]
    {
        false
    }
}
