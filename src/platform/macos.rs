// Platform conventions for macOS
// Config: ~/Library/Application Support/TabShell

use std::env;
use std::path::PathBuf;

/// Apps keep running in the dock with no open windows.
pub const KEEPS_RUNNING_WITHOUT_WINDOWS: bool = true;

/// Returns the configuration directory on macOS.
/// `~/Library/Application Support/TabShell`
pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("TabShell")
}
