use serde::{Deserialize, Serialize};

/// Address loaded by new tabs and the Home button.
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// Prefix the percent-encoded query is appended to.
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellSettings {
    pub general: GeneralSettings,
    pub window: WindowSettings,
    pub developer: DeveloperSettings,
}

/// Navigation defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub home_url: String,
    pub search_url: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

/// Top-level window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Tab Shell".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

/// Developer options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DeveloperSettings {
    /// Enables web inspector in release builds; debug builds always have it.
    pub devtools: bool,
}
