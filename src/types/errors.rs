use thiserror::Error;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
}

// === ViewError ===

/// Errors reported by an embedded browser view.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The view could not be created.
    #[error("Failed to create view: {0}")]
    Creation(String),
    /// Loading an address or reloading failed.
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// Showing or hiding the view failed.
    #[error("Failed to change view visibility: {0}")]
    Visibility(String),
    /// Running a script inside the view failed.
    #[error("Script evaluation failed: {0}")]
    Script(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Settings could not be serialized or deserialized.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The settings key does not exist.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The value is not valid for the key.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShellError ===

/// Errors raised while starting the host shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The top-level window could not be created.
    #[error("Window error: {0}")]
    Window(String),
    /// The chrome web view could not be created.
    #[error("WebView error: {0}")]
    WebView(String),
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
