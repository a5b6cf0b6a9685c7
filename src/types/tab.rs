use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label shown for a tab until its page reports a title.
pub const DEFAULT_TITLE: &str = "New Tab";

/// Represents a browser tab with its current state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl Tab {
    /// Creates a tab with a fresh id and the placeholder title.
    pub fn new(url: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: DEFAULT_TITLE.to_string(),
            url: url.to_string(),
        }
    }
}
