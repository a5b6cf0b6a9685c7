//! Chrome UI message handling.
//!
//! The chrome web view posts JSON commands (`{"cmd": "new_tab"}` and so on)
//! through `window.ipc.postMessage`. `parse_message` decodes them and
//! `apply` runs them against an [`App`]. The host answers with a
//! [`ChromeSnapshot`] rendered into a script by `snapshot_script`.
//!
//! Content views post a single kind of message, a [`HistoryReport`].

use serde::{Deserialize, Serialize};

use crate::app::{App, ViewCommand};
use crate::types::errors::TabError;
use crate::types::tab::Tab;
use crate::views::BrowserView;

/// Commands sent by the chrome UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum ChromeCommand {
    UiReady,
    NewTab,
    CloseTab { id: String },
    SelectTab { id: String },
    EditAddress { text: String },
    Submit,
    Back,
    Forward,
    Reload,
    Home,
}

/// Whether the chrome needs a fresh snapshot after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// State changed; render views and push a snapshot.
    Render,
    /// Nothing the chrome shows changed.
    Quiet,
}

pub fn parse_message(message: &str) -> Result<ChromeCommand, serde_json::Error> {
    serde_json::from_str(message)
}

/// Runs one chrome command.
pub fn apply<V: BrowserView>(app: &mut App<V>, command: ChromeCommand) -> Result<Refresh, TabError> {
    match command {
        ChromeCommand::UiReady => Ok(Refresh::Render),
        ChromeCommand::NewTab => {
            app.new_tab();
            Ok(Refresh::Render)
        }
        ChromeCommand::CloseTab { id } => {
            app.close_tab(&id)?;
            Ok(Refresh::Render)
        }
        ChromeCommand::SelectTab { id } => {
            app.select_tab(&id)?;
            Ok(Refresh::Render)
        }
        // The chrome already shows what was typed; echoing it back would
        // race with further keystrokes.
        ChromeCommand::EditAddress { text } => {
            app.edit_address(&text);
            Ok(Refresh::Quiet)
        }
        ChromeCommand::Submit => {
            app.submit();
            Ok(Refresh::Render)
        }
        ChromeCommand::Back => {
            app.navigate_view(ViewCommand::Back);
            Ok(Refresh::Quiet)
        }
        ChromeCommand::Forward => {
            app.navigate_view(ViewCommand::Forward);
            Ok(Refresh::Quiet)
        }
        ChromeCommand::Reload => {
            app.navigate_view(ViewCommand::Reload);
            Ok(Refresh::Quiet)
        }
        ChromeCommand::Home => {
            app.go_home();
            Ok(Refresh::Render)
        }
    }
}

/// One tab as the tab strip shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSummary {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl From<&Tab> for TabSummary {
    fn from(tab: &Tab) -> Self {
        Self {
            id: tab.id.clone(),
            title: tab.title.clone(),
            url: tab.url.clone(),
        }
    }
}

/// Everything the chrome UI renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeSnapshot {
    pub tabs: Vec<TabSummary>,
    pub active_id: String,
    pub address_text: String,
}

/// Script that hands `snapshot` to the chrome page's renderer.
pub fn snapshot_script(snapshot: &ChromeSnapshot) -> String {
    let json = serde_json::to_string(snapshot).unwrap_or_else(|_| "null".to_string());
    format!("if(window.__ts_render)window.__ts_render({})", json)
}

/// A single tab label change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleUpdate<'a> {
    pub id: &'a str,
    pub title: &'a str,
}

/// Script that relabels one tab without touching the address input.
pub fn title_script(update: &TitleUpdate<'_>) -> String {
    let json = serde_json::to_string(update).unwrap_or_else(|_| "null".to_string());
    format!("if(window.__ts_title)window.__ts_title({})", json)
}

/// History availability reported by a content page after each navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HistoryReport {
    pub back: bool,
    pub forward: bool,
}

#[derive(Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
enum ContentMessage {
    History(HistoryReport),
}

/// Decodes a content view message. Anything but a history report is `None`.
pub fn parse_history_report(message: &str) -> Option<HistoryReport> {
    match serde_json::from_str::<ContentMessage>(message).ok()? {
        ContentMessage::History(report) => Some(report),
    }
}
