//! Event and command types for the host surface
//!
//! A page module communicates with its host through plain values: it
//! registers a navigation tab at initialization and answers commands with
//! render or redirect events. All wire types use camelCase JSON
//! serialization.

use serde::{Deserialize, Serialize};

/// User-facing commands handled by the settings page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    ShowSettings,
    StoreSettings,
}

impl Command {
    /// All commands the settings page answers to
    pub fn all() -> &'static [Command] {
        &[Command::ShowSettings, Command::StoreSettings]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowSettings => "show_settings",
            Self::StoreSettings => "store_settings",
        }
    }

    /// URL path the HTTP layer binds this command to
    pub fn path(&self) -> &'static str {
        match self {
            Self::ShowSettings | Self::StoreSettings => "/settings",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show_settings" => Ok(Self::ShowSettings),
            "store_settings" => Ok(Self::StoreSettings),
            other => Err(format!("unknown command: {}", other)),
        }
    }
}

/// A navigation tab registered with the host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDefinition {
    /// Stable tab identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Command the tab links to
    pub command: Command,
}

/// Rendered page content handed to the host for display
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiData {
    pub title: String,
    pub markup: String,
}

/// Event raised towards the host dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum HostEvent {
    /// Register a navigation tab
    AddTab { tab: TabDefinition },
    /// Display rendered page content
    SetUi { ui: UiData },
    /// Forward the user to another command
    Redirect { command: Command },
}
