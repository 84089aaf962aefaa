//! Surface view models — what the controller asks a UI surface to show.
//!
//! How these are drawn (toast, modal, sidebar switch) is the surface's
//! business; the domain only decides *what* is shown.

use serde::{Deserialize, Serialize};

/// Symbol prefixed to every notification and alert title.
pub const APP_SYMBOL: &str = "∞";

/// Display name of the automation mode.
pub const MODE_LABEL: &str = "Infinity Mode";

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    /// Surface-specific placement hint (e.g. `"bottom-right"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Draw with a drop shadow (used on light themes).
    #[serde(default)]
    pub shadow: bool,
}

impl Notification {
    /// A notification with the app symbol prepended.
    #[must_use]
    pub fn branded(message: impl AsRef<str>) -> Self {
        Self {
            message: format!("{APP_SYMBOL} {}", message.as_ref()),
            position: None,
            shadow: false,
        }
    }

    /// The ON/OFF announcement for the automation mode.
    #[must_use]
    pub fn mode_state(is_on: bool) -> Self {
        Self::branded(format!("{MODE_LABEL}: {}", if is_on { "ON" } else { "OFF" }))
    }

    #[must_use]
    pub fn at(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }
}

/// A modal dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub buttons: Vec<String>,
}

impl Alert {
    /// An alert whose title carries the app symbol.
    #[must_use]
    pub fn branded(title: &str, message: impl Into<String>, buttons: Vec<String>) -> Self {
        Self {
            title: format!("{APP_SYMBOL} {title}"),
            message: message.into(),
            buttons,
        }
    }
}

/// State of the page toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDisplay {
    pub visible: bool,
    pub is_on: bool,
    pub label: String,
    /// Narrow layout for mobile viewports.
    pub compact: bool,
}

impl ToggleDisplay {
    #[must_use]
    pub fn new(visible: bool, is_on: bool, compact: bool) -> Self {
        let state = if is_on { "enabled" } else { "disabled" };
        Self {
            visible,
            is_on,
            label: format!("{MODE_LABEL} {state}"),
            compact,
        }
    }
}
