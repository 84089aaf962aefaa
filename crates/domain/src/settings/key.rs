//! Setting keys — the string names under which values are persisted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A persisted setting.
///
/// The serialized form is the camelCase name shared by every surface
/// (`"replyInterval"`, `"infinityMode"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    ExtensionDisabled,
    ToggleHidden,
    AutoScrollDisabled,
    ReplyInterval,
    ReplyLanguage,
    ReplyTopic,
    /// Mirrors the running state for other surfaces. Display only.
    InfinityMode,
    /// UI language detected at session start.
    UserLanguage,
}

impl SettingKey {
    /// Every known key.
    pub const ALL: [Self; 8] = [
        Self::ExtensionDisabled,
        Self::ToggleHidden,
        Self::AutoScrollDisabled,
        Self::ReplyInterval,
        Self::ReplyLanguage,
        Self::ReplyTopic,
        Self::InfinityMode,
        Self::UserLanguage,
    ];

    /// Keys that feed the [`Configuration`](super::Configuration) snapshot.
    pub const CONFIGURATION: [Self; 6] = [
        Self::ExtensionDisabled,
        Self::ToggleHidden,
        Self::AutoScrollDisabled,
        Self::ReplyInterval,
        Self::ReplyLanguage,
        Self::ReplyTopic,
    ];

    /// Keys that only affect the toggle's appearance.
    pub const DISPLAY: [Self; 2] = [Self::ToggleHidden, Self::ExtensionDisabled];

    /// The persisted name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExtensionDisabled => "extensionDisabled",
            Self::ToggleHidden => "toggleHidden",
            Self::AutoScrollDisabled => "autoScrollDisabled",
            Self::ReplyInterval => "replyInterval",
            Self::ReplyLanguage => "replyLanguage",
            Self::ReplyTopic => "replyTopic",
            Self::InfinityMode => "infinityMode",
            Self::UserLanguage => "userLanguage",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownSettingKey(s.to_string()))
    }
}
