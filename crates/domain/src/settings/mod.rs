//! Configuration — the read-mostly settings snapshot the controller runs on.
//!
//! Values are persisted as loosely-typed JSON under [`SettingKey`] names by
//! whatever store the host provides. [`Configuration::apply`] is the single
//! place where a stored value is interpreted and validated.

mod key;
mod topic;

pub use key::SettingKey;
pub use topic::ReplyTopic;

use std::num::NonZeroU64;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Reply interval seeded when none is stored.
pub const DEFAULT_REPLY_INTERVAL_SECS: u64 = 7;

/// Settings snapshot consumed by the automation loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Pause between a finished reply and the next request.
    pub reply_interval_secs: NonZeroU64,
    /// Language the replies should be written in, if any.
    pub reply_language: Option<String>,
    pub reply_topic: ReplyTopic,
    pub auto_scroll_disabled: bool,
    pub toggle_hidden: bool,
    pub extension_disabled: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            reply_interval_secs: NonZeroU64::new(DEFAULT_REPLY_INTERVAL_SECS)
                .unwrap_or(NonZeroU64::MIN),
            reply_language: None,
            reply_topic: ReplyTopic::All,
            auto_scroll_disabled: false,
            toggle_hidden: false,
            extension_disabled: false,
        }
    }
}

impl Configuration {
    /// Delay before the next continue fires.
    #[must_use]
    pub fn reply_interval(&self) -> Duration {
        Duration::from_secs(self.reply_interval_secs.get())
    }

    /// Whether the page toggle should be drawn at all.
    #[must_use]
    pub fn toggle_visible(&self) -> bool {
        !(self.toggle_hidden || self.extension_disabled)
    }

    /// Interpret `value` stored under `key` and update the snapshot.
    ///
    /// Returns `Ok(true)` when the snapshot changed. Keys that are not part
    /// of the configuration (`infinityMode`, `userLanguage`) are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value has the wrong type or
    /// breaks an invariant; the snapshot is left untouched in that case.
    pub fn apply(&mut self, key: SettingKey, value: &Value) -> Result<bool, ValidationError> {
        let before = self.clone();
        match key {
            SettingKey::ExtensionDisabled => self.extension_disabled = parse_flag(key, value)?,
            SettingKey::ToggleHidden => self.toggle_hidden = parse_flag(key, value)?,
            SettingKey::AutoScrollDisabled => self.auto_scroll_disabled = parse_flag(key, value)?,
            SettingKey::ReplyInterval => self.reply_interval_secs = parse_interval(value)?,
            SettingKey::ReplyLanguage => {
                let language = parse_text(key, value)?;
                self.reply_language = (!language.is_empty()).then_some(language);
            }
            SettingKey::ReplyTopic => {
                self.reply_topic = ReplyTopic::from_setting(&parse_text(key, value)?);
            }
            SettingKey::InfinityMode | SettingKey::UserLanguage => return Ok(false),
        }
        Ok(*self != before)
    }

    /// Reset the field behind `key` to its default after the stored value
    /// was removed. Returns `true` when the snapshot changed.
    pub fn clear(&mut self, key: SettingKey) -> bool {
        let before = self.clone();
        let defaults = Self::default();
        match key {
            SettingKey::ExtensionDisabled => self.extension_disabled = defaults.extension_disabled,
            SettingKey::ToggleHidden => self.toggle_hidden = defaults.toggle_hidden,
            SettingKey::AutoScrollDisabled => {
                self.auto_scroll_disabled = defaults.auto_scroll_disabled;
            }
            SettingKey::ReplyInterval => self.reply_interval_secs = defaults.reply_interval_secs,
            SettingKey::ReplyLanguage => self.reply_language = defaults.reply_language,
            SettingKey::ReplyTopic => self.reply_topic = defaults.reply_topic,
            SettingKey::InfinityMode | SettingKey::UserLanguage => return false,
        }
        *self != before
    }

    /// Value to seed under `key` when the store has nothing for it.
    ///
    /// Only the reply language, topic and interval are seeded.
    #[must_use]
    pub fn seed_value(key: SettingKey, detected_language: &str) -> Option<Value> {
        match key {
            SettingKey::ReplyLanguage => Some(Value::String(detected_language.to_string())),
            SettingKey::ReplyTopic => Some(Value::String(ReplyTopic::ALL_SENTINEL.to_string())),
            SettingKey::ReplyInterval => Some(Value::from(DEFAULT_REPLY_INTERVAL_SECS)),
            _ => None,
        }
    }
}

/// Check that `value` is acceptable under `key` without applying it.
///
/// Unlike [`Configuration::apply`], this also covers the mirror keys
/// (`infinityMode` must be a boolean, `userLanguage` a string).
///
/// # Errors
///
/// Returns the [`ValidationError`] the value would be rejected with.
pub fn validate(key: SettingKey, value: &Value) -> Result<(), ValidationError> {
    match key {
        SettingKey::InfinityMode => parse_flag(key, value).map(drop),
        SettingKey::UserLanguage => parse_text(key, value).map(drop),
        _ => Configuration::default().apply(key, value).map(drop),
    }
}

fn parse_flag(key: SettingKey, value: &Value) -> Result<bool, ValidationError> {
    match value {
        Value::Bool(flag) => Ok(*flag),
        Value::Null => Ok(false),
        _ => Err(ValidationError::WrongType {
            key: key.as_str(),
            expected: "a boolean",
        }),
    }
}

fn parse_text(key: SettingKey, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.trim().to_string()),
        Value::Null => Ok(String::new()),
        _ => Err(ValidationError::WrongType {
            key: key.as_str(),
            expected: "a string",
        }),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_interval(value: &Value) -> Result<NonZeroU64, ValidationError> {
    let wrong_type = || ValidationError::WrongType {
        key: SettingKey::ReplyInterval.as_str(),
        expected: "a positive integer",
    };
    let secs = match value {
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(secs), _) => secs,
            (None, Some(secs)) if secs >= 1.0 => secs.trunc() as u64,
            (None, Some(_)) => 0,
            (None, None) => return Err(wrong_type()),
        },
        Value::String(text) => {
            let text = text.trim();
            match text.parse::<i64>() {
                Ok(secs) => u64::try_from(secs).unwrap_or(0),
                Err(_) => text.parse::<f64>().map_err(|_| wrong_type())?.max(0.0).trunc() as u64,
            }
        }
        _ => return Err(wrong_type()),
    };
    NonZeroU64::new(secs).ok_or(ValidationError::NonPositiveInterval)
}
