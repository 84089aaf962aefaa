//! Reply topic — either unrestricted or one named subject.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Topic the generated questions should stay on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplyTopic {
    /// No restriction. Persisted as the `"ALL"` sentinel.
    #[default]
    All,
    Named(String),
}

impl ReplyTopic {
    /// Sentinel string meaning "any topic".
    pub const ALL_SENTINEL: &'static str = "ALL";

    /// Interpret a persisted topic string. Blank input means unrestricted.
    #[must_use]
    pub fn from_setting(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == Self::ALL_SENTINEL {
            Self::All
        } else {
            Self::Named(trimmed.to_string())
        }
    }

    /// The string persisted for this topic.
    #[must_use]
    pub fn as_setting(&self) -> &str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for ReplyTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_setting())
    }
}

impl Serialize for ReplyTopic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_setting())
    }
}

impl<'de> Deserialize<'de> for ReplyTopic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_setting(&raw))
    }
}
