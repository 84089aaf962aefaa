//! Settings file error types.

use std::path::PathBuf;

use infinity_domain::error::InfinityError;

/// Errors specific to the TOML settings store.
#[derive(Debug, thiserror::Error)]
pub enum SettingsFileError {
    /// The settings file could not be read or written.
    #[error("settings file {path:?} not accessible")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid TOML.
    #[error("failed to parse settings file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A value cannot be represented in TOML.
    #[error("failed to serialize settings")]
    Serialize(#[source] toml::ser::Error),
}

impl From<SettingsFileError> for InfinityError {
    fn from(err: SettingsFileError) -> Self {
        Self::Storage(Box::new(err))
    }
}
