//! # infinity-adapter-settings-toml
//!
//! [`SettingsStore`] implementation over a flat TOML table.
//!
//! ```toml
//! replyInterval = 7
//! replyLanguage = "English"
//! replyTopic = "ALL"
//! infinityMode = false
//! ```
//!
//! Values live in memory; when opened on a path, every save rewrites the
//! file (write to a sibling temp file, then rename). The in-memory table only
//! changes once the file has been replaced. Keys the store does not know are
//! kept as-is so several programs can share one file.
//!
//! ## Dependency rule
//!
//! Depends on `infinity-app` (port traits) and `infinity-domain` only.

mod error;

pub use error::SettingsFileError;

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;

use infinity_app::ports::{SettingValues, SettingsStore};
use infinity_domain::error::InfinityError;
use infinity_domain::settings::SettingKey;

type Table = BTreeMap<String, Value>;

/// Settings kept in a TOML file (or only in memory).
pub struct TomlSettingsStore {
    path: Option<PathBuf>,
    values: Mutex<Table>,
}

impl TomlSettingsStore {
    /// A store that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: Mutex::new(Table::new()),
        }
    }

    /// Open the store backed by `path`. A missing file starts empty and is
    /// created on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFileError`] if the file exists but cannot be read
    /// or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsFileError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).map_err(|source| SettingsFileError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Table::new(),
            Err(source) => return Err(SettingsFileError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), "settings file opened");
        Ok(Self {
            path: Some(path),
            values: Mutex::new(values),
        })
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    async fn store(&self, key: SettingKey, value: Value) -> Result<(), SettingsFileError> {
        let mut values = self.values.lock().await;
        let mut next = values.clone();
        // TOML has no null.
        if value.is_null() {
            next.remove(key.as_str());
        } else {
            next.insert(key.as_str().to_string(), value);
        }
        if let Some(path) = &self.path {
            write_atomic(path, &next).await?;
        }
        *values = next;
        Ok(())
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(
        &self,
        keys: &[SettingKey],
    ) -> impl Future<Output = Result<SettingValues, InfinityError>> + Send {
        let keys = keys.to_vec();
        async move {
            let values = self.values.lock().await;
            Ok(keys
                .iter()
                .filter_map(|key| values.get(key.as_str()).map(|value| (*key, value.clone())))
                .collect())
        }
    }

    fn save(
        &self,
        key: SettingKey,
        value: Value,
    ) -> impl Future<Output = Result<(), InfinityError>> + Send {
        async move { self.store(key, value).await.map_err(InfinityError::from) }
    }
}

async fn write_atomic(path: &Path, values: &Table) -> Result<(), SettingsFileError> {
    let text = toml::to_string_pretty(values).map_err(SettingsFileError::Serialize)?;
    let io_error = |source| SettingsFileError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    let tmp = path.with_extension("toml.tmp");
    let written = match tokio::fs::write(&tmp, text).await {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %tmp.display(), error = %cleanup, "failed to remove temp settings file");
        }
        return Err(io_error(err));
    }
    Ok(())
}
