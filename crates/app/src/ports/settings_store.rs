//! Settings store port — key/value persistence shared by every surface.
//!
//! The store is the single source of truth: the controller reads through it
//! on load and on change, and writes through it on every mutation. Change
//! notifications reach this page as bridge events, not through the store.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use infinity_domain::error::InfinityError;
use infinity_domain::settings::SettingKey;

/// Values returned by a load. Keys with nothing stored are absent.
pub type SettingValues = BTreeMap<SettingKey, Value>;

/// Persisted settings.
pub trait SettingsStore {
    /// Load the values stored under `keys`.
    fn load(
        &self,
        keys: &[SettingKey],
    ) -> impl Future<Output = Result<SettingValues, InfinityError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn save(
        &self,
        key: SettingKey,
        value: Value,
    ) -> impl Future<Output = Result<(), InfinityError>> + Send;
}

impl<T: SettingsStore + Send + Sync> SettingsStore for Arc<T> {
    fn load(
        &self,
        keys: &[SettingKey],
    ) -> impl Future<Output = Result<SettingValues, InfinityError>> + Send {
        (**self).load(keys)
    }

    fn save(
        &self,
        key: SettingKey,
        value: Value,
    ) -> impl Future<Output = Result<(), InfinityError>> + Send {
        (**self).save(key, value)
    }
}
