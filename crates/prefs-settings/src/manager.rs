//! Suite-wide settings administration.

use std::{collections::BTreeMap, sync::Arc};

use prefs_store::{Store, StoredValue, SuiteRegistry};

use crate::{
    SettingsError,
    value::{SettingValue, value_or_default},
};

/// Bulk operations over every setting in one suite.
///
/// Unlike [`TypedSetting`](crate::TypedSetting), the manager is not bound to a key or a
/// type: each call names its key, and typed reads take their default per call.
#[derive(Clone)]
pub struct SettingsManager {
    store: Arc<dyn Store>,
}

impl SettingsManager {
    /// Create a manager for `store`.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Create a manager for the default suite of `registry`.
    pub fn with_default_suite(registry: &SuiteRegistry) -> Result<Self, SettingsError> {
        Ok(Self::new(registry.default_suite()?))
    }

    /// Create a manager for suite `name` of `registry`.
    pub fn for_suite(registry: &SuiteRegistry, name: &str) -> Result<Self, SettingsError> {
        Ok(Self::new(registry.suite(name)?))
    }

    /// Store `value` under `key`, replacing whatever was stored before.
    pub fn set_value<T: SettingValue>(&self, key: &str, value: T) -> Result<(), SettingsError> {
        self.store.set(key, value.into_stored())?;
        Ok(())
    }

    /// Read `key` as `T`, or `default` if it is absent or holds a value of another kind.
    pub fn get_value<T: SettingValue>(&self, key: &str, default: T) -> Result<T, SettingsError> {
        let stored = self.store.get(key)?;
        Ok(value_or_default(key, stored, || default))
    }

    /// Store an already-tagged value under `key`.
    pub fn set_raw(&self, key: &str, value: StoredValue) -> Result<(), SettingsError> {
        self.store.set(key, value)?;
        Ok(())
    }

    /// Read `key` without interpreting it.
    pub fn get_raw(&self, key: &str) -> Result<Option<StoredValue>, SettingsError> {
        Ok(self.store.get(key)?)
    }

    /// True if any value is stored under `key`.
    pub fn has_key(&self, key: &str) -> Result<bool, SettingsError> {
        Ok(self.store.contains(key)?)
    }

    /// Remove `key`. Removing an absent key does nothing.
    pub fn remove_setting(&self, key: &str) -> Result<(), SettingsError> {
        self.store.remove(key)?;
        Ok(())
    }

    /// Remove every key of this suite and return how many keys were enumerated.
    ///
    /// Keys are listed first and then removed one by one; this is not atomic. A key
    /// written by someone else in between may survive, and a key removed in between is
    /// skipped harmlessly. Other suites are never touched.
    pub fn clear_all_settings(&self) -> Result<usize, SettingsError> {
        let keys = self.store.keys()?;
        for key in &keys {
            self.store.remove(key)?;
        }
        Ok(keys.len())
    }

    /// Every key currently present, in the store's native order.
    pub fn all_keys(&self) -> Result<Vec<String>, SettingsError> {
        Ok(self.store.keys()?)
    }

    /// Every entry currently present. Keys removed while the snapshot is being taken
    /// are left out.
    pub fn snapshot(&self) -> Result<BTreeMap<String, StoredValue>, SettingsError> {
        let mut entries = BTreeMap::new();
        for key in self.store.keys()? {
            if let Some(value) = self.store.get(&key)? {
                entries.insert(key, value);
            }
        }
        Ok(entries)
    }
}
