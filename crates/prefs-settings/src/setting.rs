//! Typed handle to a single setting.

use std::sync::Arc;

use prefs_store::Store;

use crate::{
    Key, SettingsError,
    value::{SettingValue, value_or_default},
};

/// A handle to a single setting: one key, one default value, one suite.
///
/// The handle caches nothing; every call is a round-trip to the store. Reads never
/// fail because of what is stored: an absent entry and an entry of the wrong kind both
/// resolve to the default value. Use [`TypedSetting::has_stored_value`] to tell
/// "never set" apart from "set to something equal to the default".
///
/// # Example
/// ```rust
/// use std::sync::Arc;
///
/// use prefs_settings::{TypedSetting, register_setting_key};
/// use prefs_store::MemoryStore;
///
/// register_setting_key!(const DARK_MODE: bool = "darkMode");
///
/// let dark_mode = TypedSetting::from_key(Arc::new(MemoryStore::new()), DARK_MODE, false);
/// assert!(!dark_mode.get()?);
///
/// dark_mode.set(true)?;
/// assert!(dark_mode.get()?);
/// # Ok::<_, prefs_settings::SettingsError>(())
/// ```
#[derive(Clone)]
pub struct TypedSetting<T> {
    store: Arc<dyn Store>,
    key: String,
    default: T,
}

impl<T: SettingValue> TypedSetting<T> {
    /// Bind `key` in `store` with the given default value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::EmptyKey`] if `key` is empty. No I/O is performed.
    pub fn new(
        store: Arc<dyn Store>,
        key: impl Into<String>,
        default: T,
    ) -> Result<Self, SettingsError> {
        let key = key.into();
        if key.is_empty() {
            return Err(SettingsError::EmptyKey);
        }
        Ok(Self {
            store,
            key,
            default,
        })
    }

    /// Bind a key declared with [`register_setting_key!`](crate::register_setting_key).
    pub fn from_key(store: Arc<dyn Store>, key: Key<T>, default: T) -> Self {
        Self {
            store,
            key: key.name().to_owned(),
            default,
        }
    }

    /// The key this setting is stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The value returned when nothing readable is stored.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Get the current value, or the default if the setting is absent or holds a value
    /// of another kind.
    pub fn get(&self) -> Result<T, SettingsError> {
        let stored = self.store.get(&self.key)?;
        Ok(value_or_default(&self.key, stored, || self.default.clone()))
    }

    /// Store a new value, replacing whatever was stored before.
    pub fn set(&self, value: T) -> Result<(), SettingsError> {
        self.store.set(&self.key, value.into_stored())?;
        Ok(())
    }

    /// Remove the stored value so that [`TypedSetting::get`] returns the default again.
    /// Resetting a setting that is not stored does nothing.
    pub fn reset(&self) -> Result<(), SettingsError> {
        self.store.remove(&self.key)?;
        Ok(())
    }

    /// True if the store holds any value under this key, even one of the wrong kind.
    pub fn has_stored_value(&self) -> Result<bool, SettingsError> {
        Ok(self.store.contains(&self.key)?)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for TypedSetting<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypedSetting")
            .field("key", &self.key)
            .field("default", &self.default)
            .finish()
    }
}
