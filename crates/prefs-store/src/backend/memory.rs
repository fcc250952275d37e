use std::{collections::HashMap, sync::RwLock};

use crate::{
    store::{Store, StoreError},
    value::StoredValue,
};

/// A [`Store`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, StoredValue>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `values`.
    pub fn with_values<K: Into<String>>(values: impl IntoIterator<Item = (K, StoredValue)>) -> Self {
        Self {
            values: RwLock::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError> {
        Ok(self
            .values
            .read()
            .expect("RwLock should not be poisoned")
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError> {
        self.values
            .write()
            .expect("RwLock should not be poisoned")
            .insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .expect("RwLock should not be poisoned")
            .remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .values
            .read()
            .expect("RwLock should not be poisoned")
            .keys()
            .cloned()
            .collect())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .values
            .read()
            .expect("RwLock should not be poisoned")
            .contains_key(key))
    }
}
