use crate::value::StoredValue;

/// An error resulting from operations on a store.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// An internal unspecified error, used by caller-provided stores.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A stored entry could not be encoded or decoded by the backend.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// An error reported by the SQLite backend.
    #[error(transparent)]
    Database(#[from] rusqlite::Error),

    /// The suite name is not a valid identifier, see [validate_suite_name].
    #[error("Invalid suite name '{0}': only lowercase letters, digits and underscores are allowed")]
    InvalidSuiteName(String),
}

/// A persistent key-value namespace holding untyped [`StoredValue`]s.
///
/// Implementations must be safe to share across threads. Every call is a synchronous
/// round-trip to the backing storage, and failures are reported through [`StoreError`]
/// rather than suppressed.
pub trait Store: Send + Sync {
    /// Retrieves the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<StoredValue>, StoreError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: StoredValue) -> Result<(), StoreError>;
    /// Removes the value stored under `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
    /// Lists every key currently present, in the backend's native order.
    fn keys(&self) -> Result<Vec<String>, StoreError>;

    /// Returns true if any value is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

/// Validate that the provided suite name is usable as a storage identifier.
///
/// Suite names double as SQLite table names, so they are restricted to lowercase ASCII
/// letters, digits and underscores, must not be empty and must not start with a digit.
/// SQLite compares table names case-insensitively, so mixed case would let two distinct
/// names share one table.
pub const fn validate_suite_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.is_empty() || bytes[0].is_ascii_digit() {
        return false;
    }
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        if !(byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_') {
            return false;
        }
        i += 1;
    }
    true
}
