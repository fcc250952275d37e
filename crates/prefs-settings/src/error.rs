use prefs_store::StoreError;
use thiserror::Error;

/// Errors that can occur when working with settings.
///
/// A stored value of the wrong kind, or no stored value at all, is never an error:
/// reads resolve both to the default value.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A setting was declared with an empty key.
    #[error("Setting key must not be empty")]
    EmptyKey,
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
