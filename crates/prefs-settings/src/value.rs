use prefs_store::{StoredValue, ValueKind};
use tracing::debug;

/// A Rust type that a setting may hold.
///
/// Implemented for exactly the kinds a store supports: [`bool`], [`String`], [`i64`],
/// [`f64`], [`f32`] and `Vec<u8>`. The trait is sealed.
///
/// Conversion from a stored value is a strict tag check: an `Int` is never read as
/// `f64`, and a `Float` is never read as `f64`.
pub trait SettingValue: crate::___internal::Internal + Clone + Send + Sync + 'static {
    /// The stored kind that corresponds to this type.
    const KIND: ValueKind;

    /// Wraps the value for storage.
    fn into_stored(self) -> StoredValue;

    /// Unwraps a stored value, or returns `None` if it holds a different kind.
    fn from_stored(value: StoredValue) -> Option<Self>;
}

macro_rules! impl_setting_value {
    ($ty:ty, $variant:ident) => {
        impl crate::___internal::Internal for $ty {}
        impl SettingValue for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn into_stored(self) -> StoredValue {
                StoredValue::$variant(self)
            }

            fn from_stored(value: StoredValue) -> Option<Self> {
                match value {
                    StoredValue::$variant(value) => Some(value),
                    _ => None,
                }
            }
        }
    };
}

impl_setting_value!(bool, Bool);
impl_setting_value!(String, Text);
impl_setting_value!(i64, Int);
impl_setting_value!(f64, Double);
impl_setting_value!(f32, Float);
impl_setting_value!(Vec<u8>, Bytes);

/// Interpret `stored` as `T`, falling back to `default` when it is absent or of
/// another kind.
pub(crate) fn value_or_default<T: SettingValue>(
    key: &str,
    stored: Option<StoredValue>,
    default: impl FnOnce() -> T,
) -> T {
    let Some(stored) = stored else {
        return default();
    };

    let found = stored.kind();
    match T::from_stored(stored) {
        Some(value) => value,
        None => {
            debug!(
                "Setting '{}' holds a {} value, expected {}; using default",
                key,
                found,
                T::KIND
            );
            default()
        }
    }
}
