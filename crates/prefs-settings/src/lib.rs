#![doc = include_str!("../README.md")]

mod error;
mod key;
mod manager;
mod setting;
mod value;

pub use error::SettingsError;
pub use key::Key;
pub use manager::SettingsManager;
pub use setting::TypedSetting;
pub use value::SettingValue;

/// This code is not meant to be used directly. [`SettingValue`] is implemented only for
/// the value kinds a store supports.
#[doc(hidden)]
pub mod ___internal {

    // This trait is in an internal module to try to forbid users from implementing
    // `SettingValue` directly.
    pub trait Internal {}
}
