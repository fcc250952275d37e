use std::fmt;

use serde::{Deserialize, Serialize};

/// An untyped value as held by a [`Store`](crate::store::Store).
///
/// Each variant is one of the value kinds every backend must support. The tag is
/// preserved by all backends, so a value written as [`StoredValue::Float`] is always
/// read back as [`StoredValue::Float`] and never widened to [`StoredValue::Double`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    /// A boolean flag.
    Bool(bool),
    /// UTF-8 text.
    Text(String),
    /// A 64-bit signed integer.
    Int(i64),
    /// A double-precision float.
    Double(#[serde(with = "f64_repr")] f64),
    /// A single-precision float.
    Float(#[serde(with = "f32_repr")] f32),
    /// An opaque byte sequence.
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
}

// JSON has no representation for NaN or infinities, so non-finite floats are written as
// their Display string ("NaN", "inf", "-inf") and parsed back from it.
macro_rules! float_repr {
    ($module:ident, $ty:ty) => {
        mod $module {
            use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

            #[derive(Deserialize)]
            #[serde(untagged)]
            enum Repr {
                Number($ty),
                Text(String),
            }

            pub(super) fn serialize<S: Serializer>(
                value: &$ty,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                if value.is_finite() {
                    value.serialize(serializer)
                } else {
                    serializer.serialize_str(&value.to_string())
                }
            }

            pub(super) fn deserialize<'de, D: Deserializer<'de>>(
                deserializer: D,
            ) -> Result<$ty, D::Error> {
                match Repr::deserialize(deserializer)? {
                    Repr::Number(value) => Ok(value),
                    Repr::Text(text) => text
                        .parse::<$ty>()
                        .ok()
                        .filter(|value| !value.is_finite())
                        .ok_or_else(|| D::Error::custom(format!("invalid float '{}'", text))),
                }
            }
        }
    };
}

float_repr!(f64_repr, f64);
float_repr!(f32_repr, f32);

impl StoredValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            StoredValue::Bool(_) => ValueKind::Bool,
            StoredValue::Text(_) => ValueKind::Text,
            StoredValue::Int(_) => ValueKind::Int,
            StoredValue::Double(_) => ValueKind::Double,
            StoredValue::Float(_) => ValueKind::Float,
            StoredValue::Bytes(_) => ValueKind::Bytes,
        }
    }
}

/// The kind tag of a [`StoredValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    #[allow(missing_docs)]
    Bool,
    #[allow(missing_docs)]
    Text,
    #[allow(missing_docs)]
    Int,
    #[allow(missing_docs)]
    Double,
    #[allow(missing_docs)]
    Float,
    #[allow(missing_docs)]
    Bytes,
}

impl ValueKind {
    /// Stable lowercase name of the kind, used in logs and on the command line.
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::Int => "int",
            ValueKind::Double => "double",
            ValueKind::Float => "float",
            ValueKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<bool> for StoredValue {
    fn from(value: bool) -> Self {
        StoredValue::Bool(value)
    }
}

impl From<String> for StoredValue {
    fn from(value: String) -> Self {
        StoredValue::Text(value)
    }
}

impl From<&str> for StoredValue {
    fn from(value: &str) -> Self {
        StoredValue::Text(value.to_owned())
    }
}

impl From<i64> for StoredValue {
    fn from(value: i64) -> Self {
        StoredValue::Int(value)
    }
}

impl From<f64> for StoredValue {
    fn from(value: f64) -> Self {
        StoredValue::Double(value)
    }
}

impl From<f32> for StoredValue {
    fn from(value: f32) -> Self {
        StoredValue::Float(value)
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(value: Vec<u8>) -> Self {
        StoredValue::Bytes(value)
    }
}
