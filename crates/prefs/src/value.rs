use base64::{Engine, engine::general_purpose::STANDARD};
use prefs_store::StoredValue;
use serde::Serialize;
use thiserror::Error;

use crate::command::KindArg;

#[derive(Debug, Error)]
pub enum ParseValueError {
    #[error("'{0}' is not a boolean, expected true or false")]
    Bool(String),
    #[error("'{0}' is not a 64-bit integer")]
    Int(String),
    #[error("'{0}' is not a number")]
    Number(String),
    #[error("Invalid base64: {0}")]
    Bytes(#[from] base64::DecodeError),
}

/// Parse a command line argument into a value of the requested kind.
pub fn parse_value(kind: KindArg, raw: &str) -> Result<StoredValue, ParseValueError> {
    Ok(match kind {
        KindArg::Bool => StoredValue::Bool(
            raw.parse()
                .map_err(|_| ParseValueError::Bool(raw.to_owned()))?,
        ),
        KindArg::Text => StoredValue::Text(raw.to_owned()),
        KindArg::Int => StoredValue::Int(
            raw.parse()
                .map_err(|_| ParseValueError::Int(raw.to_owned()))?,
        ),
        KindArg::Double => StoredValue::Double(
            raw.parse()
                .map_err(|_| ParseValueError::Number(raw.to_owned()))?,
        ),
        KindArg::Float => StoredValue::Float(
            raw.parse()
                .map_err(|_| ParseValueError::Number(raw.to_owned()))?,
        ),
        KindArg::Bytes => StoredValue::Bytes(STANDARD.decode(raw)?),
    })
}

// JSON numbers can't hold NaN or infinities, show those as text instead of null.
fn float_view(value: f64) -> serde_json::Value {
    if value.is_finite() {
        serde_json::Value::from(value)
    } else {
        serde_json::Value::from(value.to_string())
    }
}

/// A stored entry as shown to the user.
#[derive(Serialize, Debug, PartialEq)]
pub struct EntryView {
    pub key: String,
    pub kind: &'static str,
    pub value: serde_json::Value,
}

impl EntryView {
    pub fn new(key: String, value: &StoredValue) -> Self {
        let shown = match value {
            StoredValue::Bool(v) => serde_json::Value::from(*v),
            StoredValue::Text(v) => serde_json::Value::from(v.as_str()),
            StoredValue::Int(v) => serde_json::Value::from(*v),
            StoredValue::Double(v) => float_view(*v),
            StoredValue::Float(v) => float_view(f64::from(*v)),
            StoredValue::Bytes(v) => serde_json::Value::from(STANDARD.encode(v)),
        };
        Self {
            key,
            kind: value.kind().name(),
            value: shown,
        }
    }

    /// One line of plain output: `key (kind) = value`.
    pub fn line(&self) -> String {
        let value = match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        format!("{} ({}) = {}", self.key, self.kind, value)
    }
}
