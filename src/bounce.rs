//! Bounce status of a Relay profile.
//!
//! The service sends this as a two-element array `[paused, type]` rather than
//! an object, e.g. `[false, ""]` or `[true, "hard"]`. [`BounceStatus`] gives it
//! named fields and always writes it back in the array form.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeTuple, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Whether forwarding to the account's real address is paused, and why.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BounceStatus {
    /// `true` while delivery is suspended.
    pub paused: bool,
    /// Bounce type: `""` (none), `"soft"` or `"hard"`.
    pub kind: String,
}

/// Reasons a wire value is not a valid bounce status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BounceStatusError {
    #[error("bounce_status must be an array")]
    NotArray,

    #[error("bounce_status must have exactly two elements, got {0}")]
    Length(usize),

    #[error("bounce_status[{index}] must be a {expected}")]
    Element { index: usize, expected: &'static str },
}

impl BounceStatus {
    pub fn new(paused: bool, kind: impl Into<String>) -> Self {
        Self {
            paused,
            kind: kind.into(),
        }
    }

    /// Decode the `[bool, string]` wire form.
    ///
    /// Length is checked before element types, so `["x"]` reports a length
    /// error rather than a type error.
    pub fn from_value(value: &Value) -> Result<Self, BounceStatusError> {
        let items = value.as_array().ok_or(BounceStatusError::NotArray)?;
        if items.len() != 2 {
            return Err(BounceStatusError::Length(items.len()));
        }

        let paused = items[0].as_bool().ok_or(BounceStatusError::Element {
            index: 0,
            expected: "boolean",
        })?;
        let kind = items[1].as_str().ok_or(BounceStatusError::Element {
            index: 1,
            expected: "string",
        })?;

        Ok(Self::new(paused, kind))
    }

    /// Encode to the `[paused, kind]` wire form.
    pub fn to_value(&self) -> Value {
        Value::Array(vec![
            Value::Bool(self.paused),
            Value::String(self.kind.clone()),
        ])
    }
}

impl Serialize for BounceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.paused)?;
        tuple.serialize_element(&self.kind)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for BounceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        BounceStatus::from_value(&value).map_err(de::Error::custom)
    }
}
