//! Core type definitions for tagged preference values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag of a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Whole numbers.
    Int,
    /// Double-precision floating point.
    Double,
    /// Single-precision floating point.
    Float,
    /// Boolean values (true/false).
    #[serde(alias = "bool")]
    Boolean,
    /// Text values.
    String,
}

impl ValueKind {
    /// Returns true if this kind carries a numeric tolerance.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Double | ValueKind::Float)
    }

    /// The value used when neither the store nor the adjustment supplies one.
    pub fn zero(&self) -> Value {
        match self {
            ValueKind::Int => Value::Int(0),
            ValueKind::Double => Value::Double(0.0),
            ValueKind::Float => Value::Float(0.0),
            ValueKind::Boolean => Value::Boolean(false),
            ValueKind::String => Value::String(String::new()),
        }
    }

    /// The tag name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Double => "double",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::String => "string",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded preference value.
///
/// Serializes as `{"type": "<kind>", "value": <payload>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Int(i64),
    Double(f64),
    Float(f32),
    #[serde(alias = "bool")]
    Boolean(bool),
    String(String),
}

impl Value {
    /// The type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::String(_) => ValueKind::String,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{:?}", v),
        }
    }
}
