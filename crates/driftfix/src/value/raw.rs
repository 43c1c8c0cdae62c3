//! Undecoded `{type, value}` pairs and their coercion to [`Value`].

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::{DriftError, Result};

use super::types::{Value, ValueKind};

/// A tagged value exactly as it appeared in the input.
///
/// The payload is kept as raw JSON and only coerced when the engine first
/// needs it, so a bad payload fails the pass at that adjustment rather than
/// during parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawValue {
    #[serde(rename = "type")]
    pub kind: ValueKind,
    #[serde(default)]
    pub value: Json,
}

impl RawValue {
    pub fn new(kind: ValueKind, value: impl Into<Json>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Coerce the payload to this value's own kind.
    ///
    /// `id` is only used for error reporting.
    pub fn resolve(&self, id: &str) -> Result<Value> {
        coerce(id, self.kind, &self.value)
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        let kind = value.kind();
        let json = match value {
            Value::Int(v) => Json::from(v),
            Value::Double(v) => Json::from(v),
            Value::Float(v) => Json::from(v),
            Value::Boolean(v) => Json::from(v),
            Value::String(v) => Json::from(v),
        };
        Self { kind, value: json }
    }
}

/// Coerce a JSON literal to `kind`.
pub fn coerce(id: &str, kind: ValueKind, payload: &Json) -> Result<Value> {
    let malformed = |reason: String| DriftError::malformed_value(id, kind, reason);

    match kind {
        ValueKind::Int => match payload {
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Value::Int(v))
                } else {
                    match n.as_f64() {
                        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                            Ok(Value::Int(f as i64))
                        }
                        _ => Err(malformed(format!("{} is not an integer", n))),
                    }
                }
            }
            Json::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|e| malformed(format!("'{}': {}", s, e))),
            other => Err(malformed(format!("unexpected {}", describe(other)))),
        },

        ValueKind::Double => parse_f64(payload)
            .map(Value::Double)
            .map_err(malformed),

        ValueKind::Float => {
            let v = parse_f64(payload).map_err(malformed)?;
            let narrowed = v as f32;
            if v.is_finite() && !narrowed.is_finite() {
                return Err(malformed(format!("{} is out of range for float", v)));
            }
            Ok(Value::Float(narrowed))
        }

        ValueKind::Boolean => match payload {
            Json::Bool(b) => Ok(Value::Boolean(*b)),
            Json::String(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Boolean(true)),
            Json::String(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Boolean(false)),
            Json::String(s) => Err(malformed(format!("'{}' is not a boolean", s))),
            other => Err(malformed(format!("unexpected {}", describe(other)))),
        },

        ValueKind::String => match payload {
            Json::String(s) => Ok(Value::String(s.clone())),
            Json::Number(n) => Ok(Value::String(n.to_string())),
            Json::Bool(b) => Ok(Value::String(b.to_string())),
            other => Err(malformed(format!("unexpected {}", describe(other)))),
        },
    }
}

fn parse_f64(payload: &Json) -> std::result::Result<f64, String> {
    match payload {
        Json::Number(n) => n
            .as_f64()
            .ok_or_else(|| format!("{} is not representable as a number", n)),
        Json::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("'{}': {}", s, e)),
        other => Err(format!("unexpected {}", describe(other))),
    }
}

fn describe(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_int_coercion() {
        assert_eq!(coerce("k", ValueKind::Int, &json!(90)).unwrap(), Value::Int(90));
        assert_eq!(coerce("k", ValueKind::Int, &json!("-3")).unwrap(), Value::Int(-3));
        assert_eq!(coerce("k", ValueKind::Int, &json!(4.0)).unwrap(), Value::Int(4));
        assert!(coerce("k", ValueKind::Int, &json!(4.5)).is_err());
        assert!(coerce("k", ValueKind::Int, &json!("ninety")).is_err());
        assert!(coerce("k", ValueKind::Int, &json!(true)).is_err());
    }

    #[test]
    fn test_float_coercion_narrows() {
        assert_eq!(
            coerce("k", ValueKind::Float, &json!(0.5)).unwrap(),
            Value::Float(0.5)
        );
        assert!(coerce("k", ValueKind::Float, &json!(1e300)).is_err());
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(
            coerce("k", ValueKind::Boolean, &json!("TRUE")).unwrap(),
            Value::Boolean(true)
        );
        assert!(coerce("k", ValueKind::Boolean, &json!(1)).is_err());
        assert!(coerce("k", ValueKind::Boolean, &json!("yes")).is_err());
    }

    #[test]
    fn test_string_coercion_renders_scalars() {
        assert_eq!(
            coerce("k", ValueKind::String, &json!(12)).unwrap(),
            Value::String("12".to_string())
        );
        assert!(coerce("k", ValueKind::String, &json!(null)).is_err());
        assert!(coerce("k", ValueKind::String, &json!(["a"])).is_err());
    }

    #[test]
    fn test_malformed_value_names_the_key() {
        let raw = RawValue::new(ValueKind::Double, json!({"x": 1}));
        match raw.resolve("sensitivity") {
            Err(DriftError::MalformedValue { id, kind, .. }) => {
                assert_eq!(id, "sensitivity");
                assert_eq!(kind, ValueKind::Double);
            }
            other => panic!("expected MalformedValue, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_payload_is_malformed() {
        let raw: RawValue = serde_json::from_str(r#"{"type": "int"}"#).unwrap();
        assert!(raw.resolve("fov").is_err());
    }

    #[test]
    fn test_from_value_round_trips_kind() {
        let raw = RawValue::from(Value::String("dark".to_string()));
        assert_eq!(raw.kind, ValueKind::String);
        assert_eq!(raw.resolve("theme").unwrap(), Value::String("dark".to_string()));
    }
}
