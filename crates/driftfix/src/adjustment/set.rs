//! Adjustment specifications and the two-tier adjustment set.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DriftError, Result};
use crate::value::{RawValue, Value, ValueKind};

/// A declarative rule for one preference key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adjustment {
    /// Key into the preference store.
    pub id: String,

    /// The value being proposed.
    #[serde(alias = "target")]
    pub adjustment: RawValue,

    /// Fallback used when the key is absent from the store.
    #[serde(default, alias = "default", skip_serializing_if = "Option::is_none")]
    pub default_value: Option<RawValue>,

    /// Maximum numeric deviation before the stored value counts as drifted.
    #[serde(default, alias = "tolerance", skip_serializing_if = "Option::is_none")]
    pub allowed_error: Option<f64>,
}

impl Adjustment {
    /// Create an adjustment proposing `target` for `id`.
    pub fn new(id: impl Into<String>, target: Value) -> Self {
        Self {
            id: id.into(),
            adjustment: target.into(),
            default_value: None,
            allowed_error: None,
        }
    }

    /// Set the fallback value.
    pub fn with_default(mut self, default: Value) -> Self {
        self.default_value = Some(default.into());
        self
    }

    /// Set the allowed numeric deviation.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.allowed_error = Some(tolerance);
        self
    }

    /// The declared kind of the target value.
    pub fn kind(&self) -> ValueKind {
        self.adjustment.kind
    }

    /// Decode the target value.
    pub fn target(&self) -> Result<Value> {
        self.adjustment.resolve(&self.id)
    }

    /// Decode the fallback value, or the zero value of the target's kind.
    ///
    /// A default whose declared kind differs from the target's is rejected.
    pub fn resolved_default(&self) -> Result<Value> {
        let kind = self.kind();
        match &self.default_value {
            None => Ok(kind.zero()),
            Some(raw) if raw.kind != kind => Err(DriftError::malformed_value(
                &self.id,
                kind,
                format!("default is declared as {}", raw.kind),
            )),
            Some(raw) => raw.resolve(&self.id),
        }
    }
}

/// Mandatory and advisory adjustments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentSet {
    /// Adjustments that must be corrected.
    #[serde(default)]
    pub breaking: Vec<Adjustment>,

    /// Adjustments applied in a second, optional tier.
    #[serde(default)]
    pub recommend: Vec<Adjustment>,
}

impl AdjustmentSet {
    pub fn new(breaking: Vec<Adjustment>, recommend: Vec<Adjustment>) -> Self {
        Self {
            breaking,
            recommend,
        }
    }

    /// Parse an adjustment set from a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// use driftfix::AdjustmentSet;
    ///
    /// let set = AdjustmentSet::from_json(
    ///     r#"{"breaking": [{"id": "fov", "adjustment": {"type": "int", "value": 90}}]}"#,
    /// ).unwrap();
    /// assert_eq!(set.breaking.len(), 1);
    /// assert!(set.recommend.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DriftError::MalformedInput(format!("invalid adjustment set: {}", e)))
    }

    /// Load an adjustment set from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| DriftError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            DriftError::MalformedInput(format!(
                "invalid adjustment set '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Total number of adjustments across both tiers.
    pub fn len(&self) -> usize {
        self.breaking.len() + self.recommend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breaking.is_empty() && self.recommend.is_empty()
    }
}
