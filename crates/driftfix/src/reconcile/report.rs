//! Reconciliation results.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::value::Value;

/// A key whose stored value has drifted from its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Difference {
    /// The preference key.
    pub id: String,
    /// Value currently in the store (or the resolved default).
    pub old_value: Value,
    /// Value being proposed.
    pub new_value: Value,
}

/// Differences found in both tiers of an adjustment set.
///
/// A key listed under `breaking` is never repeated under `recommend`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub breaking: Vec<Difference>,
    pub recommend: Vec<Difference>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.breaking.is_empty() && self.recommend.is_empty()
    }

    /// Total number of drifted keys across both tiers.
    pub fn len(&self) -> usize {
        self.breaking.len() + self.recommend.len()
    }

    /// Reduce the report to the drifted ids only.
    pub fn ids(&self) -> IdReport {
        IdReport {
            breaking: self.breaking.iter().map(|d| d.id.clone()).collect(),
            recommend: self.recommend.iter().map(|d| d.id.clone()).collect(),
        }
    }

    /// Serialize the report as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Drifted ids per tier, without values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdReport {
    pub breaking: Vec<String>,
    pub recommend: Vec<String>,
}

impl IdReport {
    /// Serialize the id lists as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
