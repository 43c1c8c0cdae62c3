//! Id filter restricting which adjustments get applied.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DriftError, Result};

/// A set of adjustment ids. Empty means every id passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdFilter {
    ids: HashSet<String>,
}

impl IdFilter {
    /// A filter that lets every id through.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a JSON array of ids.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| DriftError::MalformedInput(format!("invalid id filter: {}", e)))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if `id` should be processed.
    pub fn allows(&self, id: &str) -> bool {
        self.ids.is_empty() || self.ids.contains(id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl<S: Into<String>> FromIterator<S> for IdFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
