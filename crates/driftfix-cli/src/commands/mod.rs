//! CLI command implementations.

pub mod fix;
pub mod get;

use std::path::Path;

use driftfix::{AdjustmentSet, IdFilter};

/// Parse the adjustment set argument: inline JSON, or `@path`.
pub fn adjustment_set(arg: &str) -> driftfix::Result<AdjustmentSet> {
    match arg.strip_prefix('@') {
        Some(path) => AdjustmentSet::load(Path::new(path)),
        None => AdjustmentSet::from_json(arg),
    }
}

/// Parse the optional id filter argument. Missing or blank means no filter.
pub fn id_filter(arg: Option<&str>) -> driftfix::Result<IdFilter> {
    match arg.map(str::trim) {
        None | Some("") => Ok(IdFilter::all()),
        Some(arg) => match arg.strip_prefix('@') {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| driftfix::DriftError::Io {
                    path: path.into(),
                    source: e,
                })?;
                IdFilter::from_json(&json)
            }
            None => IdFilter::from_json(arg),
        },
    }
}
