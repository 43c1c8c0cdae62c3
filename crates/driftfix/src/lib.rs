//! driftfix: detect and repair preference drift.
//!
//! An adjustment set names preference keys together with the value each one
//! should hold. driftfix compares those targets with what a preference store
//! currently holds and, on request, writes corrections.
//!
//! # Core Principles
//!
//! - **Tolerant**: numeric values within tolerance are left alone
//! - **Two tiers**: breaking corrections come first, recommendations never repeat them
//! - **Minimal writes**: only drifted keys are touched
//!
//! # Example
//!
//! ```
//! use driftfix::{AdjustmentSet, MemoryStore, Reconciler};
//!
//! let set = AdjustmentSet::from_json(r#"{
//!     "breaking": [{
//!         "id": "fov",
//!         "adjustment": {"type": "int", "value": 90},
//!         "defaultValue": {"type": "int", "value": 70}
//!     }]
//! }"#).unwrap();
//!
//! let store = MemoryStore::new();
//! let report = Reconciler::new().report(&store, &set).unwrap();
//!
//! assert_eq!(report.breaking[0].id, "fov");
//! ```

pub mod adjustment;
pub mod config;
pub mod error;
pub mod reconcile;
pub mod store;
pub mod value;

pub use adjustment::{Adjustment, AdjustmentSet, IdFilter};
pub use config::{DEFAULT_EPSILON, ReconcileConfig};
pub use error::{DriftError, Result};
pub use reconcile::{Action, Difference, FixScope, IdReport, Reconciler, Report};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use value::{RawValue, Value, ValueKind};
