//! Adjustment specifications: what each preference key should hold.
//!
//! An adjustment set is a JSON document with two tiers:
//!
//! ```text
//! {
//!   "breaking":  [ { "id": "fov", "adjustment": {"type": "int", "value": 90},
//!                    "defaultValue": {"type": "int", "value": 70} } ],
//!   "recommend": [ { "id": "sensitivity", "adjustment": {"type": "double", "value": 0.8},
//!                    "allowedError": 0.001 } ]
//! }
//! ```

mod filter;
mod set;

pub use filter::IdFilter;
pub use set::{Adjustment, AdjustmentSet};
