//! Tagged preference values.

mod raw;
mod types;

pub use raw::{RawValue, coerce};
pub use types::{Value, ValueKind};
