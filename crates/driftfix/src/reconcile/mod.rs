//! Reconciliation of adjustments against a preference store.
//!
//! Two operations sit at the core:
//!
//! - [`Reconciler::diff`] reports which keys drifted, without side effects.
//! - [`Reconciler::apply`] writes the target value for drifted keys.
//!
//! [`Reconciler::report`] and [`Reconciler::fix`] run them over both tiers
//! of an [`crate::AdjustmentSet`].

mod action;
mod compare;
mod engine;
mod report;

pub use action::{Action, FixScope};
pub use compare::differs;
pub use engine::Reconciler;
pub use report::{Difference, IdReport, Report};
