//! The reconciliation engine.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::adjustment::{Adjustment, AdjustmentSet, IdFilter};
use crate::config::ReconcileConfig;
use crate::error::Result;
use crate::store::{self, PreferenceStore};

use super::action::FixScope;
use super::compare::differs;
use super::report::{Difference, Report};

/// Compares adjustments against a preference store and corrects drift.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    /// Create a reconciler with the default tolerances.
    pub fn new() -> Self {
        Self::with_config(ReconcileConfig::default())
    }

    /// Create a reconciler with custom configuration.
    pub fn with_config(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Find the adjustments whose stored value drifted from the target.
    ///
    /// Ids in `exclude` are skipped. Results keep the order of
    /// `adjustments`. The store is only read.
    pub fn diff<S: PreferenceStore + ?Sized>(
        &self,
        store: &S,
        adjustments: &[Adjustment],
        exclude: &HashSet<String>,
    ) -> Result<Vec<Difference>> {
        let mut differences = Vec::new();

        for adjustment in adjustments {
            if exclude.contains(&adjustment.id) {
                debug!(id = %adjustment.id, "skipping, already reported");
                continue;
            }

            if let Some(difference) = self.check(store, adjustment)? {
                differences.push(difference);
            }
        }

        Ok(differences)
    }

    /// Write the target value of every drifted adjustment allowed by `filter`.
    ///
    /// Keys already within tolerance are left untouched. Writes are not
    /// rolled back if a later adjustment fails. Returns the ids written.
    pub fn apply<S: PreferenceStore + ?Sized>(
        &self,
        store: &mut S,
        adjustments: &[Adjustment],
        filter: &IdFilter,
    ) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for adjustment in adjustments {
            if !filter.allows(&adjustment.id) {
                debug!(id = %adjustment.id, "skipping, not in filter");
                continue;
            }

            if let Some(difference) = self.check(store, adjustment)? {
                store::write(store, &difference.id, &difference.new_value)?;
                info!(
                    id = %difference.id,
                    old = %difference.old_value,
                    new = %difference.new_value,
                    "corrected preference"
                );
                written.push(difference.id);
            }
        }

        Ok(written)
    }

    /// Diff both tiers, suppressing recommend entries for keys that are
    /// already breaking.
    pub fn report<S: PreferenceStore + ?Sized>(&self, store: &S, set: &AdjustmentSet) -> Result<Report> {
        let breaking = self.diff(store, &set.breaking, &HashSet::new())?;

        let already_reported: HashSet<String> = breaking.iter().map(|d| d.id.clone()).collect();
        let recommend = self.diff(store, &set.recommend, &already_reported)?;

        debug!(
            breaking = breaking.len(),
            recommend = recommend.len(),
            "report complete"
        );

        Ok(Report {
            breaking,
            recommend,
        })
    }

    /// Apply the breaking tier, then the recommend tier when `scope` is
    /// [`FixScope::All`]. Both tiers share `filter`.
    pub fn fix<S: PreferenceStore + ?Sized>(
        &self,
        store: &mut S,
        set: &AdjustmentSet,
        scope: FixScope,
        filter: &IdFilter,
    ) -> Result<Vec<String>> {
        let mut written = self.apply(store, &set.breaking, filter)?;

        if scope == FixScope::All {
            written.extend(self.apply(store, &set.recommend, filter)?);
        }

        Ok(written)
    }

    /// Resolve one adjustment against the store.
    fn check<S: PreferenceStore + ?Sized>(
        &self,
        store: &S,
        adjustment: &Adjustment,
    ) -> Result<Option<Difference>> {
        let target = adjustment.target()?;
        let default = adjustment.resolved_default()?;
        let current = store::read(store, &adjustment.id, &default)?;

        let drifted = differs(
            &adjustment.id,
            &current,
            &target,
            adjustment.allowed_error,
            &self.config,
        )?;

        debug!(
            id = %adjustment.id,
            kind = %adjustment.kind(),
            current = %current,
            target = %target,
            drifted,
            "compared"
        );

        Ok(drifted.then(|| Difference {
            id: adjustment.id.clone(),
            old_value: current,
            new_value: target,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::value::Value;

    #[test]
    fn test_absent_key_uses_default() {
        let store = MemoryStore::new();
        let adjustments = vec![
            Adjustment::new("fov", Value::Int(90))
                .with_default(Value::Int(70))
                .with_tolerance(0.0),
        ];

        let diff = Reconciler::new()
            .diff(&store, &adjustments, &HashSet::new())
            .unwrap();

        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].old_value, Value::Int(70));
        assert_eq!(diff[0].new_value, Value::Int(90));
    }

    #[test]
    fn test_default_equal_to_target_is_not_drift() {
        let store = MemoryStore::new();
        let adjustments = vec![Adjustment::new("overlay", Value::Boolean(false))];

        let diff = Reconciler::new()
            .diff(&store, &adjustments, &HashSet::new())
            .unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn test_apply_returns_written_ids() {
        let mut store = MemoryStore::new().with_entry("theme", "dark");
        let adjustments = vec![
            Adjustment::new("theme", Value::String("dark".to_string())),
            Adjustment::new("fov", Value::Int(90)),
        ];

        let written = Reconciler::new()
            .apply(&mut store, &adjustments, &IdFilter::all())
            .unwrap();

        assert_eq!(written, vec!["fov"]);
        assert_eq!(store.get_raw("fov"), Some("90"));
    }

    #[test]
    fn test_configured_epsilon_is_used() {
        let store = MemoryStore::new().with_entry("sensitivity", "1.0");
        let adjustments = vec![Adjustment::new("sensitivity", Value::Double(1.05))];

        let strict = Reconciler::new();
        assert_eq!(
            strict.diff(&store, &adjustments, &HashSet::new()).unwrap().len(),
            1
        );

        let loose = Reconciler::with_config(ReconcileConfig::with_epsilon(0.1));
        assert!(loose.diff(&store, &adjustments, &HashSet::new()).unwrap().is_empty());
    }
}
