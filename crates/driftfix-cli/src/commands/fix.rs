//! Fix commands - write target values for drifted preferences.

use std::path::PathBuf;

use colored::Colorize;
use driftfix::{Action, FileStore, ReconcileConfig, Reconciler};
use tracing::info;

pub fn run(
    store_path: PathBuf,
    config: ReconcileConfig,
    action: Action,
    adjustments: String,
    filter: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let scope = action
        .fix_scope()
        .ok_or_else(|| format!("'{}' does not modify the store", action))?;

    // Decode everything before touching the store
    let set = super::adjustment_set(&adjustments)?;
    let filter = super::id_filter(filter.as_deref())?;

    let mut store = FileStore::open(&store_path)?;
    let written = Reconciler::with_config(config).fix(&mut store, &set, scope, &filter)?;

    info!(
        store = %store_path.display(),
        ?scope,
        written = written.len(),
        "fix complete"
    );

    if verbose {
        eprintln!(
            "{} {} preferences in {}",
            "Corrected".cyan().bold(),
            written.len().to_string().white().bold(),
            store_path.display()
        );
        for id in &written {
            eprintln!("  {}", id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"{"breaking": [{"id": "fov", "adjustment": {"type": "int", "value": 90}}]}"#;

    #[test]
    fn test_scope_follows_action() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("prefs.json");

        run(
            store.clone(),
            ReconcileConfig::default(),
            Action::FixBreaking,
            MANIFEST.to_string(),
            None,
            false,
        )
        .unwrap();

        assert!(FileStore::open(&store).unwrap().entries().contains_key("fov"));
    }

    #[test]
    fn test_read_only_action_never_opens_store() {
        let dir = TempDir::new().unwrap();
        let store = dir.path().join("prefs.json");

        let result = run(
            store.clone(),
            ReconcileConfig::default(),
            Action::Get,
            MANIFEST.to_string(),
            None,
            false,
        );

        assert!(result.is_err());
        assert!(!store.exists());
    }
}
