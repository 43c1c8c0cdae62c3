//! Get command - report drifted preferences.

use std::path::PathBuf;

use colored::Colorize;
use driftfix::{Difference, FileStore, ReconcileConfig, Reconciler, Report};

use crate::cli::OutputFormat;

pub fn run(
    store_path: PathBuf,
    config: ReconcileConfig,
    adjustments: String,
    ids_only: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let set = super::adjustment_set(&adjustments)?;
    let store = FileStore::open(&store_path)?;

    let report = Reconciler::with_config(config).report(&store, &set)?;

    match format {
        OutputFormat::Json if ids_only => println!("{}", report.ids().to_json()?),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print_text(&report, ids_only),
    }

    Ok(())
}

fn print_text(report: &Report, ids_only: bool) {
    if report.is_empty() {
        println!("{}", "No drift detected.".green());
        return;
    }

    print_tier("Breaking", &report.breaking, ids_only);
    print_tier("Recommend", &report.recommend, ids_only);
}

fn print_tier(title: &str, differences: &[Difference], ids_only: bool) {
    if differences.is_empty() {
        return;
    }

    println!(
        "{} ({})",
        title.cyan().bold(),
        differences.len().to_string().white().bold()
    );

    for difference in differences {
        if ids_only {
            println!("  {}", difference.id.white().bold());
        } else {
            println!(
                "  {} [{}] {} -> {}",
                difference.id.white().bold(),
                difference.new_value.kind().to_string().dimmed(),
                difference.old_value.to_string().red(),
                difference.new_value.to_string().green()
            );
        }
    }
}
