//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use driftfix::{Action, ReconcileConfig};
use std::path::PathBuf;

/// driftfix: detect and repair preference drift
#[derive(Parser)]
#[command(name = "driftfix")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the preference store file
    #[arg(long, env = "DRIFTFIX_STORE", value_name = "PATH")]
    pub store: PathBuf,

    /// Default tolerance for double and float adjustments
    #[arg(long, global = true)]
    pub epsilon: Option<f64>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Engine configuration from the command line.
    pub fn reconcile_config(&self) -> ReconcileConfig {
        self.epsilon
            .map(ReconcileConfig::with_epsilon)
            .unwrap_or_default()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report keys that drifted from their targets
    Get {
        /// Adjustment set as JSON, or @FILE to read it from a file
        #[arg(value_name = "ADJUSTMENTS")]
        adjustments: String,

        /// Report only the drifted ids
        #[arg(long)]
        ids_only: bool,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Correct drifted keys in the breaking tier
    FixBreaking {
        /// Adjustment set as JSON, or @FILE to read it from a file
        #[arg(value_name = "ADJUSTMENTS")]
        adjustments: String,

        /// JSON array of ids to correct (default: all)
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Correct drifted keys in both tiers
    FixAll {
        /// Adjustment set as JSON, or @FILE to read it from a file
        #[arg(value_name = "ADJUSTMENTS")]
        adjustments: String,

        /// JSON array of ids to correct (default: all)
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },
}

impl Commands {
    pub fn action(&self) -> Action {
        match self {
            Commands::Get { .. } => Action::Get,
            Commands::FixBreaking { .. } => Action::FixBreaking,
            Commands::FixAll { .. } => Action::FixAll,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}. Use json or text.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}
