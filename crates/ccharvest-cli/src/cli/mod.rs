//! CLI for the ccharvest download-history harvester.

mod commands;

use anyhow::Result;
use ccharvest_core::{config, logging};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_classify, run_export, run_harvest};

/// Top-level CLI for ccharvest.
#[derive(Debug, Parser)]
#[command(name = "ccharvest")]
#[command(about = "Harvest custom-content downloads from browser history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Path and timeout overrides shared by `run` and `export`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct Overrides {
    /// Path to the live browser history database.
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Verbatim CSV export of the downloads table.
    #[arg(long, value_name = "PATH")]
    pub history_csv: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the history, export both CSVs, and download every direct link.
    Run {
        #[command(flatten)]
        overrides: Overrides,

        /// Directory that receives downloaded package files.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Per-link results CSV.
        #[arg(long, value_name = "PATH")]
        results: Option<PathBuf>,

        /// Total per-request timeout in seconds.
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Export the downloads table to CSV without fetching anything.
    Export {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Check one URL against the configured direct-download rules.
    Classify {
        /// URL to classify.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let (mut cfg, created_config) = config::load_or_init()?;

        if logging::init_logging(&cfg.log_path).is_err() {
            logging::init_logging_stderr();
        }
        // Announced here rather than in load_or_init: no subscriber exists
        // before init_logging, and the log path comes from the config.
        if let Some(path) = created_config {
            tracing::info!("created default config at {}", path.display());
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                overrides,
                output_dir,
                results,
                timeout_secs,
            } => {
                apply_overrides(&mut cfg, &overrides);
                if let Some(dir) = output_dir {
                    cfg.output_dir = dir;
                }
                if let Some(path) = results {
                    cfg.results_path = path;
                }
                if let Some(secs) = timeout_secs {
                    cfg.timeout_secs = secs;
                }
                run_harvest(&cfg).await?;
            }
            CliCommand::Export { overrides } => {
                apply_overrides(&mut cfg, &overrides);
                run_export(&cfg).await?;
            }
            CliCommand::Classify { url } => run_classify(&cfg, &url),
        }

        Ok(())
    }
}

fn apply_overrides(cfg: &mut ccharvest_core::config::HarvestConfig, overrides: &Overrides) {
    if let Some(history) = &overrides.history {
        cfg.history_path = Some(history.clone());
    }
    if let Some(path) = &overrides.history_csv {
        cfg.history_csv_path = path.clone();
    }
}

#[cfg(test)]
mod tests;
