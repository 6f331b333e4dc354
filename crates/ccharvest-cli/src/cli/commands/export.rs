//! `ccharvest export` – dump the downloads table to CSV, no fetching.

use anyhow::{Context, Result};
use ccharvest_core::config::HarvestConfig;
use ccharvest_core::history::{export_history, extract_downloads};
use ccharvest_core::snapshot::HistorySnapshot;

pub async fn run_export(cfg: &HarvestConfig) -> Result<()> {
    let history_path = cfg
        .history_path
        .clone()
        .context("history_path is not set; pass --history or set it in config.toml")?;

    let snapshot = HistorySnapshot::create(&history_path)?;
    let table = extract_downloads(snapshot.path()).await?;
    export_history(&table, &cfg.history_csv_path)?;

    println!(
        "Exported {} rows to {}",
        table.rows.len(),
        cfg.history_csv_path.display()
    );
    Ok(())
}
