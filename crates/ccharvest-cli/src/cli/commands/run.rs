//! `ccharvest run` – full harvest pipeline.

use anyhow::{Context, Result};
use ccharvest_core::batch;
use ccharvest_core::config::HarvestConfig;

pub async fn run_harvest(cfg: &HarvestConfig) -> Result<()> {
    let history_path = cfg
        .history_path
        .clone()
        .context("history_path is not set; pass --history or set it in config.toml")?;

    let report = batch::run_batch(&history_path, cfg).await?;

    println!(
        "Processed {} links: {} downloaded, {} failed, {} not direct",
        report.total, report.downloaded, report.failed, report.non_direct
    );
    Ok(())
}
