//! Batch orchestration: snapshot, extract, export, process, report.
//!
//! One linear pass, fully sequential. The orchestrator owns the results
//! writer and the counters; downloads never abort the run.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::config::HarvestConfig;
use crate::download::{download, DownloadOutcome, OutcomeStatus};
use crate::error::HarvestError;
use crate::history::{export_history, extract_downloads, HistoryTable, TAB_URL_COLUMN};
use crate::snapshot::HistorySnapshot;

/// Final counts of one run. `total` always equals the sum of the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub total: u64,
    pub downloaded: u64,
    pub failed: u64,
    pub non_direct: u64,
}

impl BatchReport {
    fn record(&mut self, outcome: &DownloadOutcome) {
        self.total += 1;
        match outcome.status {
            OutcomeStatus::Downloaded => self.downloaded += 1,
            OutcomeStatus::Failed => self.failed += 1,
            OutcomeStatus::NotDirect => self.non_direct += 1,
        }
    }
}

/// Runs the full pipeline against the history store at `history_path`.
///
/// Aborts before writing any artifact when the source file is missing.
/// The transient snapshot is removed on every exit path, including errors.
pub async fn run_batch(
    history_path: &Path,
    cfg: &HarvestConfig,
) -> Result<BatchReport, HarvestError> {
    if !history_path.exists() {
        tracing::error!(
            "history database does not exist at {}; check the configured path",
            history_path.display()
        );
        return Err(HarvestError::SourceUnavailable(history_path.to_path_buf()));
    }

    let snapshot = HistorySnapshot::create(history_path)?;
    let table = extract_downloads(snapshot.path()).await?;
    export_history(&table, &cfg.history_csv_path)?;

    fs::create_dir_all(&cfg.output_dir).map_err(|source| HarvestError::WriteIo {
        path: cfg.output_dir.clone(),
        source,
    })?;

    let report = process_links(&table, cfg)?;

    tracing::info!("report:");
    tracing::info!("total links processed: {}", report.total);
    tracing::info!("files downloaded successfully: {}", report.downloaded);
    tracing::info!("download failures: {}", report.failed);
    tracing::info!("non-direct download links: {}", report.non_direct);
    tracing::info!(
        "download results logged in {}",
        cfg.results_path.display()
    );

    Ok(report)
    // snapshot guard drops here and deletes the working copy
}

/// Iterates every non-null `tab_url` in row order (duplicates included),
/// classifying then downloading, and appends one results row per link.
fn process_links(table: &HistoryTable, cfg: &HarvestConfig) -> Result<BatchReport, HarvestError> {
    let csv_err = |source| HarvestError::WriteCsv {
        path: cfg.results_path.clone(),
        source,
    };

    let mut writer = csv::Writer::from_path(&cfg.results_path).map_err(csv_err)?;
    writer
        .write_record(["link", "status", "filename"])
        .map_err(csv_err)?;

    let links = table.links();
    if table.column_index(TAB_URL_COLUMN).is_none() {
        tracing::warn!("downloads table has no {} column; nothing to process", TAB_URL_COLUMN);
    }
    tracing::info!("total links found: {}", links.len());

    let timeout = Duration::from_secs(cfg.timeout_secs);
    let mut report = BatchReport::default();

    for (index, link) in links.iter().enumerate() {
        tracing::debug!("processing link {}/{}: {}", index + 1, links.len(), link);

        let outcome = if cfg.classifier.is_direct_download_link(link) {
            download(link, &cfg.output_dir, timeout)
        } else {
            tracing::warn!("the link {} is not a direct file to download", link);
            DownloadOutcome::not_direct(link)
        };

        report.record(&outcome);
        writer
            .write_record([
                outcome.link.as_str(),
                outcome.status.as_str(),
                outcome.filename.as_deref().unwrap_or(""),
            ])
            .map_err(csv_err)?;
    }

    writer.flush().map_err(|source| HarvestError::WriteIo {
        path: cfg.results_path.clone(),
        source,
    })?;

    Ok(report)
}
