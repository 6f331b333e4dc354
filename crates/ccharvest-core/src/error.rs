//! Fatal error taxonomy for the harvest pipeline.
//!
//! Per-link download failures are not represented here: they are recovered
//! into a `Failed` outcome row by the downloader and never abort the run.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run. Everything per-link is handled in `download`.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// The configured history database does not exist or cannot be copied.
    #[error("history database not found at {}", .0.display())]
    SourceUnavailable(PathBuf),

    /// Copying the live history store to its working snapshot failed.
    #[error("failed to snapshot history database: {0}")]
    Snapshot(#[source] std::io::Error),

    /// The snapshot could not be opened or the downloads table could not be read.
    #[error("failed to read the downloads table: {0}")]
    Extraction(#[from] sqlx::Error),

    /// A CSV output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A filesystem operation on an output path failed (e.g. creating the
    /// output directory, flushing a results file).
    #[error("failed to write {}: {source}", path.display())]
    WriteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
