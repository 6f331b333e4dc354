//! Working copy of the live history store.
//!
//! Browsers keep their history database open (and possibly locked) while
//! running, so every read goes through a byte-for-byte snapshot taken first.
//! The snapshot is transient: it is deleted when the guard drops, on success
//! and failure paths alike.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::HarvestError;

/// Disambiguates snapshots taken within one process (e.g. parallel tests).
static SNAPSHOT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Guard over the transient snapshot file. Deletes the copy on drop.
#[derive(Debug)]
pub struct HistorySnapshot {
    path: PathBuf,
}

impl HistorySnapshot {
    /// Copy `history_path` into the system temp dir and return the guard.
    ///
    /// Fails with [`HarvestError::SourceUnavailable`] when the source file
    /// does not exist, before anything is written.
    pub fn create(history_path: &Path) -> Result<Self, HarvestError> {
        if !history_path.exists() {
            return Err(HarvestError::SourceUnavailable(history_path.to_path_buf()));
        }

        let path = std::env::temp_dir().join(format!(
            "ccharvest-history-{}-{}.sqlite",
            std::process::id(),
            SNAPSHOT_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::copy(history_path, &path).map_err(HarvestError::Snapshot)?;
        tracing::debug!(
            "snapshotted {} to {}",
            history_path.display(),
            path.display()
        );
        Ok(Self { path })
    }

    /// Path of the working copy.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for HistorySnapshot {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::warn!("failed to remove snapshot {}: {}", self.path.display(), e);
        }
    }
}
