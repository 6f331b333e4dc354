use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::classify::ClassifierRules;

/// Global configuration loaded from `~/.config/ccharvest/config.toml`.
///
/// Path-valued options are resolved relative to the current directory when
/// not absolute, matching where the run's artifacts land.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Path to the live browser history database. Required before a run;
    /// no default exists because the location is machine-specific.
    #[serde(default)]
    pub history_path: Option<PathBuf>,
    /// Directory that receives downloaded package files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Per-link results CSV (`link,status,filename`).
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// Verbatim export of the downloads table.
    #[serde(default = "default_history_csv_path")]
    pub history_csv_path: PathBuf,
    /// Log file; log lines also go to stdout.
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
    /// Total per-request timeout in seconds for each download.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Direct-download link heuristics (substring markers and URL prefixes).
    #[serde(default)]
    pub classifier: ClassifierRules,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("customcreation")
}

fn default_results_path() -> PathBuf {
    PathBuf::from("download_results.csv")
}

fn default_history_csv_path() -> PathBuf {
    PathBuf::from("downloads_history.csv")
}

fn default_log_path() -> PathBuf {
    PathBuf::from("download_log.log")
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            history_path: None,
            output_dir: default_output_dir(),
            results_path: default_results_path(),
            history_csv_path: default_history_csv_path(),
            log_path: default_log_path(),
            timeout_secs: default_timeout_secs(),
            classifier: ClassifierRules::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ccharvest")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
///
/// Returns the config plus the path of a just-created default file, if any.
/// Logging is not yet initialized when this runs (the log path comes from the
/// config itself), so the caller announces the creation once it is.
pub fn load_or_init() -> Result<(HarvestConfig, Option<PathBuf>)> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarvestConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        return Ok((default_cfg, Some(path)));
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarvestConfig = toml::from_str(&data)?;
    Ok((cfg, None))
}
