//! `ccharvest classify <url>` – evaluate the direct-download heuristic.

use ccharvest_core::config::HarvestConfig;

pub fn run_classify(cfg: &HarvestConfig, url: &str) {
    if cfg.classifier.is_direct_download_link(url) {
        println!("{url}: direct download link");
    } else {
        println!("{url}: is not a direct file to download");
    }
}
