//! Single-link fetcher.
//!
//! Every failure mode of one download (curl error, non-2xx status, write
//! failure) is converted into a `Failed` outcome so the batch keeps going.
//! Only the outcome type crosses the module boundary.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str;
use std::time::Duration;

use crate::url_model::package_filename;

/// Terminal state of one processed link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    Downloaded,
    Failed,
    NotDirect,
}

impl OutcomeStatus {
    /// Literal written to the results CSV.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Downloaded => "downloaded",
            OutcomeStatus::Failed => "failed",
            OutcomeStatus::NotDirect => "is not a direct file to download",
        }
    }
}

/// Per-link result record; one row of the results CSV. Never mutated after
/// creation.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub link: String,
    pub status: OutcomeStatus,
    /// Saved filename for `Downloaded`; `None` otherwise.
    pub filename: Option<String>,
}

impl DownloadOutcome {
    pub fn downloaded(link: &str, filename: String) -> Self {
        Self {
            link: link.to_string(),
            status: OutcomeStatus::Downloaded,
            filename: Some(filename),
        }
    }

    pub fn failed(link: &str) -> Self {
        Self {
            link: link.to_string(),
            status: OutcomeStatus::Failed,
            filename: None,
        }
    }

    pub fn not_direct(link: &str) -> Self {
        Self {
            link: link.to_string(),
            status: OutcomeStatus::NotDirect,
            filename: None,
        }
    }
}

/// Error from fetching or storing one link. Internal to this module: always
/// logged and folded into a `Failed` outcome, never propagated.
#[derive(Debug)]
enum DownloadError {
    /// Curl reported an error (timeout, DNS, connection, TLS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status.
    Http(u32),
    /// Writing the body to the output directory failed.
    Io(std::io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::Curl(e) => write!(f, "{}", e),
            DownloadError::Http(code) => write!(f, "HTTP {}", code),
            DownloadError::Io(e) => write!(f, "write: {}", e),
        }
    }
}

struct HttpResponse {
    body: Vec<u8>,
    content_disposition: Option<String>,
}

/// Fetches `url` and writes the body under `output_dir`, returning the
/// outcome row. Blocking; the batch loop is sequential by design.
pub fn download(url: &str, output_dir: &Path, timeout: Duration) -> DownloadOutcome {
    match fetch_and_store(url, output_dir, timeout) {
        Ok(filename) => {
            tracing::info!("download completed: {}", filename);
            DownloadOutcome::downloaded(url, filename)
        }
        Err(e) => {
            tracing::error!("error downloading {}: {}", url, e);
            DownloadOutcome::failed(url)
        }
    }
}

fn fetch_and_store(
    url: &str,
    output_dir: &Path,
    timeout: Duration,
) -> Result<String, DownloadError> {
    let response = http_get(url, timeout)?;
    let filename = package_filename(url, response.content_disposition.as_deref());
    let target = output_dir.join(&filename);
    // Last writer wins; an existing file of the same name is overwritten.
    fs::write(&target, &response.body).map_err(DownloadError::Io)?;
    Ok(filename)
}

/// Blocking GET via libcurl, buffering the whole body. Follows redirects.
fn http_get(url: &str, timeout: Duration) -> Result<HttpResponse, DownloadError> {
    let mut body: Vec<u8> = Vec::new();
    let mut headers: Vec<String> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(DownloadError::Curl)?;
    easy.follow_location(true).map_err(DownloadError::Curl)?;
    easy.max_redirections(10).map_err(DownloadError::Curl)?;
    easy.connect_timeout(Duration::from_secs(15))
        .map_err(DownloadError::Curl)?;
    easy.timeout(timeout).map_err(DownloadError::Curl)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    headers.push(s.trim_end().to_string());
                }
                true
            })
            .map_err(DownloadError::Curl)?;
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(DownloadError::Curl)?;
        transfer.perform().map_err(DownloadError::Curl)?;
    }

    let code = easy.response_code().map_err(DownloadError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(DownloadError::Http(code));
    }

    Ok(HttpResponse {
        content_disposition: find_header(&headers, "content-disposition"),
        body,
    })
}

/// Value of the last occurrence of `name` among collected header lines
/// (redirect hops accumulate; the final response wins).
fn find_header(lines: &[String], name: &str) -> Option<String> {
    lines.iter().rev().find_map(|line| {
        let (header, value) = line.split_once(':')?;
        if header.trim().eq_ignore_ascii_case(name) {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}
