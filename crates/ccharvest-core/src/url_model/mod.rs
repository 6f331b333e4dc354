//! Filename derivation for downloaded packages.
//!
//! Picks a name from the Content-Disposition header or the URL path,
//! sanitizes it, and applies the `.package` suffix convention: every saved
//! artifact is treated as a game-content package regardless of what the
//! server claims it is.

mod content_disposition;
mod path;
mod sanitize;

pub use content_disposition::parse_content_disposition_filename;
pub use path::filename_from_url_tail;
pub use sanitize::sanitize_filename;

/// Used when neither the header nor the URL yields a usable name.
const DEFAULT_STEM: &str = "download";

/// Suffix applied to every saved artifact.
pub const PACKAGE_SUFFIX: &str = ".package";

/// Derives the on-disk filename for a fetched link.
///
/// Prefers the `filename` attribute of `content_disposition` when present,
/// otherwise the raw tail of `url` after the last `/` (query included, so
/// hash-distinguished links keep distinct names). The result is sanitized
/// and always ends with `.package` exactly once.
pub fn package_filename(url: &str, content_disposition: Option<&str>) -> String {
    let candidate = content_disposition
        .and_then(parse_content_disposition_filename)
        .filter(|s| !s.is_empty())
        .or_else(|| filename_from_url_tail(url));

    let raw = candidate.unwrap_or_else(|| DEFAULT_STEM.to_string());
    let mut name = sanitize_filename(&raw);
    if name.is_empty() {
        name = DEFAULT_STEM.to_string();
    }
    if !name.ends_with(PACKAGE_SUFFIX) {
        name.push_str(PACKAGE_SUFFIX);
    }
    name
}
