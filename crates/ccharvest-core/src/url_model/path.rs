//! Filename extraction from the URL tail.

/// Takes everything after the last `/` as the filename hint, query string
/// included. Direct links are commonly shaped like `.../file?h=<hash>` where
/// the hash is the only part distinguishing one download from the next, so it
/// must survive into the name (sanitization turns the `?` into `_` later).
///
/// Returns `None` for empty or relative-dot tails.
pub fn filename_from_url_tail(url: &str) -> Option<String> {
    let tail = url.rsplit('/').next()?;
    if tail.is_empty() || tail == "." || tail == ".." {
        return None;
    }
    Some(tail.to_string())
}
