//! Filename sanitization.

/// Characters rejected by common filesystems (Windows reserved set; `/` and
/// `\` also cover Unix path separators).
const RESERVED: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every filesystem-reserved character with `_`.
///
/// Idempotent: sanitizing an already-sanitized name is a no-op.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect()
}
