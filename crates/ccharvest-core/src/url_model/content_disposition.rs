//! Content-Disposition header parsing.

/// Extracts the `filename` attribute from a raw Content-Disposition value.
///
/// Handles `filename="value"` (quoted, backslash escapes stripped) and the
/// bare `filename=value` token form. Returns `None` when no usable name is
/// present.
pub fn parse_content_disposition_filename(header_value: &str) -> Option<String> {
    for param in header_value.split(';') {
        let param = param.trim();
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        if !name.trim().eq_ignore_ascii_case("filename") {
            continue;
        }
        let value = value.trim();
        let unquoted = if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            unescape_quoted(&value[1..value.len() - 1])
        } else {
            value.to_string()
        };
        if !unquoted.is_empty() {
            return Some(unquoted);
        }
    }
    None
}

/// Strip backslash escapes of `"` and `\` inside a quoted value.
fn unescape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if next == '"' || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
