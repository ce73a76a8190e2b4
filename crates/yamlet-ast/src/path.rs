//! Dotted-path keys: splitting, unescaping, and the reverse escape.

/// Split a dotted path into its segments.
///
/// A bare `.` ends the current segment; `\.` is a literal dot inside
/// one segment and is unescaped here; any other character, including a
/// backslash not followed by a dot, passes through verbatim. A trailing
/// empty segment is dropped, so `"a."` splits to `["a"]`, while leading
/// or doubled separators keep their empty segments (`".a"` splits to
/// `["", "a"]`). A path without separators is one segment.
pub(crate) fn split(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if chars.peek() == Some(&'.') {
                    current.push('.');
                    chars.next();
                } else {
                    current.push('\\');
                }
            }
            '.' => segments.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Escape a literal key for use inside a dotted path: every `.` becomes
/// `\.` so the key reads back as a single segment.
pub fn escape_key(key: &str) -> String {
    key.replace('.', "\\.")
}

/// Interpret a segment as an implicit position.
///
/// Only the canonical decimal form counts: `"0"` and `"17"` address
/// positions, while `"01"`, `"+1"`, or `"1.0"` stay explicit names.
pub(crate) fn canonical_index(segment: &str) -> Option<usize> {
    segment
        .parse::<usize>()
        .ok()
        .filter(|n| n.to_string() == segment)
}
