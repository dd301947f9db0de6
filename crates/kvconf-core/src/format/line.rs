//! Classifying and rendering single lines.

use std::collections::HashMap;

use crate::domain::entry::Entry;

/// A classified input line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    /// Text after the leading `#`.
    Comment(&'a str),
    /// `key=value`, split on the first `=`.  A line without `=` has an empty
    /// value.
    Pair { key: &'a str, value: &'a str },
}

/// Classifies one line of a config file.
///
/// `raw` must not include the `\n` terminator; a trailing `\r` is stripped so
/// CRLF files parse the same as LF files.
///
/// # Examples
///
/// ```rust
/// use kvconf_core::format::{parse_line, Line};
///
/// assert_eq!(parse_line(""), Line::Blank);
/// assert_eq!(parse_line("# note"), Line::Comment(" note"));
/// assert_eq!(
///     parse_line("url=http://x/?a=b"),
///     Line::Pair { key: "url", value: "http://x/?a=b" }
/// );
/// ```
pub fn parse_line(raw: &str) -> Line<'_> {
    let line = raw.strip_suffix('\r').unwrap_or(raw);

    // Emptiness is checked before looking at the first character.
    if line.is_empty() {
        return Line::Blank;
    }
    if let Some(text) = line.strip_prefix('#') {
        return Line::Comment(text);
    }
    match line.split_once('=') {
        Some((key, value)) => Line::Pair { key, value },
        None => Line::Pair {
            key: line,
            value: "",
        },
    }
}

/// Appends the file text for `entry` to `out`, one `\n`-terminated line per
/// line of output.
///
/// Key entries use the *current* value from `store`.  A key missing from the
/// store renders with an empty value.
pub fn render_entry(entry: &Entry, store: &HashMap<String, String>, out: &mut String) {
    match entry {
        Entry::Key(key) => {
            out.push_str(key);
            out.push('=');
            if let Some(value) = store.get(key) {
                out.push_str(value);
            }
            out.push('\n');
        }
        Entry::Comment(text) => {
            out.push('#');
            out.push_str(text);
            out.push('\n');
        }
        Entry::BlankLines(count) => {
            for _ in 0..*count {
                out.push('\n');
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
