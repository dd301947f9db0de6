//! Text format of a kvconf file.
//!
//! Line grammar:
//! ```text
//! line    = comment | blank | pair
//! comment = "#" text
//! blank   = ""
//! pair    = key [ "=" value ]      ; split on the FIRST '='
//! ```
//! List values are tokens joined by a single separator character (default
//! `' '`).  There is no escaping, so a token can never contain the separator.

pub mod line;
pub mod list;

pub use line::{parse_line, render_entry, Line};
pub use list::{join_list, split_list};

use thiserror::Error;

/// Separator used for list values unless the caller picks another one.
pub const DEFAULT_SEPARATOR: char = ' ';

/// Reasons a key, value, or comment cannot be written without changing the
/// meaning of the file when it is read back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A key starting with `#` would be read back as a comment.
    #[error("key {0:?} starts with '#'")]
    KeyStartsWithHash(String),

    /// A key containing `=` would be split at the wrong place.
    #[error("key {0:?} contains '='")]
    KeyContainsEquals(String),

    /// Keys, values and comments are single-line.
    #[error("{0} contains a line break")]
    LineBreak(&'static str),

    /// A list token containing the separator would read back as two tokens.
    #[error("list token {token:?} contains the separator {separator:?}")]
    TokenContainsSeparator { token: String, separator: char },

    /// An empty last token is written as a trailing separator (or as an
    /// empty value), which reads back without that token.
    #[error("last list token is empty")]
    EmptyLastToken,
}

/// A `\n` anywhere, or a `\r` at the end (stripped again on read), would
/// not survive a write/read cycle.
fn has_line_break(text: &str) -> bool {
    text.contains('\n') || text.ends_with('\r')
}

/// Checks that `key` survives a write/read cycle unchanged.  The empty key
/// is allowed: it renders as `=value` and reads back the same.
///
/// # Errors
///
/// Returns the first [`FormatError`] that applies.
pub fn validate_key(key: &str) -> Result<(), FormatError> {
    if key.starts_with('#') {
        return Err(FormatError::KeyStartsWithHash(key.to_string()));
    }
    if key.contains('=') {
        return Err(FormatError::KeyContainsEquals(key.to_string()));
    }
    if key.contains('\n') {
        return Err(FormatError::LineBreak("key"));
    }
    Ok(())
}

/// Checks that `value` fits on one line.  `=` is allowed anywhere in a value.
///
/// # Errors
///
/// Returns [`FormatError::LineBreak`] for multi-line values.
pub fn validate_value(value: &str) -> Result<(), FormatError> {
    if has_line_break(value) {
        return Err(FormatError::LineBreak("value"));
    }
    Ok(())
}

/// Checks that comment text fits on one line.
///
/// # Errors
///
/// Returns [`FormatError::LineBreak`] for multi-line comments.
pub fn validate_comment(text: &str) -> Result<(), FormatError> {
    if has_line_break(text) {
        return Err(FormatError::LineBreak("comment"));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
