//! Splitting and joining list values.

use crate::domain::scalar::Scalar;
use crate::format::FormatError;

/// Splits a stored list value into tokens.
///
/// An empty value has no tokens.  One trailing separator is ignored, since
/// some writers terminate every token (including the last) with it.  Other
/// empty tokens, e.g. from a doubled separator, are kept.
///
/// # Examples
///
/// ```rust
/// use kvconf_core::format::split_list;
///
/// let tokens: Vec<&str> = split_list("1 2 3 ", ' ').collect();
/// assert_eq!(tokens, ["1", "2", "3"]);
/// assert_eq!(split_list("", ' ').count(), 0);
/// ```
pub fn split_list(value: &str, separator: char) -> impl Iterator<Item = &str> {
    let trimmed = value.strip_suffix(separator).unwrap_or(value);
    // "" and a lone separator both mean "no tokens".
    let skip_all = trimmed.is_empty();
    trimmed.split(separator).filter(move |_| !skip_all)
}

/// Formats every value and joins the results with `separator`.
///
/// # Errors
///
/// Returns [`FormatError::TokenContainsSeparator`] if a formatted token
/// contains the separator, since it would read back as two tokens, and
/// [`FormatError::EmptyLastToken`] if the last token is empty, since
/// [`split_list`] drops it again.
pub fn join_list<T: Scalar>(values: &[T], separator: char) -> Result<String, FormatError> {
    if values.last().is_some_and(|last| last.to_text().is_empty()) {
        return Err(FormatError::EmptyLastToken);
    }
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        let token = value.to_text();
        if token.contains(separator) {
            return Err(FormatError::TokenContainsSeparator { token, separator });
        }
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&token);
    }
    Ok(out)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
