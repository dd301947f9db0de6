//! Entry types: the record of a config file's layout.
//!
//! A [`ConfigBuffer`](crate::ConfigBuffer) keeps an ordered `Vec<Entry>`.  Each
//! entry stands for one logical line of the file.  Key entries only carry the
//! key name; the value lives in the buffer's key→value map, which is why a key
//! written twice shows its final value at both positions.

use std::fmt;

/// The mode a buffer was opened in.  Fixed for the lifetime of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferMode {
    /// The file was parsed at open time; getters and iteration are available.
    Read,
    /// The file was created or truncated at open time; put operations and
    /// `flush` are available.
    Write,
}

impl fmt::Display for BufferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferMode::Read => f.write_str("read"),
            BufferMode::Write => f.write_str("write"),
        }
    }
}

/// One logical line (or run of blank lines) in a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A `key=value` line.  The value is looked up in the buffer's store.
    Key(String),
    /// A `#...` line.  Holds the text after the `#`, verbatim.
    Comment(String),
    /// A run of consecutive empty lines.  Always at least 1.
    BlankLines(usize),
}

impl Entry {
    /// Returns the key name if this is a [`Entry::Key`].
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::Key(k) => Some(k),
            _ => None,
        }
    }
}

/// Borrowed view of one entry, produced by iterating a buffer.
///
/// Unlike [`Entry`], a [`Item::Pair`] carries the resolved value, so a caller
/// can copy a file's structure by iterating one buffer and passing every item
/// to [`ConfigBuffer::put_item`](crate::ConfigBuffer::put_item) on another.
///
/// # Example
///
/// ```rust
/// use kvconf_core::Item;
///
/// let item = Item::Pair { key: "name", value: "Ada" };
/// assert_eq!(item.to_string(), "name=Ada");
/// assert_eq!(Item::Comment(" note").to_string(), "# note");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Pair { key: &'a str, value: &'a str },
    Comment(&'a str),
    BlankLines(usize),
}

impl fmt::Display for Item<'_> {
    /// Formats the item the way it appears in the file.  Blank-line runs
    /// render as `count - 1` newline characters so that a trailing newline
    /// from the caller completes the run.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Pair { key, value } => write!(f, "{key}={value}"),
            Item::Comment(text) => write!(f, "#{text}"),
            Item::BlankLines(count) => {
                for _ in 1..*count {
                    f.write_str("\n")?;
                }
                Ok(())
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_key_returns_name_for_key_entries_only() {
        assert_eq!(Entry::Key("port".to_string()).key(), Some("port"));
        assert_eq!(Entry::Comment("port".to_string()).key(), None);
        assert_eq!(Entry::BlankLines(2).key(), None);
    }

    #[test]
    fn test_buffer_mode_display_is_lowercase() {
        assert_eq!(BufferMode::Read.to_string(), "read");
        assert_eq!(BufferMode::Write.to_string(), "write");
    }

    #[test]
    fn test_item_pair_display_keeps_equals_in_value() {
        // Arrange
        let item = Item::Pair {
            key: "url",
            value: "a=b=c",
        };

        // Act / Assert
        assert_eq!(item.to_string(), "url=a=b=c");
    }

    #[test]
    fn test_item_blank_lines_display_joins_with_caller_newline() {
        // A run of three blanks followed by the caller's own '\n' makes three
        // empty lines.
        let rendered = format!("{}\n", Item::BlankLines(3));
        assert_eq!(rendered, "\n\n\n");
    }
}
