//! In-memory contents of a buffer: the value store and the entry list.

use std::collections::HashMap;
use std::io::{self, BufRead};

use crate::domain::entry::Entry;
use crate::format::{parse_line, render_entry, Line};

/// Key→value store plus the ordered entries that record the file layout.
///
/// Every `Entry::Key` in `entries` has a matching key in `store`; both are
/// only ever updated together through the `push_*` methods.
#[derive(Debug, Default)]
pub(crate) struct Contents {
    pub(crate) store: HashMap<String, String>,
    pub(crate) entries: Vec<Entry>,
}

impl Contents {
    /// Reads every line from `reader` into a fresh `Contents`.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the reader, including `InvalidData` for
    /// text that is not UTF-8.
    pub(crate) fn parse<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut contents = Self::default();
        for line in reader.lines() {
            let line = line?;
            match parse_line(&line) {
                Line::Blank => contents.push_blank_lines(1),
                Line::Comment(text) => contents.push_comment(text),
                Line::Pair { key, value } => contents.push_pair(key, value.to_string()),
            }
        }
        Ok(contents)
    }

    /// Stores `value` under `key` (last write wins) and appends a key entry.
    /// A repeated key gets another entry, so it appears at both positions.
    pub(crate) fn push_pair(&mut self, key: &str, value: String) {
        self.store.insert(key.to_string(), value);
        self.entries.push(Entry::Key(key.to_string()));
    }

    pub(crate) fn push_comment(&mut self, text: &str) {
        self.entries.push(Entry::Comment(text.to_string()));
    }

    /// Appends `count` blank lines, extending the previous entry when it is
    /// already a blank-line run.
    pub(crate) fn push_blank_lines(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        match self.entries.last_mut() {
            Some(Entry::BlankLines(run)) => *run += count,
            _ => self.entries.push(Entry::BlankLines(count)),
        }
    }

    /// Renders the whole file.
    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            render_entry(entry, &self.store, &mut out);
        }
        out
    }

    /// Distinct keys in order of first appearance.
    pub(crate) fn keys(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .filter_map(Entry::key)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    pub(crate) fn clear(&mut self) {
        self.store.clear();
        self.entries.clear();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Contents {
        Contents::parse(text.as_bytes()).expect("parse from memory")
    }

    #[test]
    fn test_parse_greeting_example() {
        // Arrange / Act
        let contents = parse("# greeting\nname=Ada\n\ncount=3\n");

        // Assert
        assert_eq!(
            contents.entries,
            vec![
                Entry::Comment(" greeting".to_string()),
                Entry::Key("name".to_string()),
                Entry::BlankLines(1),
                Entry::Key("count".to_string()),
            ]
        );
        assert_eq!(contents.store["name"], "Ada");
        assert_eq!(contents.store["count"], "3");
    }

    #[test]
    fn test_parse_coalesces_consecutive_blank_lines() {
        let contents = parse("a=1\n\n\n\nb=2\n");
        assert_eq!(contents.entries[1], Entry::BlankLines(3));
        assert_eq!(contents.entries.len(), 3);
    }

    #[test]
    fn test_parse_duplicate_key_appends_entry_and_keeps_last_value() {
        let contents = parse("x=1\n# between\nx=2\n");

        assert_eq!(contents.entries.len(), 3);
        assert_eq!(contents.store.len(), 1);
        assert_eq!(contents.store["x"], "2");
    }

    #[test]
    fn test_parse_last_line_without_newline() {
        let contents = parse("a=1\nb=2");
        assert_eq!(contents.store["b"], "2");
    }

    #[test]
    fn test_parse_crlf_input() {
        let contents = parse("# c\r\nk=v\r\n\r\n");
        assert_eq!(
            contents.entries,
            vec![
                Entry::Comment(" c".to_string()),
                Entry::Key("k".to_string()),
                Entry::BlankLines(1),
            ]
        );
        assert_eq!(contents.store["k"], "v");
    }

    #[test]
    fn test_parse_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"ok=1\n\xff\xfe=2\n";
        let err = Contents::parse(bytes).expect_err("must reject invalid UTF-8");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_push_blank_lines_zero_is_noop() {
        let mut contents = Contents::default();
        contents.push_blank_lines(0);
        assert!(contents.entries.is_empty());
    }

    #[test]
    fn test_push_blank_lines_extends_previous_run() {
        let mut contents = Contents::default();
        contents.push_blank_lines(1);
        contents.push_blank_lines(2);
        assert_eq!(contents.entries, vec![Entry::BlankLines(3)]);
    }

    #[test]
    fn test_render_replays_entries_with_current_values() {
        // Arrange
        let mut contents = Contents::default();
        contents.push_pair("x", "1".to_string());
        contents.push_comment(" between");
        contents.push_pair("x", "2".to_string());
        contents.push_blank_lines(1);

        // Act
        let text = contents.render();

        // Assert
        assert_eq!(text, "x=2\n# between\nx=2\n\n");
    }

    #[test]
    fn test_render_then_parse_gives_same_entries() {
        let original = parse("#top\na=1\n\n\nb=x=y\nflag\n");
        let reparsed = parse(&original.render());

        assert_eq!(original.entries, reparsed.entries);
        assert_eq!(original.store, reparsed.store);
    }

    #[test]
    fn test_keys_are_distinct_in_first_appearance_order() {
        let contents = parse("b=1\na=2\nb=3\n");
        assert_eq!(contents.keys(), vec!["b", "a"]);
    }
}
