//! Read-only operations: `get`, `list`, `dump`.

use std::path::Path;

use kvconf_core::{BufferError, ConfigBuffer, Item};

/// Returns the raw value of `key`, or `None` if the file has no such key.
///
/// # Errors
///
/// Returns [`BufferError`] if the file cannot be opened or read.
pub fn get_value(path: &Path, key: &str) -> Result<Option<String>, BufferError> {
    let buffer = ConfigBuffer::open_read(path)?;
    Ok(buffer
        .contains_key(key)
        .then(|| buffer.get_string(key, "")))
}

/// Returns the tokens of list value `key` split on `separator`, or `None` if
/// the file has no such key.
///
/// # Errors
///
/// Returns [`BufferError`] if the file cannot be opened or read.
pub fn list_values(
    path: &Path,
    key: &str,
    separator: char,
) -> Result<Option<Vec<String>>, BufferError> {
    let buffer = ConfigBuffer::open_read(path)?.with_separator(separator);
    Ok(buffer
        .contains_key(key)
        .then(|| buffer.get_strings(key, Vec::new())))
}

/// Describes every entry of the file, one line per entry:
///
/// ```text
/// comment  # greeting
/// pair     name=Ada
/// blank    1
/// pair     count=3
/// ```
///
/// # Errors
///
/// Returns [`BufferError`] if the file cannot be opened or read.
pub fn dump(path: &Path) -> Result<Vec<String>, BufferError> {
    let buffer = ConfigBuffer::open_read(path)?;
    Ok(buffer.iter().map(describe).collect())
}

fn describe(item: Item<'_>) -> String {
    match item {
        Item::Pair { key, value } => format!("pair     {key}={value}"),
        Item::Comment(text) => format!("comment  #{text}"),
        Item::BlankLines(count) => format!("blank    {count}"),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;
    use uuid::Uuid;

    fn fixture(text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("kvconf_query_{}.conf", Uuid::new_v4()));
        std::fs::write(&path, text).expect("write fixture");
        path
    }

    #[test]
    fn test_get_value_present_and_absent() {
        let path = fixture("name=Ada\nempty=\n");

        assert_eq!(get_value(&path, "name").unwrap(), Some("Ada".to_string()));
        assert_eq!(get_value(&path, "empty").unwrap(), Some(String::new()));
        assert_eq!(get_value(&path, "missing").unwrap(), None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_get_value_missing_file_is_error() {
        let path = std::env::temp_dir().join(format!("kvconf_none_{}.conf", Uuid::new_v4()));
        assert!(matches!(
            get_value(&path, "k"),
            Err(BufferError::Open { .. })
        ));
    }

    #[test]
    fn test_list_values_uses_given_separator() {
        let path = fixture("hosts=a,b,c\n");

        let tokens = list_values(&path, "hosts", ',').unwrap();

        assert_eq!(
            tokens,
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_dump_greeting_example() {
        // Arrange
        let path = fixture("# greeting\nname=Ada\n\ncount=3\n");

        // Act
        let lines = dump(&path).unwrap();

        // Assert
        assert_eq!(
            lines,
            vec![
                "comment  # greeting",
                "pair     name=Ada",
                "blank    1",
                "pair     count=3",
            ]
        );
        std::fs::remove_file(&path).ok();
    }
}
