//! Rewriting operations: `set`, `remove`, `copy`.
//!
//! Each operation reads the whole source file into a read buffer, then opens a
//! write buffer on the destination and replays the items, changing only what
//! the operation asks for.  Because the read buffer parses the file at open
//! time, the destination may be the same path as the source.

use std::path::Path;

use kvconf_core::format::{validate_key, validate_value};
use kvconf_core::{BufferError, ConfigBuffer, FormatError, Item};
use thiserror::Error;
use tracing::{info, warn};

/// Error type for the rewriting operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// Opening, reading or writing a file failed.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// The key or value cannot be stored in the file format.  Checked before
    /// any file is truncated.
    #[error("cannot store this entry: {0}")]
    Format(#[from] FormatError),
}

/// What a rewriting operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The file did not exist and was created with the single entry.
    Created,
    /// The key was absent and was appended at the end of the file.
    Appended,
    /// Every line of an existing key now carries the new value.
    Updated { occurrences: usize },
    /// Lines for the key were dropped.
    Removed { occurrences: usize },
    /// Nothing had to change; the file was not rewritten.
    Unchanged,
}

/// Sets `key` to `value` in the file at `path`, keeping comments, blank lines
/// and order.  A missing file is created.
///
/// # Errors
///
/// Returns [`EditError::Format`] for keys/values that cannot be written and
/// [`EditError::Buffer`] for file-system failures.
pub fn set_value(path: &Path, key: &str, value: &str) -> Result<EditOutcome, EditError> {
    validate_key(key)?;
    validate_value(value)?;

    if !path.exists() {
        let mut out = ConfigBuffer::open_write(path)?;
        out.put(key, value);
        out.flush()?;
        info!(path = %path.display(), key, "created config file");
        return Ok(EditOutcome::Created);
    }

    let src = ConfigBuffer::open_read(path)?;
    let mut dst = ConfigBuffer::open_write(path)?;
    let mut occurrences = 0;
    for item in &src {
        match item {
            Item::Pair { key: k, .. } if k == key => {
                occurrences += 1;
                dst.put(key, value);
            }
            other => replay(&mut dst, other),
        }
    }
    if occurrences == 0 {
        dst.put(key, value);
    }
    dst.flush()?;

    info!(path = %path.display(), key, occurrences, "set config value");
    Ok(if occurrences == 0 {
        EditOutcome::Appended
    } else {
        EditOutcome::Updated { occurrences }
    })
}

/// Drops every line for `key` from the file at `path`.
///
/// The file is left untouched when it has no such key.  Removing the only
/// key leaves an empty file, since a buffer with no key/value pairs writes
/// nothing.
///
/// # Errors
///
/// Returns [`EditError::Buffer`] for file-system failures.
pub fn remove_key(path: &Path, key: &str) -> Result<EditOutcome, EditError> {
    let src = ConfigBuffer::open_read(path)?;
    if !src.contains_key(key) {
        return Ok(EditOutcome::Unchanged);
    }

    let mut dst = ConfigBuffer::open_write(path)?;
    let mut occurrences = 0;
    for item in &src {
        match item {
            Item::Pair { key: k, .. } if k == key => occurrences += 1,
            other => replay(&mut dst, other),
        }
    }
    if !dst.flush()? {
        warn!(path = %path.display(), key, "removed the last key, file is now empty");
        dst.close();
    }

    info!(path = %path.display(), key, occurrences, "removed config key");
    Ok(EditOutcome::Removed { occurrences })
}

/// Copies `src` to `dst` through a read and a write buffer.  Returns the
/// number of items written.
///
/// A source without any key/value pair leaves `dst` empty and returns `0`,
/// since a buffer with no pairs writes nothing.
///
/// # Errors
///
/// Returns [`EditError::Buffer`] for file-system failures.
pub fn copy_file(src: &Path, dst: &Path) -> Result<usize, EditError> {
    let input = ConfigBuffer::open_read(src)?;
    let mut output = ConfigBuffer::open_write(dst)?;
    for item in &input {
        replay(&mut output, item);
    }
    if !output.flush()? {
        warn!(
            src = %src.display(),
            dst = %dst.display(),
            "source has no key/value pairs, destination is empty"
        );
        output.close();
        return Ok(0);
    }

    info!(
        src = %src.display(),
        dst = %dst.display(),
        items = input.len(),
        "copied config file"
    );
    Ok(input.len())
}

/// Puts an unchanged item.  Anything parsed from a file can be put back, so a
/// refusal here means the item was lost; it is logged rather than fatal.
fn replay(dst: &mut ConfigBuffer, item: Item<'_>) {
    if !dst.put_item(item) {
        warn!(path = %dst.path().display(), %item, "dropped entry that could not be rewritten");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
