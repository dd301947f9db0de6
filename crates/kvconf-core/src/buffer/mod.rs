//! [`ConfigBuffer`]: a config file opened for reading or for writing.
//!
//! # Lifecycle (for beginners)
//!
//! ```text
//! Read mode:   open_read(path) ──parse──▶ get_* / iter() ──▶ close() or drop
//! Write mode:  open_write(path) ──▶ put_* ──▶ flush() ──▶ close() or drop
//! ```
//!
//! A read buffer parses the whole file at open time and never changes
//! afterwards.  A write buffer truncates the file at open time and collects
//! everything in memory; nothing reaches the disk until [`ConfigBuffer::flush`].
//!
//! Calling a read operation on a write buffer (or the other way round) is not
//! an error: getters return the caller's default, puts return `false`, and
//! `flush` returns `Ok(false)`.  Only file-system failures produce a
//! [`BufferError`].

mod contents;
mod iter;

pub use iter::Entries;

use std::fs::File;
use std::io::{self, BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::entry::{BufferMode, Item};
use crate::domain::scalar::{ParseScalar, Scalar};
use crate::format::{
    join_list, split_list, validate_comment, validate_key, validate_value, FormatError,
    DEFAULT_SEPARATOR,
};
use contents::Contents;

/// Error type for file operations on a [`ConfigBuffer`].
#[derive(Debug, Error)]
pub enum BufferError {
    /// The file could not be opened in the requested mode (missing file on
    /// read, permission error on write, ...).
    #[error("could not open {path} for {mode}: {source}")]
    Open {
        path: PathBuf,
        mode: BufferMode,
        #[source]
        source: io::Error,
    },

    /// Reading lines failed after the file was opened (including text that
    /// is not valid UTF-8).
    #[error("I/O error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the buffer back to the file failed.
    #[error("I/O error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A `key=value` config file held in memory, in either read or write mode.
///
/// The buffer owns the file handle; it is not `Clone`.
///
/// # Examples
///
/// ```rust,no_run
/// use kvconf_core::ConfigBuffer;
///
/// # fn main() -> Result<(), kvconf_core::BufferError> {
/// let mut out = ConfigBuffer::open_write("app.conf")?;
/// out.put_comment(" generated");
/// out.put("port", 8080);
/// out.put_list("hosts", &["alpha", "beta"]);
/// out.flush()?;
///
/// let cfg = ConfigBuffer::open_read("app.conf")?;
/// assert_eq!(cfg.get_int("port", 0), 8080);
/// assert_eq!(cfg.get_strings("hosts", vec![]), ["alpha", "beta"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigBuffer {
    path: PathBuf,
    mode: BufferMode,
    /// `None` once the buffer has been closed.
    file: Option<File>,
    contents: Contents,
    separator: char,
    /// Write mode: something was put since the last successful flush.
    dirty: bool,
}

impl ConfigBuffer {
    /// Opens `path` in `mode`.
    ///
    /// In [`BufferMode::Read`] the whole file is parsed before this returns.
    /// In [`BufferMode::Write`] the file is created or truncated.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Open`] when the file cannot be opened, and
    /// [`BufferError::Read`] when a read-mode file cannot be parsed.
    pub fn open(path: impl AsRef<Path>, mode: BufferMode) -> Result<Self, BufferError> {
        let path = path.as_ref().to_path_buf();

        let opened = match mode {
            BufferMode::Read => File::open(&path),
            BufferMode::Write => File::create(&path),
        };
        let file = opened.map_err(|source| BufferError::Open {
            path: path.clone(),
            mode,
            source,
        })?;

        let contents = match mode {
            BufferMode::Read => {
                Contents::parse(BufReader::new(&file)).map_err(|source| BufferError::Read {
                    path: path.clone(),
                    source,
                })?
            }
            BufferMode::Write => Contents::default(),
        };

        debug!(
            path = %path.display(),
            %mode,
            entries = contents.entries.len(),
            keys = contents.store.len(),
            "opened config buffer"
        );

        Ok(Self {
            path,
            mode,
            file: Some(file),
            contents,
            separator: DEFAULT_SEPARATOR,
            dirty: false,
        })
    }

    /// Shorthand for [`ConfigBuffer::open`] with [`BufferMode::Read`].
    ///
    /// # Errors
    ///
    /// See [`ConfigBuffer::open`].
    pub fn open_read(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        Self::open(path, BufferMode::Read)
    }

    /// Shorthand for [`ConfigBuffer::open`] with [`BufferMode::Write`].
    ///
    /// # Errors
    ///
    /// See [`ConfigBuffer::open`].
    pub fn open_write(path: impl AsRef<Path>) -> Result<Self, BufferError> {
        Self::open(path, BufferMode::Write)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// `true` until [`ConfigBuffer::close`] is called.
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    pub fn mode(&self) -> BufferMode {
        self.mode
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of entries (key lines, comments, blank-line runs).
    pub fn len(&self) -> usize {
        self.contents.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.entries.is_empty()
    }

    /// Whether `key` has a value, in either mode.
    pub fn contains_key(&self, key: &str) -> bool {
        self.contents.store.contains_key(key)
    }

    /// Distinct keys in order of first appearance.
    pub fn keys(&self) -> Vec<&str> {
        self.contents.keys()
    }

    /// The character separating list tokens.  Defaults to `' '`.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Changes the list separator used by `get_list`/`put_list` and friends.
    pub fn set_separator(&mut self, separator: char) {
        self.separator = separator;
    }

    /// Builder-style form of [`ConfigBuffer::set_separator`].
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    // ── Read mode ─────────────────────────────────────────────────────────────

    /// Raw stored value, or `None` when the buffer cannot serve reads or the
    /// key is absent.
    fn lookup(&self, key: &str) -> Option<&str> {
        if self.mode != BufferMode::Read {
            debug!(key, mode = %self.mode, "read ignored: buffer is not in read mode");
            return None;
        }
        if self.contents.store.is_empty() {
            return None;
        }
        self.contents.store.get(key).map(String::as_str)
    }

    /// Reads `key` as `T`, falling back to `default` when the key is absent,
    /// the value does not parse, or the buffer is not a read buffer.
    ///
    /// `T` is limited to the types implementing [`ParseScalar`]; the typed
    /// helpers such as [`ConfigBuffer::get_int`] are thin wrappers over this.
    pub fn get<T: ParseScalar>(&self, key: &str, default: T) -> T {
        let Some(text) = self.lookup(key) else {
            return default;
        };
        match T::parse_text(text) {
            Some(value) => value,
            None => {
                debug!(key, value = text, "value did not parse, using default");
                default
            }
        }
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn get_char(&self, key: &str, default: char) -> char {
        self.get(key, default)
    }

    /// Returns the stored value verbatim (no whitespace splitting).
    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or(default).to_string()
    }

    /// Reads `key` as a list of `T` split on the buffer's separator.
    ///
    /// Parsing stops at the first token that does not parse; the tokens
    /// parsed before it are returned.  `default` is returned whole only when
    /// the key is absent (or the buffer is not a read buffer).
    ///
    /// A stored `"1 2 three 4"` read as integers gives `[1, 2]`.
    pub fn get_list<T: ParseScalar>(&self, key: &str, default: Vec<T>) -> Vec<T> {
        let Some(text) = self.lookup(key) else {
            return default;
        };

        let mut out = Vec::new();
        for token in split_list(text, self.separator) {
            match T::parse_text(token) {
                Some(value) => out.push(value),
                None => {
                    debug!(key, token, parsed = out.len(), "list token did not parse, stopping");
                    break;
                }
            }
        }
        out
    }

    pub fn get_ints(&self, key: &str, default: Vec<i64>) -> Vec<i64> {
        self.get_list(key, default)
    }

    pub fn get_floats(&self, key: &str, default: Vec<f64>) -> Vec<f64> {
        self.get_list(key, default)
    }

    pub fn get_bools(&self, key: &str, default: Vec<bool>) -> Vec<bool> {
        self.get_list(key, default)
    }

    pub fn get_chars(&self, key: &str, default: Vec<char>) -> Vec<char> {
        self.get_list(key, default)
    }

    pub fn get_strings(&self, key: &str, default: Vec<String>) -> Vec<String> {
        self.get_list(key, default)
    }

    /// Iterates the entries of a read buffer in file order.
    ///
    /// A write buffer iterates as empty.
    pub fn iter(&self) -> Entries<'_> {
        if self.mode != BufferMode::Read {
            return Entries::new(&[], &self.contents.store);
        }
        Entries::new(&self.contents.entries, &self.contents.store)
    }

    // ── Write mode ────────────────────────────────────────────────────────────

    /// Whether put/flush operations are allowed right now.
    fn writable(&self, op: &'static str) -> bool {
        if self.mode != BufferMode::Write {
            debug!(op, mode = %self.mode, "write ignored: buffer is not in write mode");
            return false;
        }
        if self.file.is_none() {
            debug!(op, path = %self.path.display(), "write ignored: buffer is closed");
            return false;
        }
        true
    }

    fn reject(&self, op: &'static str, error: &FormatError) -> bool {
        warn!(op, path = %self.path.display(), %error, "rejected unrepresentable input");
        false
    }

    fn put_text(&mut self, key: &str, value: String) -> bool {
        if let Err(error) = validate_key(key).and_then(|()| validate_value(&value)) {
            return self.reject("put", &error);
        }
        self.contents.push_pair(key, value);
        self.dirty = true;
        true
    }

    /// Stores `value` under `key` and appends a key line.
    ///
    /// Putting the same key twice keeps both lines; both show the last value
    /// when flushed.
    ///
    /// Returns `false` (and changes nothing) when the buffer is not an open
    /// write buffer, or when the key or value cannot be written as one line.
    pub fn put<V: Scalar>(&mut self, key: &str, value: V) -> bool {
        if !self.writable("put") {
            return false;
        }
        self.put_text(key, value.to_text())
    }

    /// Stores `values` joined with the separator under `key`.
    ///
    /// Returns `false` under the same conditions as [`ConfigBuffer::put`], and
    /// also when a value's text contains the separator or the last value's
    /// text is empty.
    pub fn put_list<V: Scalar>(&mut self, key: &str, values: &[V]) -> bool {
        if !self.writable("put_list") {
            return false;
        }
        match join_list(values, self.separator) {
            Ok(joined) => self.put_text(key, joined),
            Err(error) => self.reject("put_list", &error),
        }
    }

    /// Appends a `#text` line.  `text` should not include the `#`.
    pub fn put_comment(&mut self, text: &str) -> bool {
        if !self.writable("put_comment") {
            return false;
        }
        if let Err(error) = validate_comment(text) {
            return self.reject("put_comment", &error);
        }
        self.contents.push_comment(text);
        self.dirty = true;
        true
    }

    /// Appends `count` empty lines.  `0` is accepted and adds nothing.
    pub fn put_blank_lines(&mut self, count: usize) -> bool {
        if !self.writable("put_blank_lines") {
            return false;
        }
        self.contents.push_blank_lines(count);
        if count > 0 {
            self.dirty = true;
        }
        true
    }

    /// Appends one item taken from iterating another buffer.
    ///
    /// ```rust,no_run
    /// use kvconf_core::ConfigBuffer;
    ///
    /// # fn main() -> Result<(), kvconf_core::BufferError> {
    /// let src = ConfigBuffer::open_read("in.conf")?;
    /// let mut dst = ConfigBuffer::open_write("out.conf")?;
    /// for item in &src {
    ///     dst.put_item(item);
    /// }
    /// dst.flush()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn put_item(&mut self, item: Item<'_>) -> bool {
        match item {
            Item::Pair { key, value } => self.put(key, value),
            Item::Comment(text) => self.put_comment(text),
            Item::BlankLines(count) => self.put_blank_lines(count),
        }
    }

    /// Writes every entry to the file, replacing its previous contents.
    ///
    /// Returns `Ok(false)` without touching the file when the buffer is not an
    /// open write buffer or when no key/value pair was ever put.  Flushing
    /// again without further puts rewrites identical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Write`] if the file cannot be written.
    pub fn flush(&mut self) -> Result<bool, BufferError> {
        if !self.writable("flush") {
            return Ok(false);
        }
        if self.contents.store.is_empty() {
            debug!(path = %self.path.display(), "flush skipped: nothing was put");
            return Ok(false);
        }

        let text = self.contents.render();
        let Some(file) = self.file.as_mut() else {
            return Ok(false);
        };
        if let Err(source) = replace_file_contents(file, text.as_bytes()) {
            return Err(BufferError::Write {
                path: self.path.clone(),
                source,
            });
        }

        self.dirty = false;
        debug!(
            path = %self.path.display(),
            entries = self.contents.entries.len(),
            bytes = text.len(),
            "flushed config buffer"
        );
        Ok(true)
    }

    /// `true` when puts since the last flush would change the file.
    ///
    /// Comments and blank lines alone never count: with no key/value pair
    /// there is nothing [`ConfigBuffer::flush`] would write.
    pub fn has_unflushed_changes(&self) -> bool {
        self.dirty && self.is_open() && !self.contents.store.is_empty()
    }

    /// Releases the file handle and clears all in-memory state.
    ///
    /// Safe to call more than once.  Unflushed puts are discarded.
    pub fn close(&mut self) {
        if self.file.take().is_some() {
            debug!(path = %self.path.display(), mode = %self.mode, "closed config buffer");
        }
        self.contents.clear();
        self.dirty = false;
    }
}

/// Truncates `file` and writes `bytes` from the start.
fn replace_file_contents(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.flush()
}

impl Drop for ConfigBuffer {
    fn drop(&mut self) {
        if self.has_unflushed_changes() {
            warn!(
                path = %self.path.display(),
                "config buffer dropped with unflushed changes"
            );
        }
    }
}

impl<'a> IntoIterator for &'a ConfigBuffer {
    type Item = Item<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
