//! # kvconf-core
//!
//! Library for reading and writing flat `key=value` configuration files while
//! keeping their comments, blank lines, and line order intact.
//!
//! # Architecture overview (for beginners)
//!
//! A config file such as
//!
//! ```text
//! # greeting
//! name=Ada
//!
//! count=3
//! ```
//!
//! is held in memory as two things: a map from key to value, and an ordered
//! list of *entries* that remembers what each line was (a key, a comment, or
//! blank space).  Writing the file back walks the entry list and looks up the
//! current value of every key, so the layout survives edits.
//!
//! The crate is split into three modules:
//!
//! - **`domain`** – The data types: [`Entry`], [`Item`], [`BufferMode`], and
//!   the sealed [`Scalar`] trait that defines which value types can be read
//!   and written.
//!
//! - **`format`** – Pure text functions: how one line is classified, how an
//!   entry is rendered back to text, and how list values are split and joined.
//!   Nothing in here touches the file system.
//!
//! - **`buffer`** – [`ConfigBuffer`], which owns the file handle and ties the
//!   other two modules together.

pub mod buffer;
pub mod domain;
pub mod format;

// Re-export the most-used types at the crate root so callers can write
// `kvconf_core::ConfigBuffer` instead of `kvconf_core::buffer::ConfigBuffer`.
pub use buffer::{BufferError, ConfigBuffer, Entries};
pub use domain::entry::{BufferMode, Entry, Item};
pub use domain::scalar::{ParseScalar, Scalar};
pub use format::{FormatError, DEFAULT_SEPARATOR};
