//! Domain types for kvconf.
//!
//! This module contains the data model with no file system dependencies.
//!
//! # Why keep the model separate? (for beginners)
//!
//! The buffer in [`crate::buffer`] has to deal with file handles, I/O errors,
//! and read/write modes.  The types here do not: an [`entry::Entry`] is just a
//! description of one line, and a [`scalar::Scalar`] is just a rule for turning
//! text into a value and back.  Keeping them apart means they can be tested
//! without creating a single file.

/// Entry, item and mode types describing a file's layout.
pub mod entry;

/// The closed set of value types the buffer can read and write.
pub mod scalar;
