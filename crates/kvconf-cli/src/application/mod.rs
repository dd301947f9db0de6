//! Application layer: the operations behind each `kvconf` subcommand.
//!
//! These functions take paths and plain values and return plain results, so
//! they can be tested without going through argument parsing or stdout.

pub mod edit;
pub mod query;

pub use edit::{copy_file, remove_key, set_value, EditError, EditOutcome};
pub use query::{dump, get_value, list_values};
