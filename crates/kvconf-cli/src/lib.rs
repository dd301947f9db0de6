//! kvconf-cli library entry point.
//!
//! Re-exports all public modules so that tests and the binary entry point in
//! `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;
