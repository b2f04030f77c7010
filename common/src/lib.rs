//! Shared ports and models used by every crate in the workspace.
//!
//! * **[`output`]**: the [`output::Sink`] port every illustration writes through.
//! * **[`error`]**: the two failure kinds the violating versions exhibit.
//! * **[`config`]**: run configuration assembled by the CLI.

pub mod config;
pub mod error;
pub mod output;
