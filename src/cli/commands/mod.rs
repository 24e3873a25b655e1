//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and resolves the project layout
//! they run against.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod tables;

pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use tables::TablesCommand;
