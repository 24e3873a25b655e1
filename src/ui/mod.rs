//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`Theme`] colors and [`OutputMode`] verbosity

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display one line of report output.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a failed outcome. Unlike [`error`](Self::error) this is a
    /// result, not a fault, and goes to stdout.
    fn failure(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
