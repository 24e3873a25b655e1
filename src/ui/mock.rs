//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use viewspec::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checked 3 property accessors");
//! ui.success("SUCCESS: All views match the spec!");
//!
//! assert!(ui.has_message("Checked 3"));
//! assert_eq!(ui.successes().len(), 1);
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    failures: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured failure messages.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages.iter().any(|m| m.contains(text))
    }

    /// All captured messages joined by newlines.
    pub fn transcript(&self) -> String {
        let mut text = self.messages.join("\n");
        text.push('\n');
        text
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn failure(&mut self, msg: &str) {
        self.failures.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
