//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

/// Terminal UI writing the report to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_report() {
            writeln!(self.out, "{}", self.theme.format_report_line(msg)).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_verdict(msg, true)).ok();
    }

    fn failure(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_verdict(msg, false)).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_report() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_keeps_mode() {
        let ui = create_ui(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
