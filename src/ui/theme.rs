//! Visual theme and styling.

use console::Style;

/// Terminal color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for errors and failed verdicts (red bold).
    pub error: Style,
    /// Style for section rules and headers (magenta bold).
    pub header: Style,
    /// Style for secondary text such as locations and hints (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a verdict line: green on success, red bold on failure, no icon.
    pub fn format_verdict(&self, msg: &str, passed: bool) -> String {
        let style = if passed { &self.success } else { &self.error };
        format!("{}", style.apply_to(msg))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Style one report line by its shape.
    pub fn format_report_line(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        if line.starts_with("====") || line.starts_with("Validating ") {
            format!("{}", self.header.apply_to(line))
        } else if line.ends_with("MISMATCHES FOUND:") {
            format!("{}", self.error.apply_to(line))
        } else if trimmed.starts_with("-->") || trimmed.starts_with("= help:") {
            format!("{}", self.dim.apply_to(line))
        } else {
            line.to_string()
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
