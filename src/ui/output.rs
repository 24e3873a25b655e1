//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Full report plus every checked accessor.
    Verbose,
    /// Full report.
    #[default]
    Normal,
    /// Verdict and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode lists every checked accessor.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the report body.
    pub fn shows_report(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
    }

    #[test]
    fn output_mode_shows_report() {
        assert!(OutputMode::Verbose.shows_report());
        assert!(OutputMode::Normal.shows_report());
        assert!(!OutputMode::Quiet.shows_report());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
