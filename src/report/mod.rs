//! Validation reports.
//!
//! A [`ValidationReport`] holds the outcome of both passes. The run passes
//! only when neither pass found a mismatch; skipped categories and low
//! coverage never fail it.

pub mod human;

use std::io::Write;
use std::path::PathBuf;

use crate::check::CheckOutcome;

pub use human::HumanFormatter;

/// Verdict line for a passing run.
pub const SUCCESS_VERDICT: &str = "SUCCESS: All views match the spec!";
/// Verdict line for a failing run.
pub const FAILURE_VERDICT: &str = "FAILED: Some views do not match the spec";

/// Combined result of the channel and device passes.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Project root the run was resolved against.
    pub project_root: PathBuf,
    /// Channel catalog vs. property accessors in channel views.
    pub channels: CheckOutcome,
    /// Device catalog vs. channel accessors in device views.
    pub devices: CheckOutcome,
}

impl ValidationReport {
    /// Whether both passes are free of mismatches.
    pub fn passed(&self) -> bool {
        self.channels.passed() && self.devices.passed()
    }

    /// Total mismatches across both passes.
    pub fn mismatch_count(&self) -> usize {
        self.channels.mismatches.len() + self.devices.mismatches.len()
    }

    /// The final verdict line.
    pub fn verdict(&self) -> &'static str {
        if self.passed() {
            SUCCESS_VERDICT
        } else {
            FAILURE_VERDICT
        }
    }

    /// Process exit code for this report.
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            0
        } else {
            1
        }
    }
}

/// Trait for formatting a validation report.
pub trait ReportFormatter {
    /// Format the report body (everything before the verdict) to `writer`.
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()>;

    /// Render body and verdict into one string.
    fn render(&self, report: &ValidationReport) -> String {
        let mut output = Vec::new();
        self.format(report, &mut output).ok();
        let mut text = String::from_utf8(output).unwrap_or_default();
        text.push_str(report.verdict());
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{Mismatch, ViewChecker};
    use crate::spec::{parse_catalog, CatalogKind};
    use crate::views::{MemorySource, Selection};
    use std::path::Path;

    fn empty_outcome(kind: CatalogKind) -> CheckOutcome {
        let catalog = parse_catalog("{}", kind, Path::new("x.json")).unwrap();
        ViewChecker::new(kind).check(&catalog, &MemorySource::new())
    }

    fn report() -> ValidationReport {
        ValidationReport {
            project_root: PathBuf::from("/repo"),
            channels: empty_outcome(CatalogKind::Channels),
            devices: empty_outcome(CatalogKind::Devices),
        }
    }

    #[test]
    fn empty_report_passes() {
        let report = report();
        assert!(report.passed());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.verdict(), SUCCESS_VERDICT);
    }

    #[test]
    fn skips_do_not_fail() {
        let mut report = report();
        report.devices.skipped.push("lighting".into());
        report.channels.skipped.push("fan".into());
        assert!(report.passed());
    }

    #[test]
    fn any_mismatch_fails() {
        let mut report = report();
        report
            .devices
            .mismatches
            .extend(Mismatch::detect("lighting", "light", true, Selection::FirstOrNull));

        assert!(!report.passed());
        assert_eq!(report.mismatch_count(), 1);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.verdict(), FAILURE_VERDICT);
    }
}
