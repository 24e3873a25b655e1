//! Human-readable report formatter.

use std::io::Write;

use super::{ReportFormatter, ValidationReport};
use crate::check::CheckOutcome;
use crate::spec::CatalogKind;

const RULE: &str = "============================================================";

/// Formats a report for terminal display.
pub struct HumanFormatter {
    /// List every checked accessor, not only mismatches.
    pub verbose: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn section_title(kind: CatalogKind) -> &'static str {
        match kind {
            CatalogKind::Channels => "Validating Channel Views",
            CatalogKind::Devices => "Validating Device Views",
        }
    }

    fn all_clear(kind: CatalogKind) -> &'static str {
        match kind {
            CatalogKind::Channels => "All channel view properties match spec!",
            CatalogKind::Devices => "All device view channels match spec!",
        }
    }

    fn write_section<W: Write>(&self, outcome: &CheckOutcome, writer: &mut W) -> std::io::Result<()> {
        let kind = outcome.kind;

        writeln!(writer, "{}", RULE)?;
        writeln!(writer, "{}", Self::section_title(kind))?;
        writeln!(writer, "{}", RULE)?;

        if !outcome.skipped.is_empty() {
            writeln!(writer)?;
            writeln!(
                writer,
                "Skipped {} (no view file): {}",
                kind,
                outcome.skipped.join(", ")
            )?;
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "Checked {} {} accessors",
            outcome.checked_count(),
            kind.entry_noun()
        )?;

        if self.verbose {
            for entry in &outcome.checked {
                writeln!(
                    writer,
                    "  {}.{}: {}, {}",
                    entry.category,
                    entry.key,
                    if entry.required { "required" } else { "optional" },
                    entry.observed.member()
                )?;
            }
        }

        writeln!(writer)?;
        if outcome.mismatches.is_empty() {
            writeln!(writer, "{}", Self::all_clear(kind))?;
        } else {
            writeln!(writer, "{} MISMATCHES FOUND:", outcome.mismatches.len())?;
            for mismatch in &outcome.mismatches {
                writeln!(writer, "  {}", mismatch)?;
                if let Some(ref location) = mismatch.location {
                    writeln!(writer, "    --> {}", location)?;
                }
                writeln!(writer, "    = help: {}", mismatch.suggestion())?;
            }
        }

        writeln!(writer)
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ValidationReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "Spec Validation Script")?;
        writeln!(writer, "Project root: {}", report.project_root.display())?;
        writeln!(writer)?;

        self.write_section(&report.channels, writer)?;
        self.write_section(&report.devices, writer)?;

        writeln!(writer, "{}", RULE)
    }
}
