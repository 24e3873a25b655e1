//! Check command implementation.
//!
//! The `viewspec check` command loads both spec catalogs, checks channel
//! views and device views against them and prints the report. It exits 1
//! when any accessor disagrees with the spec.

use crate::check::ViewChecker;
use crate::config::Layout;
use crate::error::Result;
use crate::report::{HumanFormatter, ReportFormatter, ValidationReport};
use crate::spec::{load_catalog, CatalogKind};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    layout: Layout,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    /// Get the resolved layout.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Load both catalogs, then run both passes.
    ///
    /// Both catalogs are loaded before any view is read, so a missing or
    /// malformed spec aborts the run without partial results.
    pub fn run(&self) -> Result<ValidationReport> {
        let channel_catalog = load_catalog(
            &self.layout.catalog_path(CatalogKind::Channels),
            CatalogKind::Channels,
        )?;
        let device_catalog = load_catalog(
            &self.layout.catalog_path(CatalogKind::Devices),
            CatalogKind::Devices,
        )?;

        let channels = ViewChecker::new(CatalogKind::Channels).check(
            &channel_catalog,
            &self.layout.view_source(CatalogKind::Channels),
        );
        let devices = ViewChecker::new(CatalogKind::Devices).check(
            &device_catalog,
            &self.layout.view_source(CatalogKind::Devices),
        );

        Ok(ValidationReport {
            project_root: self.layout.project_root.clone(),
            channels,
            devices,
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.run()?;

        if ui.output_mode().shows_report() {
            let formatter = HumanFormatter::new(ui.output_mode().shows_details());
            let mut output = Vec::new();
            formatter.format(&report, &mut output)?;
            for line in String::from_utf8_lossy(&output).lines() {
                ui.message(line);
            }
        }

        if report.passed() {
            ui.success(report.verdict());
            Ok(CommandResult::success())
        } else {
            ui.failure(report.verdict());
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}
