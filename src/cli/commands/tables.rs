//! Tables command implementation.
//!
//! `viewspec tables` prints the spec-key to view-type tables the checker
//! joins on. With `--unmapped` it instead lists spec keys the tables do not
//! cover; those entries are never checked.

use crate::check::unmapped_keys;
use crate::cli::args::TablesArgs;
use crate::config::Layout;
use crate::error::Result;
use crate::spec::{load_catalog, CatalogKind};
use crate::ui::UserInterface;
use crate::views::names;

use super::dispatcher::{Command, CommandResult};

const KINDS: [CatalogKind; 2] = [CatalogKind::Channels, CatalogKind::Devices];

/// The tables command implementation.
pub struct TablesCommand {
    layout: Layout,
    args: TablesArgs,
}

impl TablesCommand {
    /// Create a new tables command.
    pub fn new(layout: Layout, args: TablesArgs) -> Self {
        Self { layout, args }
    }

    fn title(kind: CatalogKind) -> String {
        format!("{} {}", kind.category_noun(), plural(kind.entry_noun()))
    }

    fn show_tables(&self, ui: &mut dyn UserInterface) {
        for (i, kind) in KINDS.into_iter().enumerate() {
            let table = names::table(kind);
            if i > 0 {
                ui.message("");
            }
            ui.message(&format!("{} ({})", capitalize(&Self::title(kind)), table.len()));

            let width = table.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
            for (key, name) in table {
                ui.message(&format!("  {:<width$}  {}", key, name, width = width));
            }
        }
    }

    fn show_unmapped(&self, ui: &mut dyn UserInterface) -> Result<()> {
        for (i, kind) in KINDS.into_iter().enumerate() {
            let catalog = load_catalog(&self.layout.catalog_path(kind), kind)?;
            let unmapped = unmapped_keys(&catalog);
            if i > 0 {
                ui.message("");
            }
            ui.message(&format!("Unmapped {} ({}):", Self::title(kind), unmapped.len()));
            for entry in &unmapped {
                ui.message(&format!("  {}.{}", entry.category, entry.key));
            }
            if !unmapped.is_empty() {
                ui.warning(&format!(
                    "{} {} key(s) are not checked until added to the view-type table",
                    unmapped.len(),
                    kind.entry_noun()
                ));
            }
        }
        Ok(())
    }
}

fn plural(noun: &str) -> String {
    match noun.strip_suffix('y') {
        Some(stem) => format!("{}ies", stem),
        None => format!("{}s", noun),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Command for TablesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.unmapped {
            self.show_unmapped(ui)?;
        } else {
            self.show_tables(ui);
        }
        Ok(CommandResult::success())
    }
}
