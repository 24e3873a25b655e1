//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_project_config, Layout, LayoutOverrides};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    overrides: LayoutOverrides,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self::with_overrides(project_root, LayoutOverrides::default())
    }

    /// Create a dispatcher with explicit layout overrides.
    pub fn with_overrides(project_root: PathBuf, overrides: LayoutOverrides) -> Self {
        Self {
            project_root,
            overrides,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Resolve where the spec and views live for this project.
    pub fn layout(&self) -> Result<Layout> {
        let config = load_project_config(&self.project_root)?;
        Ok(Layout::resolve(&self.project_root, &config, &self.overrides))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand runs `check`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check) | None => {
                let cmd = super::check::CheckCommand::new(self.layout()?);
                cmd.execute(ui)
            }
            Some(Commands::Tables(args)) => {
                let cmd = super::tables::TablesCommand::new(self.layout()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
