//! Shell completions generation.
//!
//! The `viewspec completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "viewspec", &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
