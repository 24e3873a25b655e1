//! viewspec CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use viewspec::cli::{Cli, CommandDispatcher};
use viewspec::config::resolve_project_root;
use viewspec::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so the report on stdout stays stable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("viewspec=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("viewspec=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("viewspec starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(output_mode);

    let project_root = match resolve_project_root(cli.project.as_deref()) {
        Ok(root) => root,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };
    tracing::debug!("Project root: {}", project_root.display());

    let dispatcher = CommandDispatcher::with_overrides(project_root, cli.layout_overrides());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
