//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::LayoutOverrides;

/// viewspec - Check generated device views against the device spec.
#[derive(Debug, Parser)]
#[command(name = "viewspec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true, env = "VIEWSPEC_PROJECT")]
    pub project: Option<PathBuf>,

    /// Directory holding channels.json and devices.json
    #[arg(long, global = true, value_name = "DIR", env = "VIEWSPEC_SPEC_DIR")]
    pub spec_dir: Option<PathBuf>,

    /// Directory of channel views
    #[arg(long, global = true, value_name = "DIR", env = "VIEWSPEC_CHANNEL_VIEWS")]
    pub channel_views: Option<PathBuf>,

    /// Directory of device views
    #[arg(long, global = true, value_name = "DIR", env = "VIEWSPEC_DEVICE_VIEWS")]
    pub device_views: Option<PathBuf>,

    /// List every checked accessor
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Print only the verdict
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Layout overrides given on the command line or via environment.
    pub fn layout_overrides(&self) -> LayoutOverrides {
        LayoutOverrides {
            spec_dir: self.spec_dir.clone(),
            channel_views: self.channel_views.clone(),
            device_views: self.device_views.clone(),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check views against the spec (default if no command specified)
    Check,

    /// Show the spec-key to view-type tables
    Tables(TablesArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `tables` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TablesArgs {
    /// List spec keys that have no table entry instead
    #[arg(long)]
    pub unmapped: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
