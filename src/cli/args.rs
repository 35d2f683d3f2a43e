//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitgate - Check that git is installed and new enough.
#[derive(Debug, Parser)]
#[command(name = "gitgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.gitgate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// git binary to check (overrides git.program from config)
    #[arg(long, global = true, env = "GITGATE_GIT")]
    pub git: Option<PathBuf>,

    /// Minimal output
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

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that git meets the minimum version (default if no command specified)
    Check(CheckArgs),

    /// Show the detected git version and the required minimum
    Show,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}
