//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::GitGateConfig;
use crate::error::Result;
use crate::requirements::VersionGate;
use crate::ui::UserInterface;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
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
    config: GitGateConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher for an already loaded and validated config.
    pub fn new(config: GitGateConfig) -> Self {
        Self { config }
    }

    /// Dispatch and execute a command.
    ///
    /// With no subcommand, `check` runs with default arguments.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let gate = VersionGate::from_settings(&self.config.git, cli.git.as_deref())?;

        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(gate, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Show) => {
                let cmd = super::show::ShowCommand::new(gate);
                cmd.execute(ui)
            }
            None => {
                let cmd = super::check::CheckCommand::new(gate, CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
