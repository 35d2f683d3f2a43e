//! gitgate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use gitgate::cli::{Cli, CommandDispatcher};
use gitgate::config::{load_config, validate, GitGateConfig};
use gitgate::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for configuration problems.
const CONFIG_ERROR: u8 = 2;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so `check --json` output stays clean.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("gitgate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gitgate=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load(cli: &Cli) -> gitgate::Result<GitGateConfig> {
    let work_dir = std::env::current_dir()?;
    let config = load_config(cli.config.as_deref(), &work_dir)?;
    validate(&config)?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("gitgate starting with args: {:?}", cli);

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            let mut ui = create_ui(OutputMode::Normal, cli.no_color);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(CONFIG_ERROR);
        }
    };

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else {
        config.output.into()
    };
    let mut ui = create_ui(output_mode, cli.no_color);

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(CONFIG_ERROR)
        }
    }
}
