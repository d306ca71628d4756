//! # djstart CLI
//!
//! Django project quickstart with presets.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                          |
//! |------|----------------------------------|
//! |  0   | Success                          |
//! |  1   | Internal / generator error       |
//! |  2   | User / input error               |
//! |  3   | Preset not found                 |
//! |  4   | Configuration error              |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else, including tracing init. Silently
    // ignored when no .env exists.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's own rendering is already user-friendly.
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let verbose_errors = cli.global.verbose > 0;
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: None,
                },
                verbose_errors,
            );
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ───────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("djstart completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose_errors),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Project(cmd) => commands::project::execute(cmd, cli.global, config, output),
        Commands::List(cmd) => commands::list::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// The single place where structured errors become human-readable output
/// and OS exit codes.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // Write directly to stderr so the message appears even when stdout is
    // redirected; colour only when stderr is a TTY.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
