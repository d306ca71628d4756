//! Tracing subscriber initialisation.
//!
//! Only the CLI crate installs a subscriber; `djstart-core` and
//! `djstart-adapters` only emit spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise each workspace crate gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "djstart={level},djstart_core={level},djstart_adapters={level}"
        ))
    });

    // `std::io::IsTerminal` supersedes the deprecated `atty` crate.
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // `try_init` errors instead of panicking if a subscriber is already set
    // (integration tests may share a process).
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter + quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn level_quiet() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
    }

    #[test]
    fn level_default() {
        assert_eq!(derive_level(&args_with(0, false)), "warn");
    }

    #[test]
    fn level_scales_with_verbosity() {
        assert_eq!(derive_level(&args_with(1, false)), "info");
        assert_eq!(derive_level(&args_with(2, false)), "debug");
        assert_eq!(derive_level(&args_with(3, false)), "trace");
        assert_eq!(derive_level(&args_with(9, false)), "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }
}
