//! Implementation of the `djstart list` command.

use djstart_adapters::{LocalFilesystem, RandomSecret, SystemRunner};
use djstart_core::QuickstartService;

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let presets_root = config.presets_root(args.presets_dir.as_ref());

    let service = QuickstartService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        Box::new(RandomSecret::new()),
    );
    let presets = service
        .list_presets(&presets_root)
        .map_err(CliError::Core)?;

    match args.format {
        ListFormat::Table => {
            if presets.is_empty() {
                output.info(&format!("No presets under {}", presets_root.display()))?;
                return Ok(());
            }
            output.header(&format!("Presets under {}:", presets_root.display()))?;
            for preset in &presets {
                let mut provides = Vec::new();
                if preset.has_settings {
                    provides.push("settings.py");
                }
                if preset.has_requirements {
                    provides.push("requirements.txt");
                }
                if preset.has_env_template {
                    provides.push(".env.template");
                }
                let provides = if provides.is_empty() {
                    "(empty)".to_owned()
                } else {
                    provides.join(", ")
                };
                output.print(&format!("  {:<16} {}", preset.name, provides))?;
            }
        }

        ListFormat::List => {
            for preset in &presets {
                println!("{}", preset.name);
            }
        }

        ListFormat::Json => {
            // JSON must stay parseable even when piped, so it bypasses the
            // OutputManager and goes straight to stdout.
            let json = serde_json::to_string_pretty(&presets).map_err(|e| CliError::IoError {
                message: "serializing preset list".into(),
                source: std::io::Error::other(e),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}
