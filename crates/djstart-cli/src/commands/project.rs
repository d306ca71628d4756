//! Implementation of the `djstart project` command.
//!
//! Responsibility: resolve names, preset, and paths, wire the local
//! adapters into the core service, and display the result. No scaffolding
//! logic lives here.

use tracing::{debug, info, instrument};

use djstart_adapters::{LocalFilesystem, RandomSecret, SystemRunner};
use djstart_core::{
    QuickstartRequest, QuickstartService,
    domain::{AppName, Preset, ProjectName},
};

use crate::{
    cli::{ProjectArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `djstart project` command.
///
/// Dispatch sequence:
/// 1. Parse and validate the project and app names
/// 2. Resolve the preset and the presets root
/// 3. Run the quickstart flow against the real adapters
/// 4. Print the report and next-steps guidance
#[instrument(skip_all, fields(project = %args.project_name, app = %args.app_name))]
pub fn execute(
    args: ProjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Names: display for directories and messages, safe for module paths.
    let project = ProjectName::parse(&args.project_name).map_err(|e| CliError::Core(e.into()))?;
    let app = AppName::parse(&args.app_name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Preset resolution: flag, then config, then built-in defaults.
    let preset_name = config.preset_name(args.preset.as_deref());
    let presets_root = config.presets_root(args.presets_dir.as_ref());
    let preset = Preset::new(preset_name.clone(), &presets_root);

    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "cannot determine current directory".into(),
        source: e,
    })?;
    let project_root = cwd.join(project.display_name());

    debug!(
        preset = %preset_name,
        presets_root = %presets_root.display(),
        project_root = %project_root.display(),
        "request resolved"
    );

    output.header(&format!(
        "Starting Django project '{}' with preset '{}'",
        project.display_name(),
        preset_name,
    ))?;

    // 3. Run the flow.
    let service = QuickstartService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemRunner::new()),
        Box::new(RandomSecret::new()),
    );

    let request = QuickstartRequest {
        project: project.clone(),
        app: app.clone(),
        preset,
        project_root,
        install: args.install,
    };
    let report = service.create(&request).map_err(CliError::Core)?;

    info!(project = %project.display_name(), "quickstart completed");

    // 4. Report.
    if !report.settings_overlaid {
        output.info("preset supplies no settings.py; generated defaults kept")?;
    }
    if report.env_written {
        output.info(".env written with a fresh SECRET_KEY")?;
    }
    if report.install_ok == Some(false) {
        output.warning(
            "dependency install failed; run 'pip install -r requirements.txt' manually",
        )?;
    }

    output.success(&format!(
        "Project '{}' with app '{}' is ready.",
        project.display_name(),
        app.display_name(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", project.display_name()))?;
        output.print("  python manage.py migrate")?;
        output.print("  python manage.py runserver")?;
    }

    Ok(())
}
