//! Quickstart service: orchestrator of the scaffolding flow.
//!
//! The flow is a strict linear sequence: resolve preset, prepare the target
//! directory, generate the skeleton, overlay and patch settings, generate
//! the app, register it, copy auxiliary files, materialize the environment
//! file, optionally install dependencies. There is no retry and no
//! rollback; a fatal step aborts immediately and partial state stays on
//! disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, GeneratorRunner, SecretSource},
    },
    domain::{
        env_file,
        names::{AppName, ProjectName},
        preset::{self, Preset},
        settings,
    },
    error::QuickstartResult,
};

/// Everything [`QuickstartService::create`] needs, resolved by the caller.
#[derive(Debug, Clone)]
pub struct QuickstartRequest {
    pub project: ProjectName,
    pub app: AppName,
    pub preset: Preset,
    /// Directory the project is created in; named by the display name.
    pub project_root: PathBuf,
    /// Run the dependency installer after scaffolding.
    pub install: bool,
}

/// What a run actually did, for CLI reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickstartReport {
    /// The preset supplied a settings override that was applied.
    pub settings_overlaid: bool,
    /// Auxiliary file names copied into the project root.
    pub aux_files: Vec<String>,
    /// `.env` was materialized from the preset template.
    pub env_written: bool,
    /// Installer ran and exited cleanly; `None` when not requested.
    pub install_ok: Option<bool>,
}

/// A preset visible under the presets root, for `djstart list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    pub name: String,
    pub has_settings: bool,
    pub has_requirements: bool,
    pub has_env_template: bool,
}

/// Main scaffolding service over injected ports.
pub struct QuickstartService {
    fs: Box<dyn Filesystem>,
    runner: Box<dyn GeneratorRunner>,
    secrets: Box<dyn SecretSource>,
}

impl QuickstartService {
    pub fn new(
        fs: Box<dyn Filesystem>,
        runner: Box<dyn GeneratorRunner>,
        secrets: Box<dyn SecretSource>,
    ) -> Self {
        Self {
            fs,
            runner,
            secrets,
        }
    }

    /// Create a Django project with one app, applying the preset overlay.
    #[instrument(
        skip_all,
        fields(
            project = %request.project.display_name(),
            app = %request.app.display_name(),
            preset = %request.preset.name(),
        )
    )]
    pub fn create(&self, request: &QuickstartRequest) -> QuickstartResult<QuickstartReport> {
        let project = &request.project;
        let app = &request.app;
        let preset = &request.preset;
        let project_root = &request.project_root;

        // 1. The preset must exist before anything touches the disk.
        if !self.fs.is_dir(preset.dir()) {
            return Err(ApplicationError::PresetNotFound {
                name: preset.name().to_owned(),
                root: preset
                    .dir()
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
            }
            .into());
        }

        // 2. Target directory: create if missing, refuse if non-empty.
        self.ensure_empty(project_root)?;
        self.fs.create_dir_all(project_root)?;

        // 3. Baseline skeleton, flat layout: the project package lands
        //    directly inside the target directory.
        self.runner.start_project(project.safe(), project_root)?;
        info!("skeleton generated");

        let settings_path = project_root
            .join(project.safe())
            .join(preset::SETTINGS_FILE);

        // 4. Preset settings overlay, with references pointed at the safe
        //    project name.
        let overlay = preset.settings_override();
        let settings_overlaid = if self.fs.exists(&overlay) {
            let text = self.fs.read_to_string(&overlay)?;
            let fixed = settings::fix_project_references(&text, project.safe());
            self.fs.write_file(&settings_path, &fixed)?;
            debug!("settings override applied");
            true
        } else {
            debug!("preset has no settings override, generated defaults kept");
            false
        };

        // 5. App skeleton.
        self.runner.start_app(app.safe(), project_root)?;

        // 6. Register the app in INSTALLED_APPS.
        let text = self.fs.read_to_string(&settings_path)?;
        let updated = settings::register_app(&text, app.safe());
        if updated != text {
            self.fs.write_file(&settings_path, &updated)?;
        }

        // 7. Allow-listed auxiliary files into the project root.
        let mut aux_files = Vec::new();
        for entry in self.fs.list_dir(preset.dir())? {
            let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if Preset::is_allowed_aux(name) {
                self.fs.copy_file(&entry, &project_root.join(name))?;
                aux_files.push(name.to_owned());
            }
        }

        // 8. Environment file with a fresh secret.
        let template = preset.env_template();
        let env_written = if self.fs.exists(&template) {
            let text = self.fs.read_to_string(&template)?;
            let env = env_file::materialize_env(&text, &self.secrets.secret_key());
            self.fs
                .write_file(&project_root.join(preset::ENV_FILE), &env)?;
            true
        } else {
            false
        };

        // 9. Optional dependency install; failure is tolerated.
        let install_ok = if request.install {
            match self.runner.install_requirements(project_root) {
                Ok(()) => Some(true),
                Err(e) => {
                    warn!(error = %e, "dependency install failed, continuing");
                    Some(false)
                }
            }
        } else {
            None
        };

        info!("project ready");
        Ok(QuickstartReport {
            settings_overlaid,
            aux_files,
            env_written,
            install_ok,
        })
    }

    /// Presets available under a root, sorted by name.
    ///
    /// A missing root is an empty listing, not an error.
    pub fn list_presets(&self, presets_root: &Path) -> QuickstartResult<Vec<PresetInfo>> {
        if !self.fs.is_dir(presets_root) {
            return Ok(Vec::new());
        }

        let mut infos = Vec::new();
        for entry in self.fs.list_dir(presets_root)? {
            if !self.fs.is_dir(&entry) {
                continue;
            }
            let Some(name) = entry.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            infos.push(PresetInfo {
                name: name.to_owned(),
                has_settings: self.fs.exists(&entry.join(preset::SETTINGS_FILE)),
                has_requirements: self.fs.exists(&entry.join(preset::REQUIREMENTS_FILE)),
                has_env_template: self.fs.exists(&entry.join(preset::ENV_TEMPLATE_FILE)),
            });
        }
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(infos)
    }

    fn ensure_empty(&self, path: &Path) -> QuickstartResult<()> {
        if self.fs.exists(path) && !self.fs.list_dir(path)?.is_empty() {
            return Err(ApplicationError::TargetNotEmpty {
                path: path.to_owned(),
            }
            .into());
        }
        Ok(())
    }
}
