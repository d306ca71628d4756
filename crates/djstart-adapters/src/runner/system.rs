//! Subprocess-backed generator runner.
//!
//! Commands inherit stdio so generator output reaches the user directly.
//! Each call blocks until the subprocess exits; there is no timeout, so
//! a hung generator hangs the tool.

use std::path::Path;
use std::process::Command;

use djstart_core::{
    application::{ApplicationError, ports::GeneratorRunner},
    error::QuickstartResult,
};
use tracing::debug;

/// Production runner shelling out to `django-admin`, `python`, and `pip`.
#[derive(Debug, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRunner for SystemRunner {
    fn start_project(&self, safe_project: &str, project_root: &Path) -> QuickstartResult<()> {
        let mut cmd = Command::new("django-admin");
        cmd.args(["startproject", safe_project, "."])
            .current_dir(project_root);
        run_checked(cmd, "django-admin startproject")
    }

    fn start_app(&self, safe_app: &str, project_root: &Path) -> QuickstartResult<()> {
        let mut cmd = Command::new("python");
        cmd.args(["manage.py", "startapp", safe_app])
            .current_dir(project_root);
        run_checked(cmd, "python manage.py startapp")
    }

    fn install_requirements(&self, project_root: &Path) -> QuickstartResult<()> {
        let mut cmd = Command::new("pip");
        cmd.args(["install", "-r", "requirements.txt"])
            .current_dir(project_root);
        run_checked(cmd, "pip install")
    }
}

fn run_checked(mut cmd: Command, label: &str) -> QuickstartResult<()> {
    debug!(command = label, "spawning generator");
    let status = cmd.status().map_err(|e| ApplicationError::GeneratorFailed {
        command: label.to_owned(),
        detail: e.to_string(),
    })?;

    if !status.success() {
        return Err(ApplicationError::GeneratorFailed {
            command: label.to_owned(),
            detail: status.to_string(),
        }
        .into());
    }
    Ok(())
}
