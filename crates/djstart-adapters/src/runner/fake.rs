//! Recording fake generator for tests.
//!
//! Materializes a minimal Django-shaped skeleton into a
//! [`MemoryFilesystem`] so the patching steps downstream have real text to
//! work on, and records every invocation for assertions.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use djstart_core::{
    application::{ApplicationError, ports::GeneratorRunner},
    error::QuickstartResult,
};

use crate::filesystem::MemoryFilesystem;

/// One recorded generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorCall {
    StartProject { safe_project: String, root: PathBuf },
    StartApp { safe_app: String, root: PathBuf },
    Install { root: PathBuf },
}

/// Fake generator backed by a [`MemoryFilesystem`].
///
/// Hand it a clone of the filesystem the service uses; skeleton files it
/// writes become visible to the service immediately. Clones share the call
/// log, so a test can box one clone into the service and assert on the
/// original afterwards.
#[derive(Clone)]
pub struct FakeDjango {
    fs: MemoryFilesystem,
    calls: Arc<Mutex<Vec<GeneratorCall>>>,
    fail_start_project: bool,
    fail_install: bool,
}

impl FakeDjango {
    pub fn new(fs: MemoryFilesystem) -> Self {
        Self {
            fs,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_start_project: false,
            fail_install: false,
        }
    }

    /// A fake whose skeleton generator fails.
    pub fn failing_start_project(fs: MemoryFilesystem) -> Self {
        Self {
            fail_start_project: true,
            ..Self::new(fs)
        }
    }

    /// A fake whose dependency installer fails.
    pub fn failing_install(fs: MemoryFilesystem) -> Self {
        Self {
            fail_install: true,
            ..Self::new(fs)
        }
    }

    /// All invocations so far, in order.
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, call: GeneratorCall) {
        self.calls.lock().expect("lock").push(call);
    }
}

impl GeneratorRunner for FakeDjango {
    fn start_project(&self, safe_project: &str, project_root: &Path) -> QuickstartResult<()> {
        self.record(GeneratorCall::StartProject {
            safe_project: safe_project.to_owned(),
            root: project_root.to_path_buf(),
        });
        if self.fail_start_project {
            return Err(ApplicationError::GeneratorFailed {
                command: "django-admin startproject".into(),
                detail: "exit status: 1".into(),
            }
            .into());
        }

        let package = project_root.join(safe_project);
        let settings = format!(
            "DEBUG = True\n\n\
             INSTALLED_APPS = [\n\
             \x20   'django.contrib.admin',\n\
             \x20   'django.contrib.auth',\n\
             ]\n\n\
             ROOT_URLCONF = \"{safe_project}.urls\"\n\n\
             WSGI_APPLICATION = \"{safe_project}.wsgi.application\"\n"
        );
        self.fs.seed_file(&package.join("settings.py"), &settings);
        self.fs.seed_file(&package.join("urls.py"), "urlpatterns = []\n");
        self.fs
            .seed_file(&project_root.join("manage.py"), "#!/usr/bin/env python\n");
        Ok(())
    }

    fn start_app(&self, safe_app: &str, project_root: &Path) -> QuickstartResult<()> {
        self.record(GeneratorCall::StartApp {
            safe_app: safe_app.to_owned(),
            root: project_root.to_path_buf(),
        });
        self.fs.seed_file(
            &project_root.join(safe_app).join("apps.py"),
            "from django.apps import AppConfig\n",
        );
        Ok(())
    }

    fn install_requirements(&self, project_root: &Path) -> QuickstartResult<()> {
        self.record(GeneratorCall::Install {
            root: project_root.to_path_buf(),
        });
        if self.fail_install {
            return Err(ApplicationError::GeneratorFailed {
                command: "pip install".into(),
                detail: "exit status: 1".into(),
            }
            .into());
        }
        Ok(())
    }
}
