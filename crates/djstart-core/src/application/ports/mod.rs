//! Driven ports: what the application needs from the outside world.
//!
//! `djstart-adapters` provides the production implementations
//! (`LocalFilesystem`, `SystemRunner`, `RandomSecret`) and in-memory
//! counterparts for tests. Keeping generator invocation behind
//! [`GeneratorRunner`] means the whole flow is testable without spawning a
//! single process.

use std::path::{Path, PathBuf};

use crate::error::QuickstartResult;

/// Filesystem operations the scaffolding flow performs.
pub trait Filesystem: Send + Sync {
    /// Check whether a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> QuickstartResult<()>;

    /// Read a file into a string.
    fn read_to_string(&self, path: &Path) -> QuickstartResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> QuickstartResult<()>;

    /// Copy a file.
    fn copy_file(&self, from: &Path, to: &Path) -> QuickstartResult<()>;

    /// Immediate children of a directory, unordered.
    fn list_dir(&self, path: &Path) -> QuickstartResult<Vec<PathBuf>>;
}

/// External generator invocations, blocking until the subprocess exits.
///
/// Implementations run each command with the project root as the working
/// directory and propagate a non-zero exit as an error; the caller decides
/// which failures are fatal.
pub trait GeneratorRunner: Send + Sync {
    /// Produce the baseline project skeleton (`django-admin startproject
    /// <safe_project> .`).
    fn start_project(&self, safe_project: &str, project_root: &Path) -> QuickstartResult<()>;

    /// Add an app module to the project (`python manage.py startapp
    /// <safe_app>`).
    fn start_app(&self, safe_app: &str, project_root: &Path) -> QuickstartResult<()>;

    /// Install dependencies from the copied manifest (`pip install -r
    /// requirements.txt`).
    fn install_requirements(&self, project_root: &Path) -> QuickstartResult<()>;
}

/// Source of generated secret keys.
pub trait SecretSource: Send + Sync {
    /// A fresh secret suitable as a Django `SECRET_KEY`.
    fn secret_key(&self) -> String;
}
