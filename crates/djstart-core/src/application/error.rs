//! Application layer errors.
//!
//! These represent failures in orchestration, not business rules; business
//! rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the scaffolding flow.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No preset directory with this name under the presets root.
    #[error("preset '{name}' not found under {}", .root.display())]
    PresetNotFound { name: String, root: PathBuf },

    /// Target directory exists and already has entries.
    #[error("directory '{}' already exists and is not empty", .path.display())]
    TargetNotEmpty { path: PathBuf },

    /// An external generator exited non-zero or could not be spawned.
    #[error("{command} failed: {detail}")]
    GeneratorFailed { command: String, detail: String },

    /// A filesystem operation failed.
    #[error("filesystem error at {}: {reason}", .path.display())]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PresetNotFound { name, root } => vec![
                format!("No preset named '{}' under {}", name, root.display()),
                "List available presets: djstart list".into(),
                "Point at a different presets root with --presets-dir".into(),
            ],
            Self::TargetNotEmpty { path } => vec![
                format!("'{}' already has contents", path.display()),
                "Choose a different project name".into(),
                "Or move the existing directory out of the way".into(),
            ],
            Self::GeneratorFailed { command, .. } => vec![
                format!("'{command}' did not complete"),
                "Ensure django-admin, python, and pip are on your PATH".into(),
                "Check the generator output above for details".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check permissions and available disk space".into(),
            ],
        }
    }

    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PresetNotFound { .. } => ErrorCategory::NotFound,
            Self::TargetNotEmpty { .. } => ErrorCategory::Validation,
            Self::GeneratorFailed { .. } => ErrorCategory::External,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
