//! Unified error handling for djstart core.
//!
//! The two layers each have their own error enum; this module wraps them
//! into a single root type the CLI can categorize and map to exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum QuickstartError {
    /// Business-rule violations (naming, validation).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration failures (missing preset, generator exit, I/O).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl QuickstartError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories the CLI styles and maps to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid user input (bad name, non-empty target).
    Validation,
    /// A named resource (preset) does not exist.
    NotFound,
    /// An external generator failed or could not be spawned.
    External,
    /// Filesystem or other internal failure.
    Internal,
}

/// Convenient result type alias.
pub type QuickstartResult<T> = Result<T, QuickstartError>;
