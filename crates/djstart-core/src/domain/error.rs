//! Domain layer errors.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by pure domain logic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A user-supplied project or app name cannot be used.
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("'{name}' cannot be used as a name: {reason}"),
                "Use letters, digits, hyphens, and underscores".into(),
                "Examples: blog, my-site, shop_v2".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } => ErrorCategory::Validation,
        }
    }
}
