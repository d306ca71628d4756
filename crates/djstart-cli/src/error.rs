//! Error handling for the djstart CLI.
//!
//! Structured errors with user-facing messages, actionable suggestions,
//! and exit-code mapping. Core errors carry their own category; this module
//! translates them into CLI categories and OS exit codes.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use djstart_core::error::{ErrorCategory as CoreCategory, QuickstartError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// An error propagated from the core scaffolding flow.
    #[error("{0}")]
    Core(#[from] QuickstartError),

    /// An I/O operation failed outside the core flow.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check the file passed via --config".into(),
                "Or remove it to fall back to built-in defaults".into(),
            ],

            Self::Core(core) => core.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::External | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (bad name, non-empty target).
    UserError,
    /// Resource (preset) not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal, I/O, or generator error.
    Internal,
}
