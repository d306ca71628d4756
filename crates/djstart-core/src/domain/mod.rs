//! Domain layer: pure scaffolding logic, no I/O.

pub mod env_file;
pub mod error;
pub mod names;
pub mod preset;
pub mod settings;

pub use error::DomainError;
pub use names::{AppName, ProjectName};
pub use preset::Preset;
