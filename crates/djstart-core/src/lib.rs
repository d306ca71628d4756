//! djstart core: domain and application layers.
//!
//! The crate follows a ports-and-adapters split:
//!
//! ```text
//! djstart-cli  ──calls──▶  QuickstartService (application)
//!                              │ uses
//!                              ▼
//!                    ports: Filesystem, GeneratorRunner, SecretSource
//!                              │ implemented by
//!                              ▼
//!                    djstart-adapters (std::fs, std::process, fastrand)
//!
//! domain: names, preset layout, settings transforms (pure, no I/O)
//! ```
//!
//! The domain layer never performs I/O or spawns processes; everything the
//! scaffolding flow needs from the outside world goes through the ports in
//! [`application::ports`], so tests can substitute in-memory fakes without
//! touching the real generators.

pub mod application;
pub mod domain;
pub mod error;

pub use application::{
    PresetInfo, QuickstartReport, QuickstartRequest, QuickstartService,
};
pub use error::{ErrorCategory, QuickstartError, QuickstartResult};
