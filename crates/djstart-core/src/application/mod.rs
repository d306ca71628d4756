//! Application layer: ports and the orchestrating service.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{PresetInfo, QuickstartReport, QuickstartRequest, QuickstartService};
