//! Application services.

pub mod quickstart_service;

pub use quickstart_service::{PresetInfo, QuickstartReport, QuickstartRequest, QuickstartService};
