//! Generator runner adapters.

pub mod fake;
pub mod system;

pub use fake::{FakeDjango, GeneratorCall};
pub use system::SystemRunner;
