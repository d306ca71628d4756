//! Secret key sources.

use djstart_core::application::ports::SecretSource;
use djstart_core::domain::env_file::{SECRET_KEY_CHARS, SECRET_KEY_LEN};

/// Production source drawing 50 characters from the Django secret-key
/// alphabet.
#[derive(Debug, Clone, Copy)]
pub struct RandomSecret;

impl RandomSecret {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomSecret {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSource for RandomSecret {
    fn secret_key(&self) -> String {
        (0..SECRET_KEY_LEN)
            .map(|_| SECRET_KEY_CHARS[fastrand::usize(..SECRET_KEY_CHARS.len())] as char)
            .collect()
    }
}

/// Deterministic source for tests.
#[derive(Debug, Clone)]
pub struct FixedSecret(pub String);

impl SecretSource for FixedSecret {
    fn secret_key(&self) -> String {
        self.0.clone()
    }
}
