//! Preset layout.
//!
//! A preset is a named, read-only directory bundle of override files. Only
//! the file names below mean anything to the tool; anything else in the
//! directory is ignored.

use std::path::{Path, PathBuf};

/// Settings override applied over the generated skeleton.
pub const SETTINGS_FILE: &str = "settings.py";

/// Dependency manifest copied into the project root.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Environment template materialized as [`ENV_FILE`].
pub const ENV_TEMPLATE_FILE: &str = ".env.template";

/// Environment file written into the project root.
pub const ENV_FILE: &str = ".env";

/// Preset files copied verbatim into the project root. Files not on this
/// list stay behind even when present in the preset directory.
pub const ALLOWED_AUX_FILES: &[&str] = &[REQUIREMENTS_FILE];

/// A named preset resolved under a presets root.
///
/// Construction never touches the filesystem; existence is checked by the
/// application service through its `Filesystem` port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    name: String,
    dir: PathBuf,
}

impl Preset {
    /// Resolve `name` under `presets_root` by exact directory name.
    pub fn new(name: impl Into<String>, presets_root: &Path) -> Self {
        let name = name.into();
        let dir = presets_root.join(&name);
        Self { name, dir }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the preset's settings override, whether or not it exists.
    pub fn settings_override(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }

    /// Path of the preset's environment template, whether or not it exists.
    pub fn env_template(&self) -> PathBuf {
        self.dir.join(ENV_TEMPLATE_FILE)
    }

    /// Whether a preset file with this name is copied into the project root.
    pub fn is_allowed_aux(file_name: &str) -> bool {
        ALLOWED_AUX_FILES.contains(&file_name)
    }
}
