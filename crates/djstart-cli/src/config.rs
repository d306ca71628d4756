//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, or the platform config directory)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Preset lookup settings.
    pub presets: PresetsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Preset applied when `--preset` is not given.
    pub preset: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetsConfig {
    /// Presets root used when `--presets-dir` is not given.
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file`, the default location, or
    /// built-in defaults when no file exists.
    ///
    /// A file passed explicitly via `--config` must exist and parse; a
    /// missing file at the default location is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = match config_file {
            Some(p) => p.clone(),
            None => {
                let p = Self::config_path();
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.djstart.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "djstart", "djstart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".djstart.toml"))
    }

    /// Presets root used when neither flag nor config provides one.
    pub fn default_presets_root() -> PathBuf {
        directories::ProjectDirs::from("com", "djstart", "djstart")
            .map(|d| d.data_dir().join("presets"))
            .unwrap_or_else(|| PathBuf::from("presets"))
    }

    /// Resolve the presets root: flag, then config file, then default.
    pub fn presets_root(&self, flag: Option<&PathBuf>) -> PathBuf {
        flag.cloned()
            .or_else(|| self.presets.root.clone())
            .unwrap_or_else(Self::default_presets_root)
    }

    /// Resolve the preset name: flag, then config file, then `"base"`.
    pub fn preset_name(&self, flag: Option<&str>) -> String {
        flag.map(str::to_owned)
            .or_else(|| self.defaults.preset.clone())
            .unwrap_or_else(|| "base".to_owned())
    }
}
