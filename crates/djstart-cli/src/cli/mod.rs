//! CLI argument definitions using the clap derive API.
//!
//! This module is the only place that knows about argument names, aliases,
//! help text, and value enums. No scaffolding logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "djstart",
    bin_name = "djstart",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Django project quickstart with presets",
    long_about = "djstart wraps Django's own generators to create a project \
                  and an app, then applies a preset: a settings override, a \
                  dependency manifest, and an environment template.",
    after_help = "EXAMPLES:\n\
        \x20 djstart project my-blog posts\n\
        \x20 djstart project shop cart --preset api --install\n\
        \x20 djstart list\n\
        \x20 djstart completions bash > /usr/share/bash-completion/completions/djstart",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a Django project and app with a chosen preset.
    #[command(
        visible_alias = "p",
        about = "Create a Django project and app",
        after_help = "EXAMPLES:\n\
            \x20 djstart project my-blog posts\n\
            \x20 djstart project shop cart --preset api\n\
            \x20 djstart project intranet people --install"
    )]
    Project(ProjectArgs),

    /// List presets available under the presets root.
    #[command(
        visible_alias = "ls",
        about = "List available presets",
        after_help = "EXAMPLES:\n\
            \x20 djstart list\n\
            \x20 djstart list --format json\n\
            \x20 djstart list --presets-dir ./presets"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 djstart completions bash > ~/.local/share/bash-completion/completions/djstart\n\
            \x20 djstart completions zsh  > ~/.zfunc/_djstart\n\
            \x20 djstart completions fish > ~/.config/fish/completions/djstart.fish"
    )]
    Completions(CompletionsArgs),
}

// ── project ───────────────────────────────────────────────────────────────────

/// Arguments for `djstart project`.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name; also names the target directory under the current
    /// directory. Hyphens are mapped to underscores wherever the name is
    /// used as a Python module path.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub project_name: String,

    /// App module created inside the project and registered in
    /// INSTALLED_APPS.
    #[arg(value_name = "APP_NAME", help = "App name")]
    pub app_name: String,

    /// Preset to apply. Falls back to the configured default, then "base".
    #[arg(
        short = 'p',
        long = "preset",
        value_name = "NAME",
        help = "Choose project preset [default: base]"
    )]
    pub preset: Option<String>,

    /// Run the dependency installer after scaffolding.
    #[arg(
        short = 'i',
        long = "install",
        help = "Install dependencies automatically"
    )]
    pub install: bool,

    /// Override the presets root directory.
    #[arg(
        long = "presets-dir",
        value_name = "DIR",
        env = "DJSTART_PRESETS_DIR",
        help = "Presets root directory"
    )]
    pub presets_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `djstart list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Override the presets root directory.
    #[arg(
        long = "presets-dir",
        value_name = "DIR",
        env = "DJSTART_PRESETS_DIR",
        help = "Presets root directory"
    )]
    pub presets_dir: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `djstart completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
