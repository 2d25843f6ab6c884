//! CLI argument definitions
//!
//! All Clap derive structs for `clusterboot` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Validate bare-metal cluster bootstrap configuration and derive per-host files.
#[derive(Parser, Debug)]
#[command(name = "clusterboot", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "CLUSTERBOOT_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "CLUSTERBOOT_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate agent-config.yaml and report every violation.
    Validate(ValidateArgs),

    /// Derive per-host files from agent-config.yaml and write them out.
    HostFiles(HostFilesArgs),

    /// Write a commented sample agent-config.yaml.
    Template(TemplateArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Asset directory containing agent-config.yaml.
    #[arg(short, long, default_value = ".", env = "CLUSTERBOOT_ASSET_DIR")]
    pub dir: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `host-files`.
#[derive(Args, Debug)]
pub struct HostFilesArgs {
    /// Asset directory containing agent-config.yaml.
    #[arg(short, long, default_value = ".", env = "CLUSTERBOOT_ASSET_DIR")]
    pub dir: PathBuf,

    /// Directory to write per-host files into.
    #[arg(short, long, env = "CLUSTERBOOT_OUTPUT_DIR")]
    pub output: PathBuf,

    /// List the files that would be written without writing them.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Directory to write agent-config.yaml into.
    #[arg(short, long, default_value = ".", env = "CLUSTERBOOT_ASSET_DIR")]
    pub dir: PathBuf,

    /// Overwrite an existing agent-config.yaml.
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
