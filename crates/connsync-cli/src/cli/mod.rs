//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running without a subcommand performs `sync`.
#[derive(Debug, Parser)]
#[command(
    name    = "connsync",
    bin_name = "connsync",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Copy the generated outbound connector template into connectors/",
    long_about = "connsync copies element-templates/telegram-outbound-connector.json \
                  to connectors/telegram-connector.json under the project root. \
                  The project root is two levels above the executable unless \
                  --project-root is given.",
    after_help = "EXAMPLES:\n\
        \x20 connsync\n\
        \x20 connsync check\n\
        \x20 connsync --project-root ./my-connector sync\n\
        \x20 connsync paths --output-format json",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute (defaults to `sync`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy the source template over the target (the default).
    #[command(about = "Copy the template into place")]
    Sync,

    /// Report whether the target matches the source, without writing.
    #[command(
        about = "Check whether the target is up to date",
        after_help = "Exits 0 when up to date, 3 when the target is stale or missing."
    )]
    Check,

    /// Print the resolved project root, source, and target.
    #[command(about = "Show resolved paths")]
    Paths,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 connsync completions bash > ~/.local/share/bash-completion/completions/connsync\n\
            \x20 connsync completions zsh  > ~/.zfunc/_connsync"
    )]
    Completions(CompletionsArgs),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `connsync completions`.
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
