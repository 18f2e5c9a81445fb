//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slnforge",
    bin_name = "slnforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f528} .NET solution scaffolding and commit linting",
    long_about = "slnforge scaffolds complete .NET solutions — projects, \
                  build metadata, central package management, and git hooks — \
                  and lints commit messages against configurable rules.",
    after_help = "EXAMPLES:\n\
        \x20 slnforge init MySolution\n\
        \x20 slnforge init MySolution --output ~/repos\n\
        \x20 slnforge lint --commit-file .git/COMMIT_EDITMSG --config commit-lint.json\n\
        \x20 slnforge completions bash > /usr/share/bash-completion/completions/slnforge",
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
    /// Scaffold a new solution.
    #[command(
        visible_alias = "i",
        about = "Scaffold a new .NET solution",
        after_help = "EXAMPLES:\n\
            \x20 slnforge init MySolution\n\
            \x20 slnforge init MySolution --output ~/repos"
    )]
    Init(InitArgs),

    /// Lint a commit message.
    #[command(
        about = "Lint a commit message",
        after_help = "EXAMPLES:\n\
            \x20 slnforge lint --commit-file .git/COMMIT_EDITMSG\n\
            \x20 slnforge lint --commit-file msg.txt --config commit-lint.json"
    )]
    Lint(LintArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slnforge completions bash > ~/.local/share/bash-completion/completions/slnforge\n\
            \x20 slnforge completions zsh  > ~/.zfunc/_slnforge\n\
            \x20 slnforge completions fish > ~/.config/fish/completions/slnforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `slnforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Solution name.  Prompted for interactively when omitted (with the
    /// `interactive` feature enabled).
    #[arg(value_name = "NAME", help = "Solution name")]
    pub name: Option<String>,

    /// Parent directory for the new solution.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// `dotnet new` template for the starter project.
    #[arg(
        short = 't',
        long = "project-type",
        value_name = "TYPE",
        help = "Starter project template (default: console)"
    )]
    pub project_type: Option<String>,
}

// ── lint ──────────────────────────────────────────────────────────────────────

/// Arguments for `slnforge lint`.
#[derive(Debug, Args)]
pub struct LintArgs {
    /// File holding the commit message (e.g. `.git/COMMIT_EDITMSG`).
    #[arg(
        long = "commit-file",
        value_name = "FILE",
        help = "File containing the commit message"
    )]
    pub commit_file: PathBuf,

    /// Lint rule configuration (JSON).  Without it only the structural
    /// checks run.
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "Lint configuration file (JSON)"
    )]
    pub config: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slnforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells we can generate completions for.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
