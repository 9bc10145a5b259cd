//! Command-line interface.

pub mod completions;
pub mod decode;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::Format;

/// ksd - decode the data of Kubernetes Secret manifests.
#[derive(Parser)]
#[command(
    name = "ksd",
    about = "Decode the base64 data of Kubernetes Secret manifests",
    version,
    args_conflicts_with_subcommands = true,
    after_help = "Example: kubectl get secret my-secret -o yaml | ksd"
)]
pub struct Cli {
    /// Secret manifest to decode, JSON or YAML (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "KSD_OUTPUT", default_value_t = OutputFormat::Auto)]
    pub output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format selection.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Same format as the input
    #[default]
    Auto,
    Json,
    Yaml,
}

impl OutputFormat {
    /// The forced format, if any.
    pub fn format(self) -> Option<Format> {
        match self {
            Self::Auto => None,
            Self::Json => Some(Format::Json),
            Self::Yaml => Some(Format::Yaml),
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    match cli.command {
        Some(Command::Completions { shell }) => completions::execute(shell),
        None => decode::execute(cli.file.as_deref(), cli.output),
    }
}
