//! CLI command definitions.

pub mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use designprompt_core::OutputKind;

pub use config::ConfigArgs;

/// Generate design prompts and starter pages from a handful of design choices.
#[derive(Debug, Parser)]
#[command(name = "designprompt")]
#[command(about = "Generate design prompts and starter pages", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Artifact selector for `copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CopyTarget {
    Prompt,
    Code,
}

impl From<CopyTarget> for OutputKind {
    fn from(target: CopyTarget) -> Self {
        match target {
            CopyTarget::Prompt => OutputKind::Prompt,
            CopyTarget::Code => OutputKind::Code,
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the generated prompt.
    Prompt,
    /// Print the starter document, or write it to a file.
    Code {
        /// Write the document to this file instead of stdout.
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Print the prompt and the starter document.
    Generate,
    /// Copy the prompt or the starter document to the clipboard.
    Copy {
        #[arg(value_enum)]
        target: CopyTarget,
    },
    /// List every option and its default.
    Options,
    /// Print the default configuration as JSON.
    Defaults,
    /// Walk through each option interactively.
    Interactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let cli = Cli::try_parse_from(["designprompt", "prompt"]).unwrap();
        assert!(matches!(cli.command, Commands::Prompt));
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(!cli.quiet);
        assert!(!cli.verbose);

        let cli = Cli::try_parse_from(["designprompt", "code", "--out", "index.html"]).unwrap();
        match cli.command {
            Commands::Code { out } => assert_eq!(out, Some(PathBuf::from("index.html"))),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["designprompt", "copy", "code"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Copy {
                target: CopyTarget::Code
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["designprompt", "generate", "--format", "json", "-v"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_copy_requires_target() {
        assert!(Cli::try_parse_from(["designprompt", "copy"]).is_err());
        assert!(Cli::try_parse_from(["designprompt", "copy", "page"]).is_err());
    }

    #[test]
    fn test_copy_target_into_output_kind() {
        assert_eq!(OutputKind::from(CopyTarget::Prompt), OutputKind::Prompt);
        assert_eq!(OutputKind::from(CopyTarget::Code), OutputKind::Code);
    }
}
