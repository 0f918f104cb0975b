//! CLI error types.

use std::path::PathBuf;
use std::time::Duration;

use designprompt_core::ConfigError;
use thiserror::Error;

/// Result type alias for the CLI crate.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read preset {path}: {source}")]
    PresetRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Errors reported by a clipboard sink.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("No clipboard command found")]
    Unavailable,

    #[error("Not attached to a terminal")]
    NotATerminal,

    #[error("Clipboard command timed out after {0:?}")]
    Timeout(Duration),

    #[error("Clipboard command '{program}' exited with {}", exit_code(.code))]
    CommandFailed { program: String, code: Option<i32> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status".to_string(),
    }
}
