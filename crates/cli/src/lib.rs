//! designprompt_cli - command-line configurator for designprompt.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod interactive;
pub mod logging;
pub mod output;

pub use clipboard::{
    copy_with_fallback, ClipboardSink, Osc52Clipboard, SelectionSink, SystemClipboard,
};
pub use error::{CliError, ClipboardError, Result};
