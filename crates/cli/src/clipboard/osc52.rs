use std::io::{self, IsTerminal, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use super::SelectionSink;
use crate::error::ClipboardError;

/// Sets the terminal selection with an OSC 52 escape sequence.
///
/// Works over SSH and inside terminal multiplexers that forward OSC 52, as
/// long as the writer is attached to the terminal.
pub struct Osc52Clipboard<W: Write> {
    writer: W,
    is_terminal: bool,
}

impl Osc52Clipboard<io::Stderr> {
    /// Writes the sequence to stderr, which keeps stdout free for output.
    pub fn stderr() -> Self {
        let writer = io::stderr();
        let is_terminal = writer.is_terminal();
        Self {
            writer,
            is_terminal,
        }
    }
}

impl<W: Write> Osc52Clipboard<W> {
    /// Wraps a writer that is known to reach a terminal.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            is_terminal: true,
        }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Builds the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> SelectionSink for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.is_terminal {
            return Err(ClipboardError::NotATerminal);
        }
        self.writer.write_all(osc52_sequence(text).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
