//! Clipboard sinks and the copy flow.
//!
//! Copying tries an asynchronous primary sink first (the platform clipboard
//! tool) and falls back once to a synchronous selection write. Every outcome
//! is reported as a [`Notice`].

mod osc52;
mod system;

use async_trait::async_trait;
use designprompt_core::{Notice, OutputKind};

use crate::error::ClipboardError;

pub use osc52::Osc52Clipboard;
pub use system::{ClipboardCommand, SystemClipboard};

/// Primary clipboard sink.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    /// Short name used in log events.
    fn name(&self) -> &str;

    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Synchronous fallback sink, used only after the primary sink failed.
pub trait SelectionSink {
    /// Short name used in log events.
    fn name(&self) -> &str;

    /// Writes `text` to the selection.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies one artifact, falling back once if the primary sink fails.
///
/// Blank text is never sent to either sink.
pub async fn copy_with_fallback<P, F>(
    text: &str,
    kind: OutputKind,
    primary: &P,
    fallback: &mut F,
) -> Notice
where
    P: ClipboardSink + ?Sized,
    F: SelectionSink + ?Sized,
{
    if text.trim().is_empty() {
        return Notice::NothingToCopy;
    }

    match primary.write_text(text).await {
        Ok(()) => {
            tracing::debug!(sink = primary.name(), %kind, "copied to clipboard");
            return Notice::Copied(kind);
        }
        Err(error) => {
            tracing::warn!(
                sink = primary.name(),
                %error,
                "clipboard write failed, trying fallback"
            );
        }
    }

    match fallback.write_text(text) {
        Ok(()) => {
            tracing::debug!(sink = fallback.name(), %kind, "copied with fallback");
            Notice::Copied(kind)
        }
        Err(error) => {
            tracing::warn!(sink = fallback.name(), %error, "fallback clipboard write failed");
            Notice::CopyFailed(kind)
        }
    }
}
