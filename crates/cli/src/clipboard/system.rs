use std::env;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::ClipboardSink;
use crate::error::ClipboardError;

/// Default time allowed for the clipboard tool to accept the text.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// A clipboard tool that reads the text from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    /// Creates a command from a program and its arguments.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Clipboard tools to look for on the current platform, in order.
    pub fn candidates() -> Vec<ClipboardCommand> {
        if cfg!(target_os = "macos") {
            vec![Self::new("pbcopy", &[])]
        } else if cfg!(windows) {
            vec![Self::new("clip", &[])]
        } else {
            vec![
                Self::new("wl-copy", &[]),
                Self::new("xclip", &["-selection", "clipboard"]),
                Self::new("xsel", &["--clipboard", "--input"]),
            ]
        }
    }
}

/// The platform clipboard, reached through an external tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<ClipboardCommand>,
    timeout: Duration,
}

impl SystemClipboard {
    /// Uses the first candidate tool found on `PATH`.
    pub fn detect() -> Self {
        let command = ClipboardCommand::candidates()
            .into_iter()
            .find(|command| find_in_path(&command.program));
        match &command {
            Some(command) => tracing::debug!(program = %command.program, "found clipboard tool"),
            None => tracing::debug!("no clipboard tool found on PATH"),
        }
        Self {
            command,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Uses an explicit clipboard command.
    pub fn with_command(command: ClipboardCommand) -> Self {
        Self {
            command: Some(command),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the time allowed for the tool to finish.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl ClipboardSink for SystemClipboard {
    fn name(&self) -> &str {
        self.command
            .as_ref()
            .map(|command| command.program.as_str())
            .unwrap_or("system")
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let command = self.command.as_ref().ok_or(ClipboardError::Unavailable)?;

        let run = async {
            let mut child = Command::new(&command.program)
                .args(&command.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn()?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }

            child.wait().await
        };

        let status = tokio::time::timeout(self.timeout, run)
            .await
            .map_err(|_| ClipboardError::Timeout(self.timeout))??;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed {
                program: command.program.clone(),
                code: status.code(),
            })
        }
    }
}

/// Checks whether `program` is an executable file in one of the `PATH` directories.
fn find_in_path(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_program(&dir, program))
}

fn is_program(dir: &Path, program: &str) -> bool {
    dir.join(program).is_file() || (cfg!(windows) && dir.join(format!("{program}.exe")).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_are_not_empty() {
        let candidates = ClipboardCommand::candidates();
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|command| !command.program.is_empty()));
    }

    #[test]
    fn test_command_new() {
        let command = ClipboardCommand::new("xclip", &["-selection", "clipboard"]);
        assert_eq!(command.program, "xclip");
        assert_eq!(command.args, vec!["-selection", "clipboard"]);
    }

    #[tokio::test]
    async fn test_missing_command_is_unavailable() {
        let clipboard = SystemClipboard {
            command: None,
            timeout: DEFAULT_TIMEOUT,
        };
        assert_eq!(clipboard.name(), "system");
        assert!(matches!(
            clipboard.write_text("text").await,
            Err(ClipboardError::Unavailable)
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        let clipboard =
            SystemClipboard::with_command(ClipboardCommand::new("sh", &["-c", "cat > /dev/null"]));
        assert_eq!(clipboard.name(), "sh");
        assert!(clipboard.write_text("hello").await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_reports_status() {
        let clipboard = SystemClipboard::with_command(ClipboardCommand::new(
            "sh",
            &["-c", "cat > /dev/null; exit 3"],
        ));
        assert!(matches!(
            clipboard.write_text("hello").await,
            Err(ClipboardError::CommandFailed { code: Some(3), .. })
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_slow_command_times_out() {
        let clipboard =
            SystemClipboard::with_command(ClipboardCommand::new("sh", &["-c", "sleep 5"]))
                .with_timeout(Duration::from_millis(100));
        assert!(matches!(
            clipboard.write_text("hello").await,
            Err(ClipboardError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_spawn_failure_is_io_error() {
        let clipboard = SystemClipboard::with_command(ClipboardCommand::new(
            "designprompt-no-such-clipboard-tool",
            &[],
        ));
        assert!(matches!(
            clipboard.write_text("hello").await,
            Err(ClipboardError::Io(_))
        ));
    }
}
