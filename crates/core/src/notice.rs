use std::fmt;

use crate::render::OutputKind;

/// Short user-facing notifications raised by caller actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Copied(OutputKind),
    NothingToCopy,
    CopyFailed(OutputKind),
    Reset,
}

impl Notice {
    /// Returns true if the notice reports a failure.
    pub fn is_error(self) -> bool {
        matches!(self, Notice::CopyFailed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Copied(kind) => write!(f, "{} copied to clipboard!", kind.title()),
            Notice::NothingToCopy => f.write_str("Nothing to copy!"),
            Notice::CopyFailed(kind) => write!(f, "Could not copy {kind} to clipboard."),
            Notice::Reset => f.write_str("Form reset to defaults!"),
        }
    }
}
