//! Copy action error types
//!
//! Typed errors so callers can tell "nothing to copy" apart from
//! "clipboard refused the write".

use std::fmt;

/// Why a copy did not reach the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// Selector matched no element
    ElementNotFound { selector: String },
    /// Selector matched several elements while a unique match was required
    AmbiguousSelector { selector: String, matches: usize },
    /// Host rejected the selector (syntax error)
    InvalidSelector { selector: String, message: String },
    /// Window, document or clipboard API missing
    HostUnavailable(String),
    /// Clipboard write rejected (permission denied, insecure context, ...)
    ClipboardWrite { message: String },
}

impl CopyError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }

    /// Short text suitable for a status line next to the trigger
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } => "Nothing to copy",
            Self::AmbiguousSelector { .. } => "Nothing to copy",
            Self::InvalidSelector { .. } => "Nothing to copy",
            Self::HostUnavailable(_) => "Clipboard unavailable",
            Self::ClipboardWrite { .. } => "Copy failed",
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound { selector } => {
                write!(f, "No element matches selector '{}'", selector)
            }
            Self::AmbiguousSelector { selector, matches } => {
                write!(f, "Selector '{}' matches {} elements, expected one", selector, matches)
            }
            Self::InvalidSelector { selector, message } => {
                write!(f, "Invalid selector '{}': {}", selector, message)
            }
            Self::HostUnavailable(what) => write!(f, "Host unavailable: {}", what),
            Self::ClipboardWrite { message } => write!(f, "Clipboard write failed: {}", message),
        }
    }
}

impl std::error::Error for CopyError {}
