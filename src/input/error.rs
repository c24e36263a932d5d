//! Errors raised when resolving controls by name or code.

use thiserror::Error;

/// A name or code that does not correspond to any known control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("Unknown key name '{0}'")]
    UnknownKey(String),

    #[error("Unknown mouse button name '{0}'")]
    UnknownButton(String),

    #[error("Input code {0} is not mapped to a key")]
    UnmappedKeyCode(u32),

    #[error("Input code {0:#x} is not mapped to a mouse button")]
    UnmappedButtonCode(u32),
}
