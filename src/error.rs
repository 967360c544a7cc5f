//! Error types for the fallible, non-core parts of the editor.
//!
//! The point-management core itself never fails: every odd input there is a
//! defined no-op. Errors only come from the collaborators that touch the
//! filesystem (signal import, hotkey configuration).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for zplane.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("The CSV file is empty.")]
    SignalEmpty,

    #[error("error parsing CSV file at line {line}: {reason}")]
    SignalParse { line: usize, reason: String },

    #[error("hotkey configuration: {0}")]
    HotkeyConfig(String),

    #[error("hotkeys file {0:?} does not exist")]
    HotkeyFileMissing(PathBuf),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience type alias for results using [`EditorError`].
pub type Result<T> = std::result::Result<T, EditorError>;
