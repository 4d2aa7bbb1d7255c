use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Result type for automation operations
pub type Result<T> = std::result::Result<T, AutomationError>;

/// Errors that can occur while driving the macOS automation surface
#[derive(Error, Debug)]
pub enum AutomationError {
    /// A named script file is missing from the scripts directory
    #[error("AppleScript file not found: {0}")]
    ScriptNotFound(PathBuf),

    /// Subprocess exited non-zero; carries the captured stderr
    #[error("execution failed: {stderr}")]
    ExecutionFailed { stderr: String },

    /// Subprocess exceeded its time bound
    #[error("execution timed out after {0:?}")]
    Timeout(Duration),

    /// A required host facility (osascript, open) is absent
    #[error("'{0}' is not available; this integration requires macOS")]
    PlatformUnsupported(&'static str),

    /// Script produced malformed structured output
    #[error("failed to parse script output: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
