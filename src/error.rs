//! Error types for the wkit CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for wkit operations.
#[derive(Error, Debug)]
pub enum WkitError {
    /// User provided invalid arguments or the repository is in an unexpected state.
    #[error("{0}")]
    UserError(String),

    /// Configuration could not be loaded, validated, or written.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A git subprocess could not be spawned or exited non-zero.
    ///
    /// Runner failures are propagated as-is through the parsing core.
    #[error("Git command failed: {0}")]
    CommandExecutionFailed(String),
}

impl WkitError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            WkitError::UserError(_) => exit_codes::USER_ERROR,
            WkitError::ConfigError(_) => exit_codes::CONFIG_ERROR,
            WkitError::CommandExecutionFailed(_) => exit_codes::GIT_FAILURE,
        }
    }

    /// The message without the variant's display prefix, for nesting in another error.
    pub fn message(&self) -> &str {
        match self {
            WkitError::UserError(msg)
            | WkitError::ConfigError(msg)
            | WkitError::CommandExecutionFailed(msg) => msg,
        }
    }
}

/// Result type alias for wkit operations.
pub type Result<T> = std::result::Result<T, WkitError>;
