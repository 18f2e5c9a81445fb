//! Application layer errors.
//!
//! These represent orchestration failures: filesystem trouble, external
//! tools misbehaving, preconditions on the workspace. Rule violations from
//! the domain layer arrive as `MarkupError`/`LintError` and are wrapped by
//! `CoreError`, not duplicated here.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while orchestrating a use case.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The scaffold destination already exists.
    #[error("directory already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The solution name failed validation.
    #[error("invalid solution name '{name}': {reason}")]
    InvalidSolutionName { name: String, reason: String },

    /// An expected input file was not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// An external tool exited unsuccessfully.
    #[error("command '{command}' failed{}: {stderr}", exit_code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// An external tool could not be started at all.
    #[error("command '{command}' could not be started: {reason}")]
    CommandNotStarted { command: String, reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different solution name or output directory".into(),
            ],
            Self::InvalidSolutionName { .. } => vec![
                "Solution names may contain letters, digits, '.', '-' and '_'".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("Expected to find: {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("The external command failed: {command}"),
                "Re-run with -vv to see the full invocation".into(),
            ],
            Self::CommandNotStarted { command, .. } => vec![
                format!("Could not launch: {command}"),
                "Check that the .NET SDK is installed and on PATH".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::ProjectExists { .. } | Self::InvalidSolutionName { .. } => {
                ErrorCategory::Validation
            }
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::CommandFailed { .. } | Self::CommandNotStarted { .. } => {
                ErrorCategory::Configuration
            }
        }
    }
}
