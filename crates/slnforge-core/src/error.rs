//! Unified error handling for slnforge core.
//!
//! One root type wraps the domain rule violations and the application
//! orchestration failures, with user-actionable suggestions and a category
//! the CLI maps onto exit codes.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::lint::LintError;
use crate::domain::msbuild::MarkupError;
use crate::domain::solution::SolutionError;

/// Root error type for slnforge core operations.
#[derive(Debug, Error, Clone)]
pub enum CoreError {
    /// Build-metadata generation rejected its inputs.
    #[error("build file generation failed: {0}")]
    Markup(#[from] MarkupError),

    /// Solution-manifest text could not be understood.
    #[error("solution manifest error: {0}")]
    Solution(#[from] SolutionError),

    /// A commit message violated the configured rules.
    #[error("commit lint failed: {0}")]
    Lint(#[from] LintError),

    /// Errors from the application layer (orchestration failures).
    #[error("application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CoreError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Markup(e) => vec![
                format!("Rejected input: {e}"),
                "Set the named field before building".into(),
            ],
            Self::Solution(e) => vec![
                format!("Manifest problem: {e}"),
                "The .sln file may be hand-edited or corrupted".into(),
            ],
            Self::Lint(LintError::InvalidConfig { .. }) => vec![
                "Check the lint configuration JSON for syntax errors".into(),
            ],
            Self::Lint(e) => vec![
                format!("Rule violated: {e}"),
                "Amend the commit message and try again".into(),
            ],
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in slnforge".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Markup(_) => ErrorCategory::Validation,
            Self::Solution(_) => ErrorCategory::Validation,
            Self::Lint(LintError::InvalidConfig { .. }) => ErrorCategory::Configuration,
            Self::Lint(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CoreResult<T> = Result<T, CoreError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_errors_are_validation() {
        let err = CoreError::from(MarkupError::MissingRequiredField {
            element: "Exec",
            field: "Command",
        });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn invalid_lint_config_is_configuration() {
        let err = CoreError::from(LintError::InvalidConfig {
            reason: "expected value".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn lint_violations_are_validation() {
        let err = CoreError::from(LintError::EmptyDescription);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
