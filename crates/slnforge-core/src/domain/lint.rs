//! Commit-message linting.
//!
//! Checks run in a fixed order against the raw commit message: subject
//! length, conventional-commit type, non-empty description, then (for
//! multi-line messages) the blank separator line and a non-empty body.
//! The first violation aborts the run; a successful run yields a
//! [`LintReport`] describing what passed and what was skipped.
//!
//! Configuration is JSON with kebab-case keys, wrapped in a top-level
//! `config` object. Either check can be absent or disabled, which skips it.

use serde::Deserialize;
use thiserror::Error;

const SUBJECT_SEPARATOR: &str = ": ";
const CHECKMARK: char = '\u{2714}';

/// Violations that fail a lint run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LintError {
    #[error("commit message is empty")]
    EmptyMessage,

    #[error("commit subject is too long ({length} characters), should have max {max} characters")]
    SubjectTooLong { length: usize, max: usize },

    #[error("commit type is not on accepted list. Current: {commit_type}. Should be one of: {}", allowed.join(", "))]
    DisallowedType {
        commit_type: String,
        allowed: Vec<String>,
    },

    /// The subject has no `: ` separator, so there is no description to
    /// check.
    #[error("commit subject '{subject}' is missing the '{SUBJECT_SEPARATOR}' separator")]
    MalformedSubject { subject: String },

    #[error("commit description cannot be empty")]
    EmptyDescription,

    #[error("there must be a blank line between subject and body")]
    MissingBlankLine,

    #[error("commit body cannot be empty")]
    EmptyBody,

    #[error("invalid lint configuration: {reason}")]
    InvalidConfig { reason: String },
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CommitConfigRoot {
    pub config: Option<CommitConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct CommitConfig {
    pub max_subject_length: Option<MaxSubjectLength>,
    pub conventional_commit: Option<ConventionalCommit>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct MaxSubjectLength {
    pub enabled: bool,
    pub value: usize,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct ConventionalCommit {
    pub enabled: bool,
    pub types: Option<Vec<String>>,
}

impl CommitConfigRoot {
    pub fn from_json(text: &str) -> Result<Self, LintError> {
        serde_json::from_str(text).map_err(|e| LintError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}

// ── Linting ───────────────────────────────────────────────────────────────────

/// Outcome of one check in a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub detail: String,
    pub skipped: bool,
}

/// All check outcomes of a successful run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub checks: Vec<CheckResult>,
}

impl LintReport {
    fn passed(&mut self, name: &'static str, detail: String) {
        self.checks.push(CheckResult {
            name,
            detail,
            skipped: false,
        });
    }

    fn skipped(&mut self, name: &'static str, detail: String) {
        self.checks.push(CheckResult {
            name,
            detail,
            skipped: true,
        });
    }
}

/// Runs the check sequence over raw commit-message text.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    config: CommitConfig,
}

impl Linter {
    pub fn new(config: CommitConfig) -> Self {
        Self { config }
    }

    pub fn lint(&self, message: &str) -> Result<LintReport, LintError> {
        let lines: Vec<&str> = message.lines().collect();
        let subject = *lines.first().ok_or(LintError::EmptyMessage)?;

        let mut report = LintReport::default();
        self.check_subject_length(subject, &mut report)?;
        self.check_type(subject, &mut report)?;
        check_description(subject, &mut report)?;

        if lines.len() == 1 {
            return Ok(report);
        }
        check_blank_line(&lines, &mut report)?;
        check_body(&lines, &mut report)?;
        Ok(report)
    }

    fn check_subject_length(
        &self,
        subject: &str,
        report: &mut LintReport,
    ) -> Result<(), LintError> {
        let Some(rule) = self.config.max_subject_length.as_ref().filter(|r| r.enabled) else {
            report.skipped("subject-length", "max subject length check disabled".into());
            return Ok(());
        };
        let length = subject.chars().count();
        if length > rule.value {
            return Err(LintError::SubjectTooLong {
                length,
                max: rule.value,
            });
        }
        report.passed(
            "subject-length",
            format!("subject length check passed ({length}/{} characters) {CHECKMARK}", rule.value),
        );
        Ok(())
    }

    fn check_type(&self, subject: &str, report: &mut LintReport) -> Result<(), LintError> {
        let rule = self
            .config
            .conventional_commit
            .as_ref()
            .filter(|r| r.enabled && r.types.is_some());
        let Some(types) = rule.and_then(|r| r.types.as_ref()) else {
            report.skipped("commit-type", "conventional commit check disabled".into());
            return Ok(());
        };

        let allowed: Vec<String> = types.iter().map(|t| t.to_lowercase()).collect();
        // Scope markers like `feat(parser):` count as their bare type; the
        // comparison ignores case on both sides.
        let commit_type = subject
            .split(SUBJECT_SEPARATOR)
            .next()
            .unwrap_or_default()
            .split('(')
            .next()
            .unwrap_or_default();
        if !allowed.iter().any(|t| t == &commit_type.to_lowercase()) {
            return Err(LintError::DisallowedType {
                commit_type: commit_type.to_string(),
                allowed,
            });
        }
        report.passed(
            "commit-type",
            format!("type ({commit_type}) check passed {CHECKMARK}"),
        );
        Ok(())
    }
}

fn check_description(subject: &str, report: &mut LintReport) -> Result<(), LintError> {
    let (_, description) =
        subject
            .split_once(SUBJECT_SEPARATOR)
            .ok_or_else(|| LintError::MalformedSubject {
                subject: subject.to_string(),
            })?;
    if description.trim().is_empty() {
        return Err(LintError::EmptyDescription);
    }
    report.passed(
        "description",
        format!("description not empty check passed {CHECKMARK}"),
    );
    Ok(())
}

fn check_blank_line(lines: &[&str], report: &mut LintReport) -> Result<(), LintError> {
    if !lines[1].trim().is_empty() {
        return Err(LintError::MissingBlankLine);
    }
    report.passed(
        "blank-line",
        format!("blank line between subject and body check passed {CHECKMARK}"),
    );
    Ok(())
}

fn check_body(lines: &[&str], report: &mut LintReport) -> Result<(), LintError> {
    if lines.len() >= 3 && lines[2].trim().is_empty() {
        return Err(LintError::EmptyBody);
    }
    report.passed("body", format!("body not empty check passed {CHECKMARK}"));
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
