//! Commit-lint orchestration: read the message and configuration through
//! the filesystem port, then run the domain linter.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::lint::{CommitConfig, CommitConfigRoot, LintReport, Linter};
use crate::error::CoreResult;

pub struct LintService {
    filesystem: Box<dyn Filesystem>,
}

impl LintService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Lint the commit message in `commit_file` against the rules in
    /// `config_file`. Without a config file every configurable check is
    /// skipped and only the structural checks run.
    #[instrument(skip(self))]
    pub fn lint(&self, commit_file: &Path, config_file: Option<&Path>) -> CoreResult<LintReport> {
        let message = self.read(commit_file)?;
        let config = match config_file {
            Some(path) => {
                let root = CommitConfigRoot::from_json(&self.read(path)?)?;
                root.config.unwrap_or_default()
            }
            None => CommitConfig::default(),
        };
        debug!(lines = message.lines().count(), "linting commit message");
        Ok(Linter::new(config).lint(&message)?)
    }

    fn read(&self, path: &Path) -> CoreResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::FileNotFound { path: path.into() }.into());
        }
        self.filesystem.read_to_string(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::lint::LintError;
    use crate::error::CoreError;
    use std::path::PathBuf;

    fn filesystem_with(files: Vec<(&'static str, &'static str)>) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        let lookup: Vec<(PathBuf, String)> = files
            .into_iter()
            .map(|(p, c)| (PathBuf::from(p), c.to_string()))
            .collect();
        {
            let lookup = lookup.clone();
            fs.expect_exists()
                .returning(move |p| lookup.iter().any(|(path, _)| path == p));
        }
        fs.expect_read_to_string().returning(move |p| {
            lookup
                .iter()
                .find(|(path, _)| path == p)
                .map(|(_, c)| c.clone())
                .ok_or_else(|| ApplicationError::FileNotFound { path: p.into() }.into())
        });
        fs
    }

    #[test]
    fn lints_with_configured_rules() {
        let fs = filesystem_with(vec![
            ("COMMIT_EDITMSG", "feat: add parser"),
            (
                "lint.json",
                r#"{ "config": { "conventional-commit": { "enabled": true, "types": ["feat"] } } }"#,
            ),
        ]);
        let report = LintService::new(Box::new(fs))
            .lint(Path::new("COMMIT_EDITMSG"), Some(Path::new("lint.json")))
            .unwrap();
        assert!(report.checks.iter().any(|c| c.name == "commit-type" && !c.skipped));
    }

    #[test]
    fn violation_surfaces_as_lint_error() {
        let fs = filesystem_with(vec![
            ("COMMIT_EDITMSG", "docs: update"),
            (
                "lint.json",
                r#"{ "config": { "conventional-commit": { "enabled": true, "types": ["feat"] } } }"#,
            ),
        ]);
        let err = LintService::new(Box::new(fs))
            .lint(Path::new("COMMIT_EDITMSG"), Some(Path::new("lint.json")))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Lint(LintError::DisallowedType { .. })
        ));
    }

    #[test]
    fn missing_commit_file_is_not_found() {
        let fs = filesystem_with(vec![]);
        let err = LintService::new(Box::new(fs))
            .lint(Path::new("COMMIT_EDITMSG"), None)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::FileNotFound { .. })
        ));
    }

    #[test]
    fn without_config_only_structural_checks_run() {
        let fs = filesystem_with(vec![("COMMIT_EDITMSG", "whatever: works")]);
        let report = LintService::new(Box::new(fs))
            .lint(Path::new("COMMIT_EDITMSG"), None)
            .unwrap();
        assert!(report.checks.iter().filter(|c| c.skipped).count() == 2);
    }
}
