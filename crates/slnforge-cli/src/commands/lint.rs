//! `slnforge lint` — lint a commit message against configurable rules.

use slnforge_core::application::LintService;
use slnforge_adapters::LocalFilesystem;

use crate::{cli::LintArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Run the commit linter and render the per-check report.
///
/// A rule violation surfaces as a `CoreError` and maps to exit code 2, which
/// is what git hooks key off to abort the commit.
pub fn execute(args: LintArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // CLI flag beats config default.
    let rule_file = args.config.or(config.lint.config);

    let service = LintService::new(Box::new(LocalFilesystem::new()));
    let report = service.lint(&args.commit_file, rule_file.as_deref())?;

    output.header("Commit message checks")?;
    for check in &report.checks {
        if check.skipped {
            output.print(&format!("  {} (skipped: {})", check.name, check.detail))?;
        } else {
            output.print(&format!("  {}", check.detail))?;
        }
    }
    output.success("Commit message looks good")?;

    Ok(())
}
