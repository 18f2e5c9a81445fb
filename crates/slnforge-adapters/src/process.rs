//! External tool runner backed by `std::process::Command`.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use slnforge_core::application::ApplicationError;
use slnforge_core::application::ports::{CommandOutput, ToolRunner};
use slnforge_core::error::CoreResult;

/// Runs external tools (the .NET CLI, git) as child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolRunner;

impl SystemToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemToolRunner {
    fn run(&self, program: &str, args: &[String], working_dir: &Path) -> CoreResult<CommandOutput> {
        debug!(program, ?args, dir = %working_dir.display(), "running external command");
        let command_line = format!("{program} {}", args.join(" "));
        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .map_err(|e| ApplicationError::CommandNotStarted {
                command: command_line.clone(),
                reason: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(ApplicationError::CommandFailed {
                command: command_line,
                exit_code: output.status.code(),
                stderr,
            }
            .into());
        }
        Ok(CommandOutput { stdout, stderr })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
