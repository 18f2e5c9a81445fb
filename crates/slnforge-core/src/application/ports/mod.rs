//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `slnforge-adapters` crate provides the production implementations
//! (`LocalFilesystem`, `SystemToolRunner`) and in-memory test doubles.

use std::path::Path;

use crate::error::CoreResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `slnforge_adapters::filesystem::LocalFilesystem` (production)
/// - `slnforge_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, creating it or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> CoreResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Captured result of one external command run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external tools (the .NET CLI, git).
///
/// Implementations return `Ok` only for a zero exit status; a non-zero
/// status maps to `ApplicationError::CommandFailed`.
#[cfg_attr(test, mockall::automock)]
pub trait ToolRunner: Send + Sync {
    /// Run `program` with `args` in `working_dir`, capturing output.
    fn run(&self, program: &str, args: &[String], working_dir: &Path)
    -> CoreResult<CommandOutput>;
}
