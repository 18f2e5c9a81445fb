//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: scaffold a solution, lint a commit message.

pub mod build_files;
pub mod init;
pub mod lint;

pub use build_files::{TaskRunner, TaskRunnerTask};
pub use init::{InitOptions, InitService, InitSummary};
pub use lint::LintService;
