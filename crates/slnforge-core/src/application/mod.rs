//! Application layer for slnforge.
//!
//! This layer contains:
//! - **Services**: use case orchestration (InitService, LintService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{InitOptions, InitService, InitSummary, LintService};

pub use ports::{CommandOutput, Filesystem, ToolRunner};

pub use error::ApplicationError;
