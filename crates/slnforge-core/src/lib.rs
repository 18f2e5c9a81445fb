//! slnforge core - domain and application layers.
//!
//! This crate provides the pure logic behind the `slnforge` CLI, following
//! hexagonal (ports and adapters) architecture:
//!
//! - `domain::msbuild` — declarative build-metadata model and serializer.
//! - `domain::solution` — solution-manifest folder augmentation.
//! - `domain::lint` — commit-message linting.
//! - `application` — use-case services (`InitService`, `LintService`) and
//!   the ports they drive; `slnforge-adapters` supplies the
//!   implementations, `slnforge-cli` wires everything together.
//!
//! No I/O happens in this crate outside the port traits.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Filesystem, InitOptions, InitService, InitSummary, LintService, ToolRunner,
    };
    pub use crate::domain::lint::{CommitConfig, LintReport, Linter};
    pub use crate::domain::msbuild::{
        Condition, ElementBuilder, ProjectBuilder, PropertyGroup, PropertyName, TargetBuilder,
        TargetName,
    };
    pub use crate::domain::solution::{SolutionFolder, SolutionManifest, UuidFolderIds};
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
