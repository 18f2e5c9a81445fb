//! Pure domain layer: build-metadata model, solution-manifest text
//! operations, and commit linting. No I/O happens here; the application
//! services drive these types through filesystem and process ports.

pub mod lint;
pub mod msbuild;
pub mod solution;

pub use lint::{CommitConfig, CommitConfigRoot, LintError, LintReport, Linter};
pub use msbuild::{
    Condition, ElementBuilder, MarkupError, ProjectBuilder, PropertyGroup, PropertyName,
    TargetBuilder, TargetName, TaskModel,
};
pub use solution::{
    FolderIdSource, ParsedSolutionFolder, SolutionError, SolutionFolder, SolutionItem,
    SolutionManifest, UuidFolderIds,
};
