//! Property and target identity tokens.
//!
//! A [`PropertyName`] is a pure name: it carries no value and is never
//! evaluated. Well-known names are exposed as `const` singletons so call
//! sites share one canonical spelling; equality and hashing go through the
//! name string, which makes the token usable as a map key.
//!
//! [`PropertyName::deferred`] renders the `$(Name)` form. That string is a
//! textual convention for the consuming build tool ("substitute at
//! evaluation time") — this engine emits it verbatim and never resolves it.

use std::borrow::Cow;
use std::fmt;

/// Identity token for an MSBuild property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyName(Cow<'static, str>);

impl PropertyName {
    /// Directory containing the file currently being evaluated.
    pub const MSBUILD_THIS_FILE_DIRECTORY: Self = Self::well_known("MSBuildThisFileDirectory");
    /// Name of the project being built.
    pub const MSBUILD_PROJECT_NAME: Self = Self::well_known("MSBuildProjectName");

    /// Directory holding the generated `Directory.Build.targets`.
    pub const DIRECTORY_BUILD_TARGETS_DIR: Self = Self::well_known("DirectoryBuildTargetsDir");
    /// Path of the installed-tools cache file.
    pub const TOOL_LIST_FILE: Self = Self::well_known("ToolListFile");
    /// Prefix prepended to every progress message.
    pub const MESSAGE_TAG: Self = Self::well_known("MessageTag");
    /// Feature flag: setting it to `0` skips hook installation.
    pub const HUSKY: Self = Self::well_known("Husky");
    /// Marker set once the hook tool shows up in the tool cache.
    pub const HUSKY_INSTALLED: Self = Self::well_known("HuskyInstalled");

    const fn well_known(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// A property name outside the well-known set.
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `$(Name)` deferred-reference form, substituted by the build tool
    /// at evaluation time. Never evaluated here.
    pub fn deferred(&self) -> String {
        format!("$({})", self.0)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity token for an MSBuild target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetName {
    /// Built-in restore target.
    Restore,
    /// Built-in package-reference collection target.
    CollectPackageReferences,
    /// Generated target that restores tools and decides whether to install.
    ToolsRestoreAndInstall,
    /// Generated target that performs the actual restore + install.
    RestoreAndInstall,
    /// Any other target.
    Custom(String),
}

impl TargetName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Restore => "Restore",
            Self::CollectPackageReferences => "CollectPackageReferences",
            Self::ToolsRestoreAndInstall => "ToolsRestoreAndInstall",
            Self::RestoreAndInstall => "RestoreAndInstall",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
