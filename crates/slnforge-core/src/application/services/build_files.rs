//! Generation of the solution-wide build files.
//!
//! Pure content producers: the restore/install targets document
//! (`Directory.Build.targets`), the central package-version file
//! (`Directory.Packages.props`), and the git-hook task-runner manifest.
//! Writing them anywhere is the caller's job.

use serde::{Deserialize, Serialize};

use crate::domain::msbuild::{
    CallTarget, Condition, ProjectBuilder, PropertyName, TargetBuilder, TargetName,
};
use crate::error::CoreResult;

/// Item list that receives the installed-tool cache lines.
const TOOL_LINES_ITEM: &str = "ToolLines";

/// Render the `Directory.Build.targets` document.
///
/// `tool_list_path` is the cache-file path relative to the solution root,
/// e.g. `config/dotnet_tools_installed.txt`. The document wires two targets:
/// one that runs before restore and decides whether the hook tool needs
/// installing, and one that installs it and records the fact in the cache.
pub fn directory_build_targets(tool_list_path: &str) -> CoreResult<String> {
    let tag = PropertyName::MESSAGE_TAG.deferred();
    let tool_identity = format!("%({TOOL_LINES_ITEM}.Identity)");

    let probe = TargetBuilder::new(TargetName::ToolsRestoreAndInstall)
        .before_targets([TargetName::Restore, TargetName::CollectPackageReferences])
        .add_message(format!(
            "{tag} DirectoryBuildTargetsDir: {}",
            PropertyName::DIRECTORY_BUILD_TARGETS_DIR.deferred()
        ))
        .add_message(format!(
            "{tag} ToolListFile: {}",
            PropertyName::TOOL_LIST_FILE.deferred()
        ))
        .add_read_lines_from_file(PropertyName::TOOL_LIST_FILE.deferred(), TOOL_LINES_ITEM)
        .add_message(format!("{tag} Tool: {tool_identity}"))
        .add_property_group(|pg| {
            pg.set_when(
                PropertyName::HUSKY_INSTALLED,
                "true",
                Condition::equal(&tool_identity, "Husky"),
            );
        })
        .add_message(format!(
            "{tag} HuskyInstalled: {}",
            PropertyName::HUSKY_INSTALLED.deferred()
        ))
        .add_task::<CallTarget>(|task| {
            task.with(|t| t.targets = Some(vec![TargetName::RestoreAndInstall]))
                .with(|t| {
                    t.condition = Some(
                        Condition::not_equal(PropertyName::HUSKY.deferred(), 0).and(
                            Condition::not_equal(PropertyName::HUSKY_INSTALLED.deferred(), "true"),
                        ),
                    )
                })
        });

    let install = TargetBuilder::new(TargetName::RestoreAndInstall)
        .add_exec("dotnet tool restore")
        .add_exec_in(
            "dotnet husky install",
            PropertyName::DIRECTORY_BUILD_TARGETS_DIR.deferred(),
        )
        .add_write_lines_to_file(PropertyName::TOOL_LIST_FILE.deferred(), "Husky");

    let document = ProjectBuilder::new()
        .add_property_group(|pg| {
            pg.set(
                PropertyName::DIRECTORY_BUILD_TARGETS_DIR,
                PropertyName::MSBUILD_THIS_FILE_DIRECTORY.deferred(),
            );
            pg.set(
                PropertyName::TOOL_LIST_FILE,
                format!(
                    "{}{tool_list_path}",
                    PropertyName::DIRECTORY_BUILD_TARGETS_DIR.deferred()
                ),
            );
            pg.set(
                PropertyName::MESSAGE_TAG,
                format!(
                    "[Directory.Build.targets][{}]",
                    PropertyName::MSBUILD_PROJECT_NAME.deferred()
                ),
            );
        })
        .add_target(probe)
        .add_target(install)
        .render()?;
    Ok(document)
}

/// Render `Directory.Packages.props`: central package-version management
/// with one item group per project family.
pub fn directory_packages_props() -> String {
    use crate::domain::msbuild::XmlElement;

    let project = XmlElement::new("Project")
        .child(
            XmlElement::new("PropertyGroup")
                .child(XmlElement::new("ManagePackageVersionsCentrally").text("true")),
        )
        .child(XmlElement::new("ItemGroup").attr("Label", "App"))
        .child(XmlElement::new("ItemGroup").attr("Label", "Tests"));
    format!("{project}\n")
}

// ── Task-runner manifest ──────────────────────────────────────────────────────

/// The `.husky/task-runner.json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRunner {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub tasks: Vec<TaskRunnerTask>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRunnerTask {
    pub name: String,
    pub group: String,
    pub command: String,
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
}

/// The pre-commit tasks installed into a fresh manifest: format staged
/// files, then build.
pub fn pre_commit_tasks() -> Vec<TaskRunnerTask> {
    vec![
        TaskRunnerTask {
            name: "format-staged-files-with-csharpier".into(),
            group: "pre-commit".into(),
            command: "dotnet".into(),
            args: vec!["csharpier".into(), "${staged}".into()],
            include: vec!["**/*.cs".into()],
        },
        TaskRunnerTask {
            name: "build".into(),
            group: "pre-commit".into(),
            command: "dotnet".into(),
            args: vec!["build".into()],
            include: Vec::new(),
        },
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_targets_document_matches_reference() {
        let doc = directory_build_targets("config/dotnet_tools_installed.txt").unwrap();
        let expected = "\
<Project>
  <PropertyGroup>
    <DirectoryBuildTargetsDir>$(MSBuildThisFileDirectory)</DirectoryBuildTargetsDir>
    <ToolListFile>$(DirectoryBuildTargetsDir)config/dotnet_tools_installed.txt</ToolListFile>
    <MessageTag>[Directory.Build.targets][$(MSBuildProjectName)]</MessageTag>
  </PropertyGroup>
  <Target Name=\"ToolsRestoreAndInstall\" BeforeTargets=\"Restore;CollectPackageReferences\">
    <Message Text=\"$(MessageTag) DirectoryBuildTargetsDir: $(DirectoryBuildTargetsDir)\" Importance=\"High\" />
    <Message Text=\"$(MessageTag) ToolListFile: $(ToolListFile)\" Importance=\"High\" />
    <ReadLinesFromFile File=\"$(ToolListFile)\">
      <Output TaskParameter=\"Lines\" ItemName=\"ToolLines\" />
    </ReadLinesFromFile>
    <Message Text=\"$(MessageTag) Tool: %(ToolLines.Identity)\" Importance=\"High\" />
    <PropertyGroup>
      <HuskyInstalled Condition=\"'%(ToolLines.Identity)' == 'Husky'\">true</HuskyInstalled>
    </PropertyGroup>
    <Message Text=\"$(MessageTag) HuskyInstalled: $(HuskyInstalled)\" Importance=\"High\" />
    <CallTarget Targets=\"RestoreAndInstall\" Condition=\"'$(Husky)' != '0' AND '$(HuskyInstalled)' != 'true'\" />
  </Target>
  <Target Name=\"RestoreAndInstall\">
    <Exec Command=\"dotnet tool restore\" StandardOutputImportance=\"Low\" StandardErrorImportance=\"High\" />
    <Exec Command=\"dotnet husky install\" StandardOutputImportance=\"Low\" StandardErrorImportance=\"High\" WorkingDirectory=\"$(DirectoryBuildTargetsDir)\" />
    <WriteLinesToFile File=\"$(ToolListFile)\" Lines=\"Husky\" />
  </Target>
</Project>
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn packages_props_has_central_management_and_labeled_groups() {
        let doc = directory_packages_props();
        assert!(doc.contains("<ManagePackageVersionsCentrally>true</ManagePackageVersionsCentrally>"));
        assert!(doc.contains("<ItemGroup Label=\"App\" />"));
        assert!(doc.contains("<ItemGroup Label=\"Tests\" />"));
    }

    #[test]
    fn task_runner_round_trips_and_omits_empty_include() {
        let runner = TaskRunner {
            schema: "https://example.test/schema.json".into(),
            tasks: pre_commit_tasks(),
        };
        let json = serde_json::to_string_pretty(&runner).unwrap();
        assert!(json.contains("\"$schema\""));
        assert!(json.contains("format-staged-files-with-csharpier"));
        // The build task has no include filter, so the key is absent.
        assert_eq!(json.matches("\"include\"").count(), 1);

        let parsed: TaskRunner = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, runner);
    }
}
