//! Integration tests for slnforge-core.
//!
//! These cross module boundaries on purpose: build-metadata documents built
//! through the public prelude, manifest augmentation followed by re-parsing,
//! and linting driven through the service layer with a mocked filesystem.

use slnforge_core::application::services::build_files;
use slnforge_core::domain::msbuild::{Exec, Message, MessageImportance};
use slnforge_core::domain::solution::{FolderIdSource, SolutionFolder, SolutionManifest};
use slnforge_core::prelude::*;

// ── build metadata ────────────────────────────────────────────────────────────

#[test]
fn project_with_target_and_properties_renders_complete_document() {
    let project = ProjectBuilder::new()
        .add_property_group(|group| {
            group.set(PropertyName::custom("Configuration"), "Release");
            group.set_when(
                PropertyName::custom("Optimize"),
                "true",
                Condition::equal("$(Configuration)", "Release"),
            );
        })
        .add_target(
            TargetBuilder::new(TargetName::Custom("Greet".into()))
                .add_message("hello")
                .add_exec("dotnet --info"),
        );

    let rendered = project.render().unwrap();
    assert!(rendered.starts_with("<Project>"));
    assert!(rendered.ends_with("</Project>\n"));
    assert!(rendered.contains(r#"<Target Name="Greet">"#));
    assert!(rendered.contains(r#"Condition="'$(Configuration)' == 'Release'""#));
    assert!(rendered.contains(r#"<Exec Command="dotnet --info""#));
}

#[test]
fn missing_required_field_fails_before_any_output() {
    // First target is complete, second is missing its required Command.
    let project = ProjectBuilder::new()
        .add_target(TargetBuilder::new(TargetName::Restore).add_message("ok"))
        .add_target(
            TargetBuilder::new(TargetName::Custom("Broken".into())).add_task::<Exec>(|exec| {
                exec.with(|e| e.condition = Some(Condition::has_value("X")))
            }),
        );

    let err = project.render().unwrap_err();
    assert!(err.to_string().contains("Exec.Command"));
}

#[test]
fn element_builder_is_repeatable() {
    let builder = ElementBuilder::<Message>::new()
        .with(|m| m.text = Some("twice".into()))
        .with(|m| m.importance = Some(MessageImportance::Low));

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn reference_build_targets_document_is_self_consistent() {
    let text = build_files::directory_build_targets("config/dotnet_tools_installed.txt").unwrap();

    // Probe and install targets, wired by CallTarget.
    assert!(text.contains(r#"<Target Name="ToolsRestoreAndInstall""#));
    assert!(text.contains(r#"<Target Name="RestoreAndInstall""#));
    assert!(text.contains(r#"<CallTarget Targets="RestoreAndInstall""#));
    // The husky guard must combine both properties.
    assert!(text.contains("'$(Husky)' != '0' AND '$(HuskyInstalled)' != 'true'"));
}

// ── solution manifests ────────────────────────────────────────────────────────

struct CountingIds(u32);

impl FolderIdSource for CountingIds {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("00000000-0000-0000-0000-{:012}", self.0)
    }
}

#[test]
fn appended_folder_round_trips_through_the_parser() {
    let original = "\nMicrosoft Visual Studio Solution File, Format Version 12.00";
    let mut manifest = SolutionManifest::new(original);

    let folder = SolutionFolder::new("SolutionSettings")
        .with_item(".gitignore")
        .with_item("config/dotnet_tools_installed.txt");
    manifest.add_folder(&folder, &mut CountingIds(0));

    // Original content is untouched, folder lines are appended after it.
    assert!(manifest.content().starts_with(original));

    let folders = manifest.folders().unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].name, "SolutionSettings");
    assert_eq!(folders[0].items.len(), 2);
    assert_eq!(folders[0].items[1].name, "dotnet_tools_installed.txt");
    assert_eq!(folders[0].items[1].path, "config/dotnet_tools_installed.txt");
}

#[test]
fn fresh_uuid_source_produces_uppercase_ids() {
    let mut manifest = SolutionManifest::new("");
    manifest.add_folder(&SolutionFolder::new("Docs"), &mut UuidFolderIds);

    let folders = manifest.folders().unwrap();
    assert_eq!(folders[0].id, folders[0].id.to_uppercase());
}

// ── linting through the service layer ─────────────────────────────────────────

mod lint_service {
    use std::path::{Path, PathBuf};

    use slnforge_core::application::{Filesystem, LintService};
    use slnforge_core::domain::lint::LintError;
    use slnforge_core::error::{CoreError, CoreResult};

    /// Minimal read-only filesystem for wiring the service in tests.
    struct StaticFiles(Vec<(PathBuf, String)>);

    impl Filesystem for StaticFiles {
        fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
            let _ = path;
            Ok(())
        }

        fn write_file(&self, path: &Path, _contents: &str) -> CoreResult<()> {
            let _ = path;
            Ok(())
        }

        fn read_to_string(&self, path: &Path) -> CoreResult<String> {
            self.0
                .iter()
                .find(|(p, _)| p == path)
                .map(|(_, text)| text.clone())
                .ok_or_else(|| CoreError::Internal {
                    message: format!("no such file: {}", path.display()),
                })
        }

        fn exists(&self, path: &Path) -> bool {
            self.0.iter().any(|(p, _)| p == path)
        }
    }

    #[test]
    fn config_file_rules_are_applied() {
        let service = LintService::new(Box::new(StaticFiles(vec![
            (PathBuf::from("msg"), "wip: poking around\n".into()),
            (
                PathBuf::from("rules.json"),
                r#"{"config":{"conventional-commit":{"enabled":true,"types":["feat","fix"]}}}"#
                    .into(),
            ),
        ])));

        let err = service
            .lint(Path::new("msg"), Some(Path::new("rules.json")))
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Lint(LintError::DisallowedType { .. })
        ));
    }

    #[test]
    fn multi_line_message_passes_all_checks() {
        let service = LintService::new(Box::new(StaticFiles(vec![(
            PathBuf::from("msg"),
            "feat: add husky targets\n\nAdds the restore-and-install target pair.\n".into(),
        )])));

        let report = service.lint(Path::new("msg"), None).unwrap();
        let names: Vec<_> = report.checks.iter().map(|c| c.name).collect();
        assert!(names.contains(&"blank-line"));
        assert!(names.contains(&"body"));
    }
}
