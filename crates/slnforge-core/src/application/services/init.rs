//! Solution scaffolding orchestration.
//!
//! `InitService` drives the whole `init` use case through the filesystem and
//! tool-runner ports: folder layout, the .NET CLI invocations that create
//! the solution and projects, generated build files, git-hook wiring, and
//! the solution-folder entry that surfaces the loose settings files in the
//! IDE.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::error::ApplicationError;
use crate::application::ports::{Filesystem, ToolRunner};
use crate::application::services::build_files::{
    TaskRunner, directory_build_targets, directory_packages_props, pre_commit_tasks,
};
use crate::domain::solution::{FolderIdSource, SolutionFolder, SolutionManifest};
use crate::error::{CoreError, CoreResult};

const SCAFFOLD_FOLDERS: [&str; 6] = ["src", "tests", "samples", "docs", "build", "config"];
const TOOL_LIST_RELATIVE: &str = "config/dotnet_tools_installed.txt";
const TASK_RUNNER_RELATIVE: &str = ".husky/task-runner.json";
const SETTINGS_FOLDER_NAME: &str = "SolutionSettings";
const DEFAULT_PROJECT_TYPE: &str = "console";

const TEST_PACKAGES: [&str; 5] = [
    "FluentAssertions",
    "NSubstitute",
    "NSubstitute.Analyzers.CSharp",
    "AutoFixture",
    "AutoFixture.AutoNSubstitute",
];

const GITIGNORE_TEMPLATE: &str = "\
bin/
obj/
.vs/
.idea/
*.user
config/.env
";

const EDITORCONFIG_TEMPLATE: &str = "\
root = true

[*]
charset = utf-8
end_of_line = lf
insert_final_newline = true
indent_style = space
indent_size = 4

[*.{json,yml,yaml}]
indent_size = 2
";

/// Inputs to the `init` use case.
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub solution_name: String,
    /// Parent directory for the new solution; defaults to the current dir.
    pub output: Option<PathBuf>,
    /// `dotnet new` template for the starter project; defaults to `console`.
    pub project_type: Option<String>,
}

/// What `init` created, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSummary {
    pub solution_name: String,
    pub root: PathBuf,
    pub created_folders: Vec<String>,
    pub test_project: String,
}

/// Orchestrates solution scaffolding through the driven ports.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn ToolRunner>,
    folder_ids: Box<dyn FolderIdSource>,
}

impl InitService {
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn ToolRunner>,
        folder_ids: Box<dyn FolderIdSource>,
    ) -> Self {
        Self {
            filesystem,
            runner,
            folder_ids,
        }
    }

    /// Scaffold a complete solution.
    #[instrument(skip_all, fields(solution = %options.solution_name))]
    pub fn init(&mut self, options: &InitOptions) -> CoreResult<InitSummary> {
        let name = validated_solution_name(&options.solution_name)?;
        let output = options.output.clone().unwrap_or_else(|| PathBuf::from("."));
        let root = output.join(name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        info!(root = %root.display(), "scaffolding solution");
        for folder in SCAFFOLD_FOLDERS {
            self.filesystem.create_dir_all(&root.join(folder))?;
        }

        let template = options.project_type.as_deref().unwrap_or(DEFAULT_PROJECT_TYPE);
        self.create_projects(&root, name, template)?;
        let test_project = format!("{name}.Tests");
        self.create_test_project(&root, &test_project)?;
        self.install_tools(&root)?;
        self.write_build_files(&root)?;
        self.configure_hooks(&root)?;
        self.run(&root, "git", &["init"])?;
        self.register_solution_items(&root, name)?;
        self.write_starter_files(&root, name, &test_project)?;

        info!("scaffold completed");
        Ok(InitSummary {
            solution_name: name.to_string(),
            root,
            created_folders: SCAFFOLD_FOLDERS.iter().map(ToString::to_string).collect(),
            test_project,
        })
    }

    fn create_projects(&self, root: &Path, name: &str, template: &str) -> CoreResult<()> {
        self.run(root, "dotnet", &["new", "sln", "--name", name])?;
        self.run(&root.join("src"), "dotnet", &["new", template, "--output", name])?;
        self.run(
            root,
            "dotnet",
            &["sln", "add", &format!("src/{name}"), "--in-root"],
        )?;
        Ok(())
    }

    fn create_test_project(&self, root: &Path, test_project: &str) -> CoreResult<()> {
        self.run(&root.join("tests"), "dotnet", &["new", "nunit", "--name", test_project])?;
        self.run(
            root,
            "dotnet",
            &[
                "sln",
                "add",
                &format!("tests/{test_project}"),
                "--solution-folder",
                "Tests",
            ],
        )?;
        let test_dir = root.join("tests").join(test_project);
        for package in TEST_PACKAGES {
            self.run(&test_dir, "dotnet", &["add", "package", package])?;
        }
        Ok(())
    }

    fn install_tools(&self, root: &Path) -> CoreResult<()> {
        self.run(root, "dotnet", &["new", "tool-manifest"])?;
        self.run(root, "dotnet", &["tool", "install", "csharpier"])?;
        self.run(root, "dotnet", &["tool", "install", "husky"])?;
        self.run(root, "dotnet", &["husky", "install"])?;
        self.run(
            root,
            "dotnet",
            &[
                "husky",
                "add",
                "pre-commit",
                "-c",
                "dotnet husky run --group pre-commit",
            ],
        )?;
        Ok(())
    }

    fn write_build_files(&self, root: &Path) -> CoreResult<()> {
        let targets = directory_build_targets(TOOL_LIST_RELATIVE)?;
        self.filesystem
            .write_file(&root.join("Directory.Build.targets"), &targets)?;
        self.filesystem
            .write_file(&root.join("Directory.Packages.props"), &directory_packages_props())?;
        Ok(())
    }

    /// Replace the hook tool's generated task list with the pre-commit
    /// tasks. The tool must already have written its manifest.
    fn configure_hooks(&self, root: &Path) -> CoreResult<()> {
        let path = root.join(TASK_RUNNER_RELATIVE);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::FileNotFound { path }.into());
        }
        let json = self.filesystem.read_to_string(&path)?;
        let mut runner: TaskRunner =
            serde_json::from_str(&json).map_err(|e| CoreError::Configuration {
                message: format!("task-runner.json could not be parsed: {e}"),
            })?;
        runner.tasks = pre_commit_tasks();
        let json = serde_json::to_string_pretty(&runner).map_err(|e| CoreError::Internal {
            message: format!("task-runner.json could not be serialized: {e}"),
        })?;
        self.filesystem.write_file(&path, &json)?;
        Ok(())
    }

    /// Surface the loose settings files in the IDE via a solution folder.
    fn register_solution_items(&mut self, root: &Path, name: &str) -> CoreResult<()> {
        let sln_path = root.join(format!("{name}.sln"));
        if !self.filesystem.exists(&sln_path) {
            return Err(ApplicationError::FileNotFound { path: sln_path }.into());
        }
        let mut manifest = SolutionManifest::new(self.filesystem.read_to_string(&sln_path)?);
        let folder = SolutionFolder::new(SETTINGS_FOLDER_NAME)
            .with_item("Directory.Build.targets")
            .with_item("Directory.Packages.props")
            .with_item(TASK_RUNNER_RELATIVE)
            .with_item(".gitignore")
            .with_item(".editorconfig");
        manifest.add_folder(&folder, self.folder_ids.as_mut());
        self.filesystem.write_file(&sln_path, manifest.content())?;
        Ok(())
    }

    fn write_starter_files(&self, root: &Path, name: &str, test_project: &str) -> CoreResult<()> {
        self.filesystem
            .write_file(&root.join(".gitignore"), GITIGNORE_TEMPLATE)?;
        self.filesystem
            .write_file(&root.join(".editorconfig"), EDITORCONFIG_TEMPLATE)?;
        self.filesystem
            .write_file(&root.join("README.md"), &readme(name, test_project))?;
        Ok(())
    }

    fn run(&self, dir: &Path, program: &str, args: &[&str]) -> CoreResult<()> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.runner.run(program, &args, dir)?;
        Ok(())
    }
}

fn validated_solution_name(name: &str) -> CoreResult<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApplicationError::InvalidSolutionName {
            name: name.to_string(),
            reason: "name is empty".into(),
        }
        .into());
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
    {
        return Err(ApplicationError::InvalidSolutionName {
            name: name.to_string(),
            reason: format!("character '{bad}' is not allowed"),
        }
        .into());
    }
    Ok(trimmed)
}

fn readme(name: &str, test_project: &str) -> String {
    format!(
        "# {name}\n\n\
         Scaffolded with slnforge.\n\n\
         - `src/{name}` — application project\n\
         - `tests/{test_project}` — test project\n\n\
         Build metadata lives in `Directory.Build.targets`; git hooks are\n\
         managed through `.husky/task-runner.json`.\n"
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
