//! `slnforge init` — scaffold a new .NET solution.

use slnforge_core::application::{InitOptions, InitService};
use slnforge_core::domain::solution::UuidFolderIds;
use slnforge_adapters::{LocalFilesystem, SystemToolRunner};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Scaffold a new solution in the output directory.
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let name = resolve_name(args.name)?;
    // CLI flag beats config default.
    let target = args.output.or(config.init.output);

    output.header(&format!("Scaffolding solution '{name}'"))?;
    output.info("Running dotnet and git; this can take a moment...")?;

    let mut service = InitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(SystemToolRunner::new()),
        Box::new(UuidFolderIds::default()),
    );

    let summary = service.init(&InitOptions {
        solution_name: name,
        output: target,
        project_type: args.project_type,
    })?;

    output.success(&format!(
        "Solution '{}' created at {}",
        summary.solution_name,
        summary.root.display(),
    ))?;
    output.print("Created folders:")?;
    for folder in &summary.created_folders {
        output.list_item(folder)?;
    }
    output.print(&format!("Test project: {}", summary.test_project))?;
    output.info("Pre-commit hooks are installed; commits will run csharpier and build.")?;

    Ok(())
}

/// Use the positional name, or prompt for one when the terminal allows it.
fn resolve_name(name: Option<String>) -> CliResult<String> {
    if let Some(name) = name {
        return Ok(name);
    }

    #[cfg(feature = "interactive")]
    {
        let entered: String = dialoguer::Input::new()
            .with_prompt("Solution name")
            .interact_text()
            .map_err(|e| match e {
                dialoguer::Error::IO(source) => CliError::IoError {
                    message: "Failed to read solution name from prompt".into(),
                    source,
                },
            })?;
        if entered.trim().is_empty() {
            return Err(CliError::Cancelled);
        }
        Ok(entered)
    }

    #[cfg(not(feature = "interactive"))]
    {
        Err(CliError::InvalidInput {
            message: "a solution name is required (usage: slnforge init <NAME>)".into(),
        })
    }
}
