//! The fixed scaffolding sequence.

use crate::error::Result;
use crate::process::CommandRunner;
use colored::Colorize;
use std::path::PathBuf;

use super::config::ScaffoldConfig;
use super::remote::{create_remote, push_main, write_ci_workflow};
use super::steps::{
    create_project_dir, init_git, initial_commit, scaffold_layout, setup_venv, write_gitignore,
    write_license, write_makefile, write_readme, write_tool_configs,
};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub project_dir: PathBuf,
    /// GitHub URL when a remote repository was created.
    pub remote_url: Option<String>,
}

/// Scaffold the project described by `config`.
///
/// Steps run strictly in order and the first failure aborts the run. Files
/// and directories created before the failure are left in place.
pub fn execute(config: &ScaffoldConfig, runner: &dyn CommandRunner) -> Result<ScaffoldSummary> {
    let dir = config.project_dir();
    let _span = tracing::info_span!("scaffold", project = %config.name).entered();

    print_header(config);

    create_project_dir(&dir)?;
    init_git(runner, &dir)?;
    write_gitignore(&dir)?;
    setup_venv(runner, &dir)?;
    scaffold_layout(&dir)?;
    write_tool_configs(runner, &dir)?;
    write_makefile(&dir)?;
    write_readme(&dir, config.name.as_str(), config.license)?;
    write_license(&dir, config.license, config.year)?;

    // The CI workflow rides in the initial commit and the push waits for
    // step 11: an unborn branch has nothing to push yet.
    let remote_url = match &config.remote {
        Some(settings) => {
            create_remote(runner, settings, &config.name, &dir)?;
            write_ci_workflow(&dir)?;
            Some(settings.url(&config.name))
        }
        None => None,
    };

    initial_commit(runner, &dir)?;

    if remote_url.is_some() {
        push_main(runner, &dir)?;
    }

    let summary = ScaffoldSummary {
        project_dir: dir,
        remote_url,
    };
    print_summary(config, &summary);
    Ok(summary)
}

fn print_header(config: &ScaffoldConfig) {
    println!();
    println!(
        "{} {}",
        "Scaffolding".cyan().bold(),
        config.name.as_str().bold()
    );
    println!("{}", "─".repeat(40).dimmed());
}

fn print_summary(config: &ScaffoldConfig, summary: &ScaffoldSummary) {
    println!();
    println!("{}", "═".repeat(40).dimmed());
    crate::output::success(&format!("Project {} is ready", config.name));

    if let Some(url) = &summary.remote_url {
        println!("  Repository: {}", url.cyan());
    }

    println!();
    println!("{}", "Next steps:".bold());
    println!("  {}", format!("cd {}", config.name).cyan());
    println!("  {}", "source venv/bin/activate".cyan());
    println!("  {}", "make test".cyan());
    println!();
}
