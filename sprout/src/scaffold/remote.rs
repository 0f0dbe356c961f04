//! Optional GitHub repository and CI workflow setup.

use crate::error::{Result, ScaffoldError};
use crate::output;
use crate::process::{run_checked, CommandRunner};
use crate::prompt::{ask_yes_no, Prompter};
use crate::templates;
use crate::tools::{GH, GIT};
use crate::validation::validate_description;
use std::path::{Path, PathBuf};

use super::config::ProjectName;
use super::steps::write_file;

pub const REMOTE_NAME: &str = "origin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSettings {
    pub owner: String,
    pub description: String,
    pub private: bool,
}

impl RemoteSettings {
    pub fn slug(&self, name: &ProjectName) -> String {
        format!("{}/{name}", self.owner)
    }

    pub fn url(&self, name: &ProjectName) -> String {
        format!("https://github.com/{}", self.slug(name))
    }
}

/// Ask for owner, description and visibility.
pub fn collect_remote_settings(prompter: &mut dyn Prompter) -> Result<RemoteSettings> {
    let owner = prompter.ask("GitHub username:")?;
    if owner.is_empty() {
        return Err(ScaffoldError::Prompt(
            "GitHub username cannot be empty".to_string(),
        ));
    }

    let description = prompter.ask("Repository description:")?;
    validate_description(&description)?;

    let private = ask_yes_no(prompter, "Make the repository private?")?;

    Ok(RemoteSettings {
        owner,
        description,
        private,
    })
}

/// Create the GitHub repository and register it as `origin`.
///
/// Nothing is pushed here; the branch has no commits yet.
pub fn create_remote(
    runner: &dyn CommandRunner,
    settings: &RemoteSettings,
    name: &ProjectName,
    project_dir: &Path,
) -> Result<()> {
    let slug = settings.slug(name);
    output::info(&format!("Creating GitHub repository {slug}..."));

    let visibility = if settings.private {
        "--private"
    } else {
        "--public"
    };
    run_checked(
        runner,
        GH,
        &[
            "repo",
            "create",
            &slug,
            visibility,
            "--description",
            &settings.description,
            "--source",
            ".",
            "--remote",
            REMOTE_NAME,
        ],
        project_dir,
    )?;

    output::success(&format!("Created {}", settings.url(name)));
    Ok(())
}

/// Write `.github/workflows/ci.yml`.
pub fn write_ci_workflow(project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(".github").join("workflows").join("ci.yml");
    write_file(&path, &templates::ci_workflow())?;
    output::success("CI workflow written to .github/workflows/ci.yml");
    Ok(path)
}

/// Push `main` and set it to track `origin/main`.
pub fn push_main(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    output::info("Pushing to GitHub...");
    run_checked(
        runner,
        GIT,
        &["push", "-u", REMOTE_NAME, super::steps::MAIN_BRANCH],
        project_dir,
    )?;
    output::success("Pushed main to origin");
    Ok(())
}
