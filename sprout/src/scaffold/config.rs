//! Immutable configuration assembled before any side effect.

use crate::error::Result;
use crate::license::{select_license, License};
use crate::output;
use crate::prompt::{ask_yes_no, Prompter};
use crate::tools::ToolAvailability;
use crate::validation::validate_project_name;
use std::fmt;
use std::path::{Path, PathBuf};

use super::remote::{collect_remote_settings, RemoteSettings};

/// A validated project name, usable as a directory and repository name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> Result<Self> {
        validate_project_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the initializer needs, fixed before the first write.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub name: ProjectName,
    /// Directory the project directory is created in.
    pub parent: PathBuf,
    pub license: License,
    /// Year stamped into the LICENSE file.
    pub year: i32,
    pub tools: ToolAvailability,
    /// Set only when `gh` is available and the user opted in.
    pub remote: Option<RemoteSettings>,
}

impl ScaffoldConfig {
    /// Ask the interactive questions and fold the answers into a config.
    ///
    /// The remote questions are only asked when `gh` was detected.
    pub fn collect(
        name: ProjectName,
        parent: &Path,
        tools: ToolAvailability,
        year: i32,
        prompter: &mut dyn Prompter,
    ) -> Result<Self> {
        let license = select_license(prompter)?;

        if !tools.gh {
            output::warn("GitHub CLI (gh) not found; skipping remote repository setup");
        }
        let remote = if tools.gh && ask_yes_no(prompter, "Create a GitHub repository?")? {
            Some(collect_remote_settings(prompter)?)
        } else {
            None
        };

        Ok(Self {
            name,
            parent: parent.to_path_buf(),
            license,
            year,
            tools,
            remote,
        })
    }

    pub fn project_dir(&self) -> PathBuf {
        self.parent.join(self.name.as_str())
    }
}
