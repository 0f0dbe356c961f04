//! Create a new Python project.
//!
//! [`run`] checks preconditions, asks the interactive questions, and then
//! executes the fixed scaffolding sequence in [`execute`].

mod config;
mod execute;
mod preflight;
mod remote;
mod steps;


pub use config::{ProjectName, ScaffoldConfig};
pub use execute::{execute, ScaffoldSummary};
pub use preflight::{check, USAGE};
pub use remote::RemoteSettings;
pub use steps::{venv_bin, INITIAL_COMMIT_MESSAGE, MAIN_BRANCH, REQUIREMENTS, REQUIREMENTS_DEV};

use crate::error::Result;
use crate::process::CommandRunner;
use crate::prompt::Prompter;
use crate::tools::ToolAvailability;
use std::path::Path;

/// Full initializer: preconditions, prompts, then the scaffolding steps.
///
/// Nothing is written unless every precondition passes and every question
/// has been answered.
pub fn run(
    name: Option<&str>,
    parent: &Path,
    tools: ToolAvailability,
    year: i32,
    prompter: &mut dyn Prompter,
    runner: &dyn CommandRunner,
) -> Result<ScaffoldSummary> {
    let name = check(&tools, name, parent)?;
    let config = ScaffoldConfig::collect(name, parent, tools, year, prompter)?;
    tracing::debug!(?config, "configuration assembled");
    execute(&config, runner)
}
