//! Checks that must pass before anything touches the filesystem.

use crate::error::{Result, ScaffoldError};
use crate::tools::ToolAvailability;
use std::path::Path;

use super::config::ProjectName;

pub const USAGE: &str = "Usage: sprout <PROJECT_NAME>";

/// Run the preconditions in order: required tools, name supplied and
/// valid, target directory absent.
pub fn check(tools: &ToolAvailability, name: Option<&str>, parent: &Path) -> Result<ProjectName> {
    tools.require()?;

    let name = name.ok_or_else(|| ScaffoldError::Usage {
        usage: USAGE.to_string(),
    })?;
    let name = ProjectName::new(name)?;

    let target = parent.join(name.as_str());
    // symlink_metadata so a dangling symlink still counts as taken
    if target.symlink_metadata().is_ok() {
        return Err(ScaffoldError::DirectoryExists { path: target });
    }

    Ok(name)
}
