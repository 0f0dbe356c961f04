//! Detection of the external tools sprout shells out to.

use crate::error::{Result, ScaffoldError};

pub const GIT: &str = "git";
pub const PYTHON: &str = "python3";
pub const PIP: &str = "pip3";
pub const GH: &str = "gh";

/// Which tools were found on PATH at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolAvailability {
    pub git: bool,
    pub python: bool,
    pub pip: bool,
    /// GitHub CLI. Optional; gates remote repository setup.
    pub gh: bool,
}

impl ToolAvailability {
    /// Probe PATH with `which`.
    pub fn detect() -> Self {
        Self::detect_with(|tool| which::which(tool).is_ok())
    }

    pub fn detect_with(probe: impl Fn(&str) -> bool) -> Self {
        let availability = Self {
            git: probe(GIT),
            python: probe(PYTHON),
            pip: probe(PIP),
            gh: probe(GH),
        };
        tracing::debug!(?availability, "detected tools");
        availability
    }

    /// Fail with the first missing required tool, in git, python, pip order.
    pub fn require(&self) -> Result<()> {
        let required = [(GIT, self.git), (PYTHON, self.python), (PIP, self.pip)];
        match required.into_iter().find(|(_, present)| !present) {
            Some((tool, _)) => Err(ScaffoldError::MissingTool { tool }),
            None => Ok(()),
        }
    }
}
