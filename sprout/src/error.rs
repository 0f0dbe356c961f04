//! Error taxonomy for the project initializer.
//!
//! Every failure is fatal except the license-menu fallback, which never
//! produces an error value at all (see [`crate::license::select_license`]).

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("{tool} is required but was not found on PATH")]
    MissingTool { tool: &'static str },

    #[error("missing project name\n\n{usage}")]
    Usage { usage: String },

    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("failed to execute: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed ({}): {stderr}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{0}")]
    Prompt(String),

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
