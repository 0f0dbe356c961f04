//! Validation of user-supplied names before they reach the filesystem or a
//! spawned command line.

use crate::error::{Result, ScaffoldError};

/// Maximum allowed length for a project name.
pub const MAX_NAME_LENGTH: usize = 100;

/// GitHub rejects repository descriptions longer than this.
pub const MAX_DESCRIPTION_LENGTH: usize = 350;

/// Reserved names that cannot be used as a directory (case-insensitive).
const RESERVED_NAMES: &[&str] = &[
    ".", "..", "con", "prn", "aux", "nul", "com1", "com2", "com3", "com4", "com5", "com6", "com7",
    "com8", "com9", "lpt1", "lpt2", "lpt3", "lpt4", "lpt5", "lpt6", "lpt7", "lpt8", "lpt9",
];

/// Validates that a project name is usable as a single directory name and as
/// a GitHub repository name.
///
/// A name is valid if:
/// - It is not empty and at most MAX_NAME_LENGTH characters
/// - It contains only ASCII alphanumerics, `-`, `_` and `.`
/// - It does not start with `-` or `.`
/// - It is not a reserved system name
///
/// # Examples
///
/// ```
/// use sprout::validation::validate_project_name;
///
/// assert!(validate_project_name("demo").is_ok());
/// assert!(validate_project_name("data_tools-2").is_ok());
/// assert!(validate_project_name("").is_err());
/// assert!(validate_project_name("../escape").is_err());
/// ```
pub fn validate_project_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| ScaffoldError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }

    if name.len() > MAX_NAME_LENGTH {
        return Err(invalid(&format!(
            "too long: {} characters (max {MAX_NAME_LENGTH})",
            name.len()
        )));
    }

    if RESERVED_NAMES.contains(&name.to_lowercase().as_str()) {
        return Err(invalid("reserved name"));
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if !valid_chars {
        return Err(invalid(
            "use only alphanumeric characters, dashes (-), underscores (_) and dots (.)",
        ));
    }

    if name.starts_with('-') || name.starts_with('.') {
        return Err(invalid("name cannot start with '-' or '.'"));
    }

    Ok(())
}

/// Validates a repository description.
pub fn validate_description(description: &str) -> Result<()> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(ScaffoldError::Prompt(format!(
            "description too long: {len} characters (max {MAX_DESCRIPTION_LENGTH})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_name_valid() {
        assert!(validate_project_name("demo").is_ok());
        assert!(validate_project_name("my-app").is_ok());
        assert!(validate_project_name("my_app").is_ok());
        assert!(validate_project_name("app.v2").is_ok());
        assert!(validate_project_name("A").is_ok());
    }

    #[test]
    fn test_validate_project_name_empty() {
        let err = validate_project_name("").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_validate_project_name_too_long() {
        let long = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = validate_project_name(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    #[test]
    fn test_validate_project_name_path_components() {
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("a\\b").is_err());
        assert!(validate_project_name("../up").is_err());
        assert!(validate_project_name("my app").is_err());
    }

    #[test]
    fn test_validate_project_name_leading_chars() {
        assert!(validate_project_name("-rf").is_err());
        assert!(validate_project_name(".hidden").is_err());
    }

    #[test]
    fn test_validate_project_name_reserved() {
        assert!(validate_project_name(".").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name("CON").is_err());
        assert!(validate_project_name("nul").is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("").is_ok());
        assert!(validate_description("A tiny tool").is_ok());
        assert!(validate_description(&"x".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }
}
