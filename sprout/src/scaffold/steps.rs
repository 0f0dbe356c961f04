//! Individual scaffolding steps. Each one either completes or returns the
//! first error; nothing is rolled back.

use crate::error::{Result, ScaffoldError};
use crate::license::License;
use crate::output;
use crate::process::{run_checked, CommandRunner};
use crate::templates;
use crate::tools::{GIT, PYTHON};
use std::fs;
use std::path::{Path, PathBuf};

pub const MAIN_BRANCH: &str = "main";
pub const VENV_DIR: &str = "venv";
pub const REQUIREMENTS: &str = "requirements.txt";
pub const REQUIREMENTS_DEV: &str = "requirements-dev.txt";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Write `contents` to `path`, creating parent directories.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Path to an executable inside the project's virtual environment.
pub fn venv_bin(project_dir: &Path, tool: &str) -> PathBuf {
    let venv = project_dir.join(VENV_DIR);
    if cfg!(windows) {
        venv.join("Scripts").join(format!("{tool}.exe"))
    } else {
        venv.join("bin").join(tool)
    }
}

pub fn create_project_dir(project_dir: &Path) -> Result<()> {
    fs::create_dir(project_dir).map_err(|e| ScaffoldError::io(project_dir, e))?;
    output::success(&format!("Created directory {}", project_dir.display()));
    Ok(())
}

/// `git init` with `HEAD` pointing at `main` regardless of the user's
/// `init.defaultBranch`.
pub fn init_git(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    output::info("Initializing git repository...");
    run_checked(runner, GIT, &["init"], project_dir)?;
    let head = format!("refs/heads/{MAIN_BRANCH}");
    run_checked(runner, GIT, &["symbolic-ref", "HEAD", &head], project_dir)?;
    output::success("Git repository initialized on branch main");
    Ok(())
}

pub fn write_gitignore(project_dir: &Path) -> Result<()> {
    write_file(&project_dir.join(".gitignore"), templates::GITIGNORE)?;
    output::success(".gitignore created");
    Ok(())
}

/// Create the virtual environment, install the dev tools into it and freeze
/// the result into both manifests.
pub fn setup_venv(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    output::info("Creating virtual environment...");
    run_checked(runner, PYTHON, &["-m", "venv", VENV_DIR], project_dir)?;

    let pip = venv_bin(project_dir, "pip");
    let pip = pip.to_string_lossy();

    output::info(&format!(
        "Installing {}...",
        templates::DEV_PACKAGES.join(", ")
    ));
    let mut install_args = vec!["install"];
    install_args.extend_from_slice(templates::DEV_PACKAGES);
    run_checked(runner, &pip, &install_args, project_dir)?;

    let frozen = run_checked(runner, &pip, &["freeze"], project_dir)?;
    write_file(&project_dir.join(REQUIREMENTS), &frozen)?;
    write_file(&project_dir.join(REQUIREMENTS_DEV), &frozen)?;
    output::success("Development tools installed; requirements written");
    Ok(())
}

pub fn scaffold_layout(project_dir: &Path) -> Result<()> {
    let src = project_dir.join("src");
    let tests = project_dir.join("tests");
    write_file(&src.join("__init__.py"), templates::SRC_INIT)?;
    write_file(&src.join("main.py"), templates::SRC_MAIN)?;
    write_file(&tests.join("__init__.py"), templates::TESTS_INIT)?;
    write_file(&tests.join("test_main.py"), templates::TEST_MAIN)?;
    output::success("Source and test layout created");
    Ok(())
}

/// pytest, pylint and coverage configuration. The pylint rc file is
/// whatever the installed pylint generates.
pub fn write_tool_configs(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    write_file(&project_dir.join("pytest.ini"), templates::PYTEST_INI)?;

    let pylint = venv_bin(project_dir, "pylint");
    let rcfile = run_checked(
        runner,
        &pylint.to_string_lossy(),
        &["--generate-rcfile"],
        project_dir,
    )?;
    write_file(&project_dir.join(".pylintrc"), &rcfile)?;

    write_file(&project_dir.join(".coveragerc"), templates::COVERAGERC)?;
    output::success("pytest.ini, .pylintrc and .coveragerc created");
    Ok(())
}

pub fn write_makefile(project_dir: &Path) -> Result<()> {
    write_file(&project_dir.join("Makefile"), templates::MAKEFILE)?;
    output::success("Makefile created");
    Ok(())
}

pub fn write_readme(project_dir: &Path, project_name: &str, license: License) -> Result<()> {
    write_file(
        &project_dir.join("README.md"),
        &templates::readme(project_name, license),
    )?;
    output::success("README.md created");
    Ok(())
}

pub fn write_license(project_dir: &Path, license: License, year: i32) -> Result<()> {
    write_file(&project_dir.join("LICENSE"), &license.render(year))?;
    output::success(&format!("{license} LICENSE created"));
    Ok(())
}

pub fn initial_commit(runner: &dyn CommandRunner, project_dir: &Path) -> Result<()> {
    output::info("Creating initial commit...");
    run_checked(runner, GIT, &["add", "."], project_dir)?;
    run_checked(
        runner,
        GIT,
        &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        project_dir,
    )?;
    output::success("Initial commit created");
    Ok(())
}
