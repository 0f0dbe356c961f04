//! End-to-end scaffolding against a real git binary.
//!
//! git runs for real; python, pip and pylint are answered by the runner so
//! the tests stay offline.

use anyhow::{Context, Result};
use sprout::process::{run_checked, CommandOutput, CommandRunner, SystemRunner};
use sprout::prompt::ScriptedPrompter;
use sprout::scaffold::{self, MAIN_BRANCH};
use sprout::tools::ToolAvailability;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const FROZEN: &str = "black==24.8.0\npylint==3.2.7\npytest==8.3.3\npytest-cov==5.0.0\n";

/// Real git with a fixed identity; canned Python tooling.
struct OfflineRunner;

impl CommandRunner for OfflineRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> sprout::Result<CommandOutput> {
        let tool = Path::new(program)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match tool.as_str() {
            "git" => {
                let mut git_args = vec![
                    "-c",
                    "user.name=Sprout Test",
                    "-c",
                    "user.email=test@example.com",
                    "-c",
                    "commit.gpgsign=false",
                ];
                git_args.extend_from_slice(args);
                SystemRunner.run("git", &git_args, cwd)
            }
            "python3" => {
                fs::create_dir_all(cwd.join("venv").join("bin")).map_err(|e| {
                    sprout::ScaffoldError::io(cwd.join("venv"), e)
                })?;
                Ok(CommandOutput::ok(""))
            }
            "pip" if args.first() == Some(&"freeze") => Ok(CommandOutput::ok(FROZEN)),
            "pylint" => Ok(CommandOutput::ok("[MAIN]\njobs=1\n")),
            _ => Ok(CommandOutput::ok("")),
        }
    }
}

fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let out = run_checked(&SystemRunner, "git", args, dir)
        .with_context(|| format!("git {} failed", args.join(" ")))?;
    Ok(out.trim().to_string())
}

fn scaffold_demo(parent: &Path, license_choice: &str) -> Result<scaffold::ScaffoldSummary> {
    let tools = ToolAvailability::detect_with(|tool| tool != sprout::tools::GH);
    let mut prompter = ScriptedPrompter::new([license_choice]);
    let summary = scaffold::run(Some("demo"), parent, tools, 2026, &mut prompter, &OfflineRunner)
        .context("scaffolding demo failed")?;
    Ok(summary)
}

#[test]
fn test_demo_project_without_gh() -> Result<()> {
    let temp = TempDir::new()?;
    let summary = scaffold_demo(temp.path(), "1")?;
    let dir = temp.path().join("demo");
    assert_eq!(summary.project_dir, dir);
    assert!(summary.remote_url.is_none());

    for file in [
        ".gitignore",
        "requirements.txt",
        "requirements-dev.txt",
        "pytest.ini",
        ".pylintrc",
        ".coveragerc",
        "Makefile",
        "README.md",
    ] {
        assert!(dir.join(file).is_file(), "{file} missing");
    }
    assert!(dir.join("src").is_dir());
    assert!(dir.join("tests").is_dir());
    assert!(dir.join("venv").is_dir());
    assert!(!dir.join(".github").exists());

    assert_eq!(git(&dir, &["rev-list", "--count", "HEAD"])?, "1");
    assert_eq!(git(&dir, &["rev-parse", "--abbrev-ref", "HEAD"])?, MAIN_BRANCH);
    assert_eq!(
        git(&dir, &["log", "-1", "--format=%s"])?,
        scaffold::INITIAL_COMMIT_MESSAGE
    );
    Ok(())
}

#[test]
fn test_commit_tracks_generated_files_but_not_venv() -> Result<()> {
    let temp = TempDir::new()?;
    scaffold_demo(temp.path(), "2")?;
    let dir = temp.path().join("demo");

    let tracked = git(&dir, &["ls-files"])?;
    let tracked: Vec<&str> = tracked.lines().collect();
    for file in [
        ".gitignore",
        "LICENSE",
        "Makefile",
        "README.md",
        "requirements.txt",
        "requirements-dev.txt",
        "src/main.py",
        "tests/test_main.py",
    ] {
        assert!(tracked.contains(&file), "{file} not committed");
    }
    assert!(tracked.iter().all(|f| !f.starts_with("venv/")));

    let status = git(&dir, &["status", "--porcelain"])?;
    assert!(status.is_empty(), "working tree not clean: {status}");
    Ok(())
}

#[test]
fn test_manifests_are_identical() -> Result<()> {
    let temp = TempDir::new()?;
    scaffold_demo(temp.path(), "1")?;
    let dir = temp.path().join("demo");

    let runtime = fs::read_to_string(dir.join("requirements.txt"))?;
    let dev = fs::read_to_string(dir.join("requirements-dev.txt"))?;
    assert_eq!(runtime, FROZEN);
    assert_eq!(runtime, dev);
    Ok(())
}

#[test]
fn test_second_run_with_same_name_fails() -> Result<()> {
    let temp = TempDir::new()?;
    scaffold_demo(temp.path(), "1")?;
    let readme_before = fs::read_to_string(temp.path().join("demo/README.md"))?;

    let err = scaffold_demo(temp.path(), "2").unwrap_err();
    let err = err
        .downcast_ref::<sprout::ScaffoldError>()
        .context("expected a ScaffoldError")?;
    assert!(matches!(err, sprout::ScaffoldError::DirectoryExists { .. }));

    let readme_after = fs::read_to_string(temp.path().join("demo/README.md"))?;
    assert_eq!(readme_before, readme_after);
    Ok(())
}
