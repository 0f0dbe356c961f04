//! Fixed file contents written into a new project.

use crate::license::License;

pub const GITIGNORE: &str = "\
# Byte-compiled / optimized files
__pycache__/
*.py[cod]
*$py.class

# Build artifacts
build/
dist/
*.egg-info/
.eggs/

# Virtual environments
venv/
.venv/
env/

# Test and coverage reports
.pytest_cache/
.coverage
.coverage.*
htmlcov/
coverage.xml

# Editors and OS metadata
.vscode/
.idea/
*.swp
.DS_Store

# Logs
*.log
";

/// Development tools installed into the virtual environment.
pub const DEV_PACKAGES: &[&str] = &["pytest", "pytest-cov", "pylint", "black"];

pub const SRC_INIT: &str = "";

pub const SRC_MAIN: &str = "\
\"\"\"Main module.\"\"\"


def hello():
    \"\"\"Return a greeting.\"\"\"
    return \"Hello, World!\"
";

pub const TESTS_INIT: &str = "";

pub const TEST_MAIN: &str = "\
\"\"\"Tests for the main module.\"\"\"

from src.main import hello


def test_hello():
    assert hello() == \"Hello, World!\"
";

pub const PYTEST_INI: &str = "\
[pytest]
minversion = 6.0
addopts = -ra -q --cov=src --cov-report=term-missing
testpaths = tests
";

pub const COVERAGERC: &str = "\
[run]
source = src
branch = True
";

/// Task runner recipe. Recipe lines must be indented with tabs.
pub const MAKEFILE: &str = "\
.PHONY: venv install test lint format

venv:
\tpython3 -m venv venv

install:
\tvenv/bin/pip install -r requirements-dev.txt

test:
\tvenv/bin/pytest

lint:
\tvenv/bin/pylint src tests

format:
\tvenv/bin/black src tests
";

/// Python versions exercised by the CI matrix.
pub const CI_PYTHON_VERSIONS: [&str; 4] = ["3.9", "3.10", "3.11", "3.12"];

pub fn readme(project_name: &str, license: License) -> String {
    format!(
        "# {project_name}

[![CI](https://github.com/USERNAME/{project_name}/actions/workflows/ci.yml/badge.svg)](https://github.com/USERNAME/{project_name}/actions)
[![Coverage](https://img.shields.io/badge/coverage-100%25-brightgreen.svg)](https://github.com/USERNAME/{project_name})
[![License: {badge}](https://img.shields.io/badge/license-{badge}-blue.svg)](LICENSE)

A short description of {project_name}.

## Setup

```bash
python3 -m venv venv
source venv/bin/activate
pip install -r requirements-dev.txt
```

## Usage

```bash
make test     # run the test suite with coverage
make lint     # run pylint
make format   # format the code with black
```

## Project layout

```
{project_name}/
├── src/        # application code
├── tests/      # test suite
├── Makefile
└── README.md
```

## License

This project is licensed under the {license} license. See [LICENSE](LICENSE).

## Contact

Your Name - your.email@example.com
",
        badge = license.name().replace('-', "--"),
    )
}

pub fn ci_workflow() -> String {
    let versions = CI_PYTHON_VERSIONS
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "name: CI

on:
  push:
    branches: [main]
  pull_request:
    branches: [main]

jobs:
  test:
    runs-on: ubuntu-latest
    strategy:
      matrix:
        python-version: [{versions}]

    steps:
      - uses: actions/checkout@v4
      - name: Set up Python ${{{{ matrix.python-version }}}}
        uses: actions/setup-python@v5
        with:
          python-version: ${{{{ matrix.python-version }}}}
      - name: Install dependencies
        run: |
          python -m pip install --upgrade pip
          pip install -r requirements-dev.txt
      - name: Lint
        run: pylint src tests
      - name: Test
        run: pytest
      - name: Check formatting
        run: black --check src tests
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makefile_targets_use_tabs() {
        for target in ["venv:", "install:", "test:", "lint:", "format:"] {
            let idx = MAKEFILE.find(target).unwrap_or_else(|| panic!("{target} missing"));
            let recipe = MAKEFILE[idx..].lines().nth(1).unwrap();
            assert!(recipe.starts_with('\t'), "{target} recipe not tab-indented");
        }
    }

    #[test]
    fn test_readme_interpolates_name_and_license() {
        let readme = readme("demo", License::Apache2);
        assert!(readme.starts_with("# demo\n"));
        assert!(readme.contains("licensed under the Apache-2.0 license"));
        assert!(readme.contains("license-Apache--2.0-blue"));
        assert!(readme.contains("your.email@example.com"));
    }

    #[test]
    fn test_ci_workflow_matrix_and_steps() {
        let wf = ci_workflow();
        assert!(wf.contains("python-version: [\"3.9\", \"3.10\", \"3.11\", \"3.12\"]"));
        assert!(wf.contains("${{ matrix.python-version }}"));
        assert!(wf.contains("branches: [main]"));
        for step in ["actions/checkout", "setup-python", "pip install", "pylint", "pytest", "black --check"] {
            assert!(wf.contains(step), "missing step {step}");
        }
    }

    #[test]
    fn test_gitignore_covers_venv_and_coverage() {
        for pattern in ["venv/", ".coverage", "htmlcov/", "*.log", ".idea/", "build/"] {
            assert!(GITIGNORE.lines().any(|l| l == pattern), "missing {pattern}");
        }
    }
}
