//! Layout generation.
//!
//! Creates the project layout with placeholder contents. Existing paths are
//! skipped, never overwritten, and the pre-provisioned set (`.github/`,
//! `CODING_GUIDELINES.md`, `PROJECT_STRUCTURE.md`, `README.md`) is left
//! entirely to the project owner.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::layout::{self, DEFAULT_PACKAGE_NAME};

/// What a setup run did, path by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Paths created by this run.
    pub created: Vec<PathBuf>,
    /// Paths that already existed and were skipped.
    pub skipped: Vec<PathBuf>,
}

/// Create the project layout under `root`.
///
/// # Errors
///
/// Returns an error if a directory or file cannot be created.
pub fn setup(root: &Path) -> io::Result<SetupReport> {
    let mut report = SetupReport::default();

    let package_dir = root.join("src").join(DEFAULT_PACKAGE_NAME);
    let subpackage_dir = package_dir.join("subpackage");

    let dirs = [
        root.join("src"),
        package_dir.clone(),
        subpackage_dir.clone(),
        root.join("tests"),
        root.join("tests/integration"),
        root.join("docs"),
        root.join("docs/source"),
        root.join("docs/build"),
        root.join("scripts"),
    ];

    for dir in dirs {
        create_dir(&dir, &mut report)?;
    }

    let files: [(PathBuf, &str); 17] = [
        (
            package_dir.join(layout::PACKAGE_INIT_FILE),
            layout::PACKAGE_INIT,
        ),
        (package_dir.join("module1.py"), layout::MODULE1),
        (
            subpackage_dir.join(layout::PACKAGE_INIT_FILE),
            layout::SUBPACKAGE_INIT,
        ),
        (subpackage_dir.join("module_sub.py"), layout::MODULE_SUB),
        (root.join("tests/__init__.py"), layout::TESTS_INIT),
        (root.join("tests/conftest.py"), layout::CONFTEST),
        (root.join("tests/test_module1.py"), layout::TEST_MODULE1),
        (
            root.join("tests/integration/__init__.py"),
            layout::INTEGRATION_INIT,
        ),
        (
            root.join("tests/integration/test_integration.py"),
            layout::TEST_INTEGRATION,
        ),
        (root.join("docs/source/conf.py"), layout::DOCS_CONF),
        (root.join("docs/source/index.rst"), layout::DOCS_INDEX),
        (
            root.join("scripts/validate_structure.py"),
            layout::VALIDATE_SCRIPT,
        ),
        (root.join(".gitignore"), layout::GITIGNORE),
        (root.join("pyproject.toml"), layout::PYPROJECT),
        (root.join("requirements.txt"), layout::REQUIREMENTS),
        (root.join("LICENSE"), layout::LICENSE),
        (root.join("setup.cfg"), layout::SETUP_CFG),
    ];

    for (path, content) in files {
        create_file(&path, content, &mut report)?;
    }

    Ok(report)
}

/// Create a directory if it doesn't exist.
fn create_dir(path: &Path, report: &mut SetupReport) -> io::Result<()> {
    if path.exists() {
        debug!("Directory exists: {}", path.display());
        report.skipped.push(path.to_path_buf());
    } else {
        debug!("Creating directory: {}", path.display());
        std::fs::create_dir_all(path)?;
        report.created.push(path.to_path_buf());
    }
    Ok(())
}

/// Create a file with placeholder content if it doesn't exist.
fn create_file(path: &Path, content: &str, report: &mut SetupReport) -> io::Result<()> {
    if path.exists() {
        debug!("File exists: {}", path.display());
        report.skipped.push(path.to_path_buf());
    } else {
        debug!("Creating file: {}", path.display());
        std::fs::write(path, content)?;
        report.created.push(path.to_path_buf());
    }
    Ok(())
}
