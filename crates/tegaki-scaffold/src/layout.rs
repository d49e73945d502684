//! The project layout contract.
//!
//! A fixed list of files and directories every conformant project must have,
//! plus the placeholder contents the setup operation writes. The package
//! directory under `src/` is not listed here; it is discovered dynamically
//! (the first directory containing an `__init__.py`).

/// Kind of filesystem entry an [`Entry`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
}

/// One entry of the layout contract, with a path relative to the project
/// root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Expected entry kind.
    pub kind: EntryKind,
}

impl Entry {
    const fn file(path: &'static str) -> Self {
        Self {
            path,
            kind: EntryKind::File,
        }
    }

    const fn dir(path: &'static str) -> Self {
        Self {
            path,
            kind: EntryKind::Dir,
        }
    }
}

/// Every fixed entry a conformant project must have.
pub const REQUIRED_ENTRIES: &[Entry] = &[
    // CI and issue templates
    Entry::dir(".github"),
    Entry::dir(".github/workflows"),
    Entry::file(".github/workflows/validate-structure.yml"),
    Entry::dir(".github/ISSUE_TEMPLATE"),
    Entry::file(".github/ISSUE_TEMPLATE/BUG_REPORT.md"),
    Entry::file(".github/ISSUE_TEMPLATE/FEATURE_REQUEST.md"),
    // Source tree (the package itself is discovered dynamically)
    Entry::dir("src"),
    // Tests
    Entry::dir("tests"),
    Entry::file("tests/conftest.py"),
    Entry::file("tests/test_module1.py"),
    Entry::dir("tests/integration"),
    Entry::file("tests/integration/__init__.py"),
    Entry::file("tests/integration/test_integration.py"),
    // Documentation
    Entry::dir("docs"),
    Entry::dir("docs/source"),
    Entry::file("docs/source/conf.py"),
    Entry::file("docs/source/index.rst"),
    Entry::dir("docs/build"),
    // Scripts
    Entry::dir("scripts"),
    Entry::file("scripts/validate_structure.py"),
    // Root files
    Entry::file(".gitignore"),
    Entry::file("pyproject.toml"),
    Entry::file("requirements.txt"),
    Entry::file("README.md"),
    Entry::file("CODING_GUIDELINES.md"),
    Entry::file("PROJECT_STRUCTURE.md"),
    Entry::file("LICENSE"),
    Entry::file("setup.cfg"),
];

/// Files every discovered package directory must contain, relative to the
/// package directory.
pub const PACKAGE_ENTRIES: &[Entry] = &[
    Entry::file("module1.py"),
    Entry::dir("subpackage"),
    Entry::file("subpackage/__init__.py"),
    Entry::file("subpackage/module_sub.py"),
];

/// Package name used when the setup operation creates a fresh layout.
pub const DEFAULT_PACKAGE_NAME: &str = "your_package";

/// File that marks a directory under `src/` as the package directory.
pub const PACKAGE_INIT_FILE: &str = "__init__.py";

// Placeholder contents written by setup.

/// Package `__init__.py` placeholder.
pub const PACKAGE_INIT: &str = "# package initialization\n";

/// `module1.py` placeholder.
pub const MODULE1: &str = "# module1.py\n\n\ndef sample_function():\n    \"\"\"Sample function.\"\"\"\n    pass\n";

/// Subpackage `__init__.py` placeholder.
pub const SUBPACKAGE_INIT: &str = "# subpackage initialization\n";

/// `module_sub.py` placeholder.
pub const MODULE_SUB: &str = "# module_sub.py\n\n\ndef sub_function():\n    \"\"\"Sample function in the subpackage.\"\"\"\n    pass\n";

/// `tests/__init__.py` placeholder.
pub const TESTS_INIT: &str = "# tests package initialization\n";

/// `tests/conftest.py` placeholder.
pub const CONFTEST: &str = "# shared pytest fixtures\n";

/// `tests/test_module1.py` placeholder.
pub const TEST_MODULE1: &str =
    "def test_sample_function():\n    assert True\n";

/// `tests/integration/__init__.py` placeholder.
pub const INTEGRATION_INIT: &str = "# integration tests initialization\n";

/// `tests/integration/test_integration.py` placeholder.
pub const TEST_INTEGRATION: &str =
    "def test_integration_sample():\n    assert True\n";

/// `docs/source/conf.py` placeholder.
pub const DOCS_CONF: &str =
    "# Sphinx configuration file\n\nproject = 'Your Project Name'\nextensions = []\n";

/// `docs/source/index.rst` placeholder.
pub const DOCS_INDEX: &str =
    "Your Project Name\n=================\n\nWelcome to the documentation!\n";

/// `scripts/validate_structure.py` placeholder.
pub const VALIDATE_SCRIPT: &str = "#!/usr/bin/env python3\n\"\"\"Validate the project directory structure.\"\"\"\n\n\ndef main():\n    print('Validation script placeholder')\n\n\nif __name__ == '__main__':\n    main()\n";

/// `.gitignore` placeholder.
pub const GITIGNORE: &str = "__pycache__/\n*.py[cod]\n";

/// `pyproject.toml` placeholder.
pub const PYPROJECT: &str = "# pyproject.toml - Build system configuration\n";

/// `requirements.txt` placeholder.
pub const REQUIREMENTS: &str = "# requirements.txt - List your dependencies here\n";

/// `LICENSE` placeholder.
pub const LICENSE: &str = "Your license information here\n";

/// `setup.cfg` placeholder.
pub const SETUP_CFG: &str = "# setup.cfg - Package metadata and configuration\n";
