//! Layout validation.
//!
//! Checks every entry of the layout contract against a project root,
//! aggregating one diagnostic per missing path before delivering a single
//! pass/fail verdict.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::layout::{self, Entry, EntryKind, PACKAGE_ENTRIES, REQUIRED_ENTRIES};

/// A missing layout entry, with its path relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Missing {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// What kind of entry was expected.
    pub kind: EntryKind,
}

/// The aggregated result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Entries that were expected but not found.
    pub missing: Vec<Missing>,
    /// Whether a package directory (one containing `__init__.py`) was found
    /// under `src/`. Only meaningful when `src/` itself exists.
    pub package_found: bool,
}

impl Report {
    /// True when the layout is fully conformant.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.package_found
    }

    /// Human-readable diagnostics, one line per problem.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.missing.len() + 1);
        if !self.package_found {
            lines.push(
                "Error: No package directory found in src (directory with __init__.py)."
                    .to_string(),
            );
        }
        for missing in &self.missing {
            let kind = match missing.kind {
                EntryKind::File => "file",
                EntryKind::Dir => "directory",
            };
            lines.push(format!(
                "Error: Expected {kind} '{}' not found.",
                missing.path.display()
            ));
        }
        lines
    }
}

/// Validate a project root against the layout contract.
///
/// All checks run to completion; nothing short-circuits, so the report
/// names every missing path at once.
#[must_use]
pub fn validate(root: &Path) -> Report {
    let mut missing = Vec::new();

    for entry in REQUIRED_ENTRIES {
        check(root, entry, &mut missing);
    }

    // The package directory is discovered, not fixed: the first directory
    // under src/ containing an __init__.py.
    let src_dir = root.join("src");
    let mut package_found = true;
    if src_dir.is_dir() {
        match find_package_dir(&src_dir) {
            Some(package_dir) => {
                debug!("Found package directory {}", package_dir.display());
                let rel = package_dir
                    .strip_prefix(root)
                    .unwrap_or(&package_dir)
                    .to_path_buf();
                for entry in PACKAGE_ENTRIES {
                    let full = package_dir.join(entry.path);
                    if !exists_as(&full, entry.kind) {
                        missing.push(Missing {
                            path: rel.join(entry.path),
                            kind: entry.kind,
                        });
                    }
                }
            }
            None => package_found = false,
        }
    }

    Report {
        missing,
        package_found,
    }
}

/// Check one fixed entry, recording it when absent.
fn check(root: &Path, entry: &Entry, missing: &mut Vec<Missing>) {
    let full = root.join(entry.path);
    if !exists_as(&full, entry.kind) {
        missing.push(Missing {
            path: PathBuf::from(entry.path),
            kind: entry.kind,
        });
    }
}

fn exists_as(path: &Path, kind: EntryKind) -> bool {
    match kind {
        EntryKind::File => path.is_file(),
        EntryKind::Dir => path.is_dir(),
    }
}

/// Find the first directory under `src/` that contains an `__init__.py`.
///
/// Directory order is made deterministic by sorting names.
fn find_package_dir(src_dir: &Path) -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = std::fs::read_dir(src_dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();
    candidates.sort();

    candidates
        .into_iter()
        .find(|dir| dir.join(layout::PACKAGE_INIT_FILE).is_file())
}
