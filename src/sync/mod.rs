//! Reading and rewriting version strings in project files
//!
//! The canonical source file is the ground truth for the current version.
//! Manifests are rewritten to follow it. Every target is rewritten in full,
//! one at a time, with no rollback if a later file fails.

pub mod pattern;

pub use pattern::PatternKind;

use crate::error::{BumpError, Result};
use crate::ui;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A file holding a version string, and how to find it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTarget {
    pub path: PathBuf,
    #[serde(default)]
    pub kind: PatternKind,
}

impl FileTarget {
    pub fn new(path: impl Into<PathBuf>, kind: PatternKind) -> Self {
        FileTarget {
            path: path.into(),
            kind,
        }
    }

    /// Resolve a relative path against `root`; absolute paths are kept.
    pub fn resolved(&self, root: &Path) -> Self {
        FileTarget {
            path: root.join(&self.path),
            kind: self.kind,
        }
    }
}

/// The canonical source file plus its ordered manifests, with absolute paths
#[derive(Debug, Clone, PartialEq)]
pub struct FileSet {
    pub source: FileTarget,
    pub manifests: Vec<FileTarget>,
}

impl FileSet {
    /// Source first, then manifests in configured order
    pub fn targets(&self) -> impl Iterator<Item = &FileTarget> {
        std::iter::once(&self.source).chain(self.manifests.iter())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.targets().map(|t| t.path.clone()).collect()
    }
}

/// Result of rewriting one file
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub kind: PatternKind,
    /// The value that was replaced, `None` if the pattern was absent
    pub previous: Option<String>,
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| BumpError::file(path, e))
}

/// Reads the current version string from the canonical source file.
///
/// # Returns
/// * `Ok(String)` - The raw version value, not yet validated
/// * `Err` - If the file cannot be read or holds no version of the target's kind
pub fn read_current_version(target: &FileTarget) -> Result<String> {
    let content = read_file(&target.path)?;

    match target.kind.find_version(&content) {
        Some(version) => Ok(version.to_string()),
        None => Err(BumpError::pattern(format!(
            "Version format is invalid: no {} version found in {}",
            target.kind,
            target.path.display()
        ))),
    }
}

/// Rewrites the first version value in a single file.
///
/// The whole file is written back even when the pattern is absent.
pub fn update_file(target: &FileTarget, new_version: &str) -> Result<FileUpdate> {
    let content = read_file(&target.path)?;

    let (updated, previous) = match target.kind.replace_version(&content, new_version) {
        Some((updated, previous)) => (updated, Some(previous)),
        None => (content, None),
    };

    fs::write(&target.path, updated).map_err(|e| BumpError::file(&target.path, e))?;

    Ok(FileUpdate {
        path: target.path.clone(),
        kind: target.kind,
        previous,
    })
}

/// Rewrites every file in the set with `new_version`, source first.
///
/// Stops at the first failure; files already written keep the new version.
pub fn sync_files(file_set: &FileSet, new_version: &str) -> Result<Vec<FileUpdate>> {
    let mut updates = Vec::with_capacity(file_set.manifests.len() + 1);

    for target in file_set.targets() {
        ui::display_status(&format!("Updating {}...", target.path.display()));
        updates.push(update_file(target, new_version)?);
    }

    Ok(updates)
}
