//! Staging abstraction layer
//!
//! This module provides a trait-based abstraction over adding files to the git
//! index, so the bump workflow can be driven by a real repository or a mock.
//!
//! # Overview
//!
//! The primary abstraction is the [Stager] trait. Implementations:
//!
//! - [command::GitCommandStager]: spawns `git add -- <paths>`
//! - [repository::Git2Stager]: updates the index in-process with the `git2` crate
//! - [mock::MockStager]: records calls, for tests
//!
//! ```rust
//! # use release_bump::git::{MockStager, Stager};
//! # use std::path::{Path, PathBuf};
//! let stager = MockStager::new();
//! let outcome = stager.stage(Path::new("/repo"), &[PathBuf::from("/repo/package.json")])?;
//! assert_eq!(outcome.staged.len(), 1);
//! # Ok::<(), release_bump::BumpError>(())
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommandStager;
pub use mock::MockStager;
pub use repository::Git2Stager;

use crate::config::{StagingBackend, StagingConfig};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// What a successful staging call reports back
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageOutcome {
    /// Files added to the index
    pub staged: Vec<PathBuf>,
    /// Diagnostic output emitted by the staging tool despite succeeding
    pub stderr: Option<String>,
}

/// Adds files to the version-control index.
///
/// ## Error Handling
///
/// Implementations map failures of the underlying tool to
/// [crate::error::BumpError::Staging] or [crate::error::BumpError::Git]. Callers
/// decide whether a failure is fatal; the bump workflow treats it as a warning.
pub trait Stager {
    /// Stage `paths` in the repository containing `root`.
    ///
    /// # Arguments
    /// * `root` - Directory inside the repository; used as working directory
    /// * `paths` - Absolute paths of files to add
    fn stage(&self, root: &Path, paths: &[PathBuf]) -> Result<StageOutcome>;
}

/// Builds the stager selected by the staging configuration.
pub fn stager_for(config: &StagingConfig) -> Box<dyn Stager> {
    match config.backend {
        StagingBackend::GitCli => Box::new(GitCommandStager::new(config.program.clone())),
        StagingBackend::Git2 => Box::new(Git2Stager),
    }
}
