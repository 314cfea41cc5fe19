use crate::error::{BumpError, Result};
use crate::git::{StageOutcome, Stager};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock stager for testing without a repository
pub struct MockStager {
    calls: Mutex<Vec<Vec<PathBuf>>>,
    failure: Option<String>,
    stderr: Option<String>,
}

impl MockStager {
    /// Create a mock that accepts every call
    pub fn new() -> Self {
        MockStager {
            calls: Mutex::new(Vec::new()),
            failure: None,
            stderr: None,
        }
    }

    /// Create a mock whose every call fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        MockStager {
            failure: Some(reason.into()),
            ..Self::new()
        }
    }

    /// Report `stderr` as diagnostic output on success
    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// Paths passed to each `stage` call, in call order
    pub fn calls(&self) -> Vec<Vec<PathBuf>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for MockStager {
    fn default() -> Self {
        Self::new()
    }
}

impl Stager for MockStager {
    fn stage(&self, _root: &Path, paths: &[PathBuf]) -> Result<StageOutcome> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(paths.to_vec());
        }

        match &self.failure {
            Some(reason) => Err(BumpError::staging(reason.clone())),
            None => Ok(StageOutcome {
                staged: paths.to_vec(),
                stderr: self.stderr.clone(),
            }),
        }
    }
}
