use crate::error::{BumpError, Result};
use crate::git::{StageOutcome, Stager};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Stages files by running `git add -- <paths>`.
///
/// Paths are passed as separate process arguments, so no shell quoting is involved.
pub struct GitCommandStager {
    program: String,
}

impl GitCommandStager {
    /// Create a stager invoking the given git executable
    pub fn new(program: impl Into<String>) -> Self {
        GitCommandStager {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for GitCommandStager {
    fn default() -> Self {
        Self::new("git")
    }
}

impl Stager for GitCommandStager {
    fn stage(&self, root: &Path, paths: &[PathBuf]) -> Result<StageOutcome> {
        if paths.is_empty() {
            return Ok(StageOutcome::default());
        }

        let output = Command::new(&self.program)
            .arg("add")
            .arg("--")
            .args(paths)
            .current_dir(root)
            .output()
            .map_err(|e| {
                BumpError::staging(format!("Failed to execute {} add: {}", self.program, e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(BumpError::staging(format!(
                "{} add exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr
            )));
        }

        Ok(StageOutcome {
            staged: paths.to_vec(),
            stderr: (!stderr.is_empty()).then_some(stderr),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_program_fails() {
        let dir = TempDir::new().unwrap();
        let stager = GitCommandStager::new("/nonexistent/path/to/git");

        let result = stager.stage(dir.path(), &[dir.path().join("package.json")]);
        assert!(matches!(result, Err(BumpError::Staging(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to execute"));
    }

    #[test]
    fn test_no_paths_is_a_no_op() {
        let stager = GitCommandStager::new("/nonexistent/path/to/git");
        let outcome = stager.stage(Path::new("."), &[]).unwrap();
        assert!(outcome.staged.is_empty());
    }

    #[test]
    fn test_default_program() {
        assert_eq!(GitCommandStager::default().program(), "git");
    }
}
