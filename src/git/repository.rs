use crate::error::{BumpError, Result};
use crate::git::{StageOutcome, Stager};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Stages files through libgit2 without spawning a process
pub struct Git2Stager;

impl Git2Stager {
    /// Path of `file` relative to the repository work tree
    fn relative_to_workdir(workdir: &Path, file: &Path) -> Result<PathBuf> {
        // Both sides canonicalized so symlinked temp dirs compare equal
        let workdir = workdir.canonicalize()?;
        let file = file.canonicalize().map_err(|e| BumpError::file(file, e))?;

        file.strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                BumpError::staging(format!(
                    "{} is outside the repository at {}",
                    file.display(),
                    workdir.display()
                ))
            })
    }
}

impl Stager for Git2Stager {
    fn stage(&self, root: &Path, paths: &[PathBuf]) -> Result<StageOutcome> {
        let repo = Repository::discover(root)?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| BumpError::staging("Repository has no working directory"))?
            .to_path_buf();

        let mut index = repo.index()?;
        for path in paths {
            let relative = Self::relative_to_workdir(&workdir, path)?;
            index.add_path(&relative)?;
        }
        index.write()?;

        Ok(StageOutcome {
            staged: paths.to_vec(),
            stderr: None,
        })
    }
}
