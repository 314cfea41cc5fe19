use std::fmt;
use std::path::PathBuf;

/// Non-fatal issues raised during a bump run.
/// These are reported to the user but never change the outcome of the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// Part argument has no `=value` section
    MalformedPartArgument { argument: String },
    /// Part argument names something other than major, minor or patch
    UnrecognizedPart { argument: String, value: String },
    /// Target file does not contain the version pattern; it was rewritten unchanged
    PatternNotFound { path: PathBuf, pattern: String },
    /// Staging command reported an error
    StagingFailed { reason: String },
    /// Staging command succeeded but wrote to stderr
    StagingStderr { output: String },
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::MalformedPartArgument { argument } => {
                write!(
                    f,
                    "Argument '{}' is not of the form <flag>=major|minor|patch, bumping patch",
                    argument
                )
            }
            BumpWarning::UnrecognizedPart { argument, value } => {
                write!(
                    f,
                    "Unrecognized version part '{}' in '{}', bumping patch",
                    value, argument
                )
            }
            BumpWarning::PatternNotFound { path, pattern } => {
                write!(
                    f,
                    "No {} version found in {}; file left unchanged",
                    pattern,
                    path.display()
                )
            }
            BumpWarning::StagingFailed { reason } => {
                write!(f, "Could not stage version files: {}", reason)
            }
            BumpWarning::StagingStderr { output } => {
                write!(f, "Git command error output: {}", output.trim_end())
            }
        }
    }
}
