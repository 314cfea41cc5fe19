use crate::domain::VersionBump;
use crate::warning::BumpWarning;

/// Outcome of resolving the optional `<flag>=<part>` argument
#[derive(Debug, Clone, PartialEq)]
pub struct BumpResolution {
    pub bump: VersionBump,
    /// Set when the argument was present but could not be honoured
    pub warning: Option<BumpWarning>,
}

impl BumpResolution {
    fn patch() -> Self {
        BumpResolution {
            bump: VersionBump::Patch,
            warning: None,
        }
    }
}

/// Resolve the bump mode from an optional `key=value` argument.
///
/// The value is the text between the first and second `=`. A missing argument
/// resolves to patch silently; a malformed or unrecognized one resolves to patch
/// with a warning.
///
/// # Example
/// ```ignore
/// assert_eq!(resolve_bump_mode(Some("--part=minor")).bump, VersionBump::Minor);
/// assert_eq!(resolve_bump_mode(None).bump, VersionBump::Patch);
/// assert!(resolve_bump_mode(Some("mode=foo")).warning.is_some());
/// ```
pub fn resolve_bump_mode(argument: Option<&str>) -> BumpResolution {
    let Some(argument) = argument else {
        return BumpResolution::patch();
    };

    let Some(value) = argument.split('=').nth(1) else {
        return BumpResolution {
            bump: VersionBump::Patch,
            warning: Some(BumpWarning::MalformedPartArgument {
                argument: argument.to_string(),
            }),
        };
    };

    match VersionBump::from_name(value) {
        Some(bump) => BumpResolution {
            bump,
            warning: None,
        },
        None => BumpResolution {
            bump: VersionBump::Patch,
            warning: Some(BumpWarning::UnrecognizedPart {
                argument: argument.to_string(),
                value: value.to_string(),
            }),
        },
    }
}
