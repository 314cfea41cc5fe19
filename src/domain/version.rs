use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a strict `X.Y.Z` version string.
    ///
    /// Each component must be a non-negative decimal integer. No prefix, pre-release
    /// or build metadata is accepted.
    pub fn parse(value: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                value
            )));
        }

        let major = parse_component(parts[0], "major")?;
        let minor = parse_component(parts[1], "minor")?;
        let patch = parse_component(parts[2], "patch")?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Fails only if the incremented component would overflow.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let overflow =
            || BumpError::version(format!("Cannot bump {} of {}: overflow", bump_type, self));

        let bumped = match bump_type {
            VersionBump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        };
        Ok(bumped)
    }
}

fn parse_component(part: &str, name: &str) -> Result<u32> {
    // u32::from_str accepts a leading '+', which is not a valid version digit
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::version(format!(
            "Invalid {} version: '{}'",
            name, part
        )));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(BumpError::version(format!(
            "Invalid {} version: '{}' has a leading zero",
            name, part
        )));
    }
    // Only digits remain, so a parse failure means the value does not fit
    part.parse::<u32>().map_err(|_| {
        BumpError::version(format!("{} version '{}' is out of range", name, part))
    })
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which position of the version triple to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionBump {
    /// Look up a bump mode by its exact lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "major" => Some(VersionBump::Major),
            "minor" => Some(VersionBump::Minor),
            "patch" => Some(VersionBump::Patch),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
