use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Both patterns are fixed literals covered by the tests below
static SOURCE_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PatternKind::Source.regex_source()).unwrap());

static JSON_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(PatternKind::Json.regex_source()).unwrap());

/// How a file spells its version field.
///
/// - `source`: a code assignment, `version = "1.2.3"`
/// - `json`: a manifest key, `"version": "1.2.3"`
///
/// Whitespace around `=` and `:` is tolerated. Only the first match in a file is
/// ever read or replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Source,
    #[default]
    Json,
}

impl PatternKind {
    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::Source => "source",
            PatternKind::Json => "json",
        }
    }

    /// Regex with a single capture group around the version value
    pub fn regex_source(&self) -> &'static str {
        match self {
            PatternKind::Source => r#"version\s*=\s*"([^"]+)""#,
            PatternKind::Json => r#""version"\s*:\s*"([^"]+)""#,
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            PatternKind::Source => &SOURCE_VERSION_REGEX,
            PatternKind::Json => &JSON_VERSION_REGEX,
        }
    }

    /// Returns the first version value in `content`, if any.
    pub fn find_version<'a>(&self, content: &'a str) -> Option<&'a str> {
        self.regex()
            .captures(content)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }

    /// Replaces the first version value in `content` with `new_version`.
    ///
    /// Returns the rewritten text and the value it replaced, or `None` when the
    /// pattern does not occur.
    pub fn replace_version(&self, content: &str, new_version: &str) -> Option<(String, String)> {
        let value = self.regex().captures(content)?.get(1)?;

        let mut updated = String::with_capacity(content.len() + new_version.len());
        updated.push_str(&content[..value.start()]);
        updated.push_str(new_version);
        updated.push_str(&content[value.end()..]);

        Some((updated, value.as_str().to_string()))
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
