use crate::error::{BumpError, Result};
use crate::sync::{FileSet, FileTarget, PatternKind};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "releasebump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasebump.toml";

/// Represents the complete configuration for release-bump.
///
/// Names the canonical source file, the manifests kept in sync with it, and how the
/// rewritten files are staged.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Directory relative target paths are resolved against
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default = "default_source")]
    pub source: SourceConfig,

    #[serde(default = "default_manifests")]
    pub manifests: Vec<FileTarget>,

    #[serde(default)]
    pub staging: StagingConfig,
}

/// The canonical source file. Its kind defaults to `source`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SourceConfig {
    pub path: PathBuf,

    #[serde(default = "default_source_kind")]
    pub kind: PatternKind,
}

fn default_source_kind() -> PatternKind {
    PatternKind::Source
}

/// Returns the default canonical source file.
fn default_source() -> SourceConfig {
    SourceConfig {
        path: PathBuf::from("packages/clarity-js/src/core/version.ts"),
        kind: PatternKind::Source,
    }
}

/// Returns the default list of JSON manifests, in update order.
fn default_manifests() -> Vec<FileTarget> {
    [
        "lerna.json",
        "package.json",
        "packages/clarity-decode/package.json",
        "packages/clarity-devtools/package.json",
        "packages/clarity-devtools/static/manifest.json",
        "packages/clarity-js/package.json",
        "packages/clarity-visualize/package.json",
    ]
    .into_iter()
    .map(|path| FileTarget::new(path, PatternKind::Json))
    .collect()
}

/// Which implementation adds files to the git index
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StagingBackend {
    /// Spawn `git add`
    #[default]
    GitCli,
    /// Update the index in-process through libgit2
    Git2,
}

/// Configuration for the stage-for-commit step.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StagingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default)]
    pub backend: StagingBackend,

    /// Executable used by the `git-cli` backend
    #[serde(default = "default_git_program")]
    pub program: String,
}

fn default_true() -> bool {
    true
}

fn default_git_program() -> String {
    "git".to_string()
}

impl Default for StagingConfig {
    fn default() -> Self {
        StagingConfig {
            enabled: true,
            backend: StagingBackend::default(),
            program: default_git_program(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            root: None,
            source: default_source(),
            manifests: default_manifests(),
            staging: StagingConfig::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text and validates it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| BumpError::config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source.path.as_os_str().is_empty() {
            return Err(BumpError::config("source.path must not be empty"));
        }
        if let Some(index) = self
            .manifests
            .iter()
            .position(|m| m.path.as_os_str().is_empty())
        {
            return Err(BumpError::config(format!(
                "manifests[{}].path must not be empty",
                index
            )));
        }
        Ok(())
    }

    /// Picks the directory targets are resolved against.
    ///
    /// Precedence: explicit override, then the configured `root`, then the current
    /// directory. Relative roots are made absolute against the current directory.
    pub fn resolve_root(&self, root_override: Option<&Path>) -> Result<PathBuf> {
        let cwd = std::env::current_dir()?;
        let root = match root_override.or(self.root.as_deref()) {
            Some(root) => cwd.join(root),
            None => cwd,
        };
        Ok(root)
    }

    /// Builds the absolute file set for a run rooted at `root`.
    pub fn file_set(&self, root: &Path) -> FileSet {
        FileSet {
            source: FileTarget::new(&self.source.path, self.source.kind).resolved(root),
            manifests: self.manifests.iter().map(|m| m.resolved(root)).collect(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasebump.toml` in current directory
/// 3. `.releasebump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Some(PathBuf::from(LOCAL_CONFIG_FILE))
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_FILE))
            .filter(|path| path.exists())
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|e| BumpError::file(&path, e))?;
            Config::from_toml(&content)
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_release_layout() {
        let config = Config::default();
        assert_eq!(
            config.source.path,
            PathBuf::from("packages/clarity-js/src/core/version.ts")
        );
        assert_eq!(config.source.kind, PatternKind::Source);
        assert_eq!(config.manifests.len(), 7);
        assert_eq!(config.manifests[0].path, PathBuf::from("lerna.json"));
        assert!(config
            .manifests
            .iter()
            .all(|m| m.kind == PatternKind::Json));
        assert!(config.staging.enabled);
        assert_eq!(config.staging.backend, StagingBackend::GitCli);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("[staging]\nenabled = false\n").unwrap();
        assert!(!config.staging.enabled);
        assert_eq!(config.staging.program, "git");
        assert_eq!(config.manifests, default_manifests());
    }

    #[test]
    fn test_manifest_kind_defaults_to_json() {
        let config = Config::from_toml(
            r#"
[source]
path = "src/version.rs"

[[manifests]]
path = "package.json"

[[manifests]]
path = "Cargo.toml"
kind = "source"
"#,
        )
        .unwrap();
        assert_eq!(config.source.kind, PatternKind::Source);
        assert_eq!(config.manifests[0].kind, PatternKind::Json);
        assert_eq!(config.manifests[1].kind, PatternKind::Source);
    }

    #[test]
    fn test_empty_source_path_rejected() {
        let err = Config::from_toml("[source]\npath = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("source.path"));
    }

    #[test]
    fn test_unknown_backend_rejected() {
        assert!(Config::from_toml("[staging]\nbackend = \"svn\"\n").is_err());
    }

    #[test]
    fn test_backend_names() {
        let config = Config::from_toml("[staging]\nbackend = \"git2\"\n").unwrap();
        assert_eq!(config.staging.backend, StagingBackend::Git2);
        let config = Config::from_toml("[staging]\nbackend = \"git-cli\"\n").unwrap();
        assert_eq!(config.staging.backend, StagingBackend::GitCli);
    }

    #[test]
    fn test_file_set_resolves_against_root() {
        let config = Config::default();
        let file_set = config.file_set(Path::new("/repo"));
        assert_eq!(
            file_set.source.path,
            PathBuf::from("/repo/packages/clarity-js/src/core/version.ts")
        );
        assert_eq!(file_set.manifests[1].path, PathBuf::from("/repo/package.json"));
    }

    #[test]
    fn test_resolve_root_prefers_override() {
        let config = Config {
            root: Some(PathBuf::from("/configured")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_root(Some(Path::new("/override"))).unwrap(),
            PathBuf::from("/override")
        );
        assert_eq!(
            config.resolve_root(None).unwrap(),
            PathBuf::from("/configured")
        );
    }
}
