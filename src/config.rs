use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::conventional::default_breaking_change_keywords;
use crate::domain::{BumpLevel, CommitTypeSpec, CommitTypes, Version};
use crate::error::{HeraldError, Result};

/// File name searched for in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "herald.toml";

/// Represents the complete configuration for git-herald.
///
/// Contains version settings, commit type mappings and changelog options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub commits: CommitsConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Version numbering settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    /// Version used when the repository has no parseable tag
    #[serde(default = "default_initial_version")]
    pub initial: String,

    /// Prefix for tag names, e.g. "v" for "v1.0.0"
    #[serde(default = "default_tag_prefix")]
    pub prefix: String,
}

fn default_initial_version() -> String {
    "0.1.0".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            initial: default_initial_version(),
            prefix: default_tag_prefix(),
        }
    }
}

/// One entry of the commit type table as written in the config file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitTypeConfig {
    pub title: String,
    /// One of "major", "minor", "patch", "none"
    pub semver: String,
}

impl CommitTypeConfig {
    fn new(title: &str, semver: &str) -> Self {
        CommitTypeConfig {
            title: title.to_string(),
            semver: semver.to_string(),
        }
    }
}

/// Returns the default commit type table.
fn default_commit_types() -> BTreeMap<String, CommitTypeConfig> {
    CommitTypes::conventional()
        .iter()
        .map(|(name, spec)| {
            (
                name.to_string(),
                CommitTypeConfig::new(&spec.title, spec.severity.as_str()),
            )
        })
        .collect()
}

/// Configuration for conventional commit analysis.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CommitsConfig {
    #[serde(default = "default_breaking_change_keywords")]
    pub breaking_change_keywords: Vec<String>,

    #[serde(default = "default_commit_types")]
    pub types: BTreeMap<String, CommitTypeConfig>,
}

impl Default for CommitsConfig {
    fn default() -> Self {
        CommitsConfig {
            breaking_change_keywords: default_breaking_change_keywords(),
            types: default_commit_types(),
        }
    }
}

/// Configuration for changelog generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_file")]
    pub file: PathBuf,

    /// Show every commit type instead of only feat/fix (plus breaking changes)
    #[serde(default)]
    pub include_all: bool,
}

fn default_changelog_file() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            file: default_changelog_file(),
            include_all: false,
        }
    }
}

impl Config {
    /// Check the configuration for values the release pipeline cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.version.initial.is_empty() {
            return Err(HeraldError::config("version.initial cannot be empty"));
        }
        Version::parse(&self.version.initial)?;

        if self.changelog.file.as_os_str().is_empty() {
            return Err(HeraldError::config("changelog.file cannot be empty"));
        }

        if self
            .commits
            .breaking_change_keywords
            .iter()
            .any(|keyword| keyword.trim().is_empty())
        {
            return Err(HeraldError::config(
                "commits.breaking_change_keywords cannot contain empty keywords",
            ));
        }

        self.commit_types()?;
        Ok(())
    }

    /// Validated commit type table
    pub fn commit_types(&self) -> Result<CommitTypes> {
        if self.commits.types.is_empty() {
            return Err(HeraldError::config("commits.types cannot be empty"));
        }

        let mut types = CommitTypes::new();
        for (name, entry) in &self.commits.types {
            if entry.title.is_empty() {
                return Err(HeraldError::config(format!(
                    "commit type '{}' must have a title",
                    name
                )));
            }

            let severity = BumpLevel::parse(&entry.semver)
                .ok_or_else(|| HeraldError::unknown_level(name, &entry.semver))?;

            types.insert(name.clone(), CommitTypeSpec::new(entry.title.clone(), severity));
        }

        Ok(types)
    }
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str) -> Result<Config> {
    let config: Config = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `herald.toml` in current directory
/// 3. `herald/herald.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated, or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(),
    };

    let Some(path) = path else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "loading configuration");
    let text = fs::read_to_string(&path)?;
    parse_config(&text)
}

fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("herald").join(CONFIG_FILE_NAME);
    user.exists().then_some(user)
}

/// Write the default configuration to `path`, refusing to overwrite.
pub fn init_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(HeraldError::config(format!(
            "config file {} already exists",
            path.display()
        )));
    }

    let body = toml::to_string_pretty(&Config::default())?;
    let content = format!(
        "# git-herald configuration\n# semver levels: major, minor, patch, none\n\n{}",
        body
    );
    fs::write(path, content)?;
    Ok(())
}
