use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for git-herald operations
#[derive(Error, Debug)]
pub enum HeraldError {
    #[error("Version string cannot be empty")]
    EmptyVersion,

    #[error("Invalid semantic version: {0}")]
    InvalidVersion(String),

    #[error(
        "Commit type '{commit_type}' has invalid semver level '{level}' (must be: major, minor, patch, or none)"
    )]
    UnknownSemverLevel { commit_type: String, level: String },

    #[error("Changelog I/O failed for '{}': {source}", path.display())]
    ChangelogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-herald
pub type Result<T> = std::result::Result<T, HeraldError>;

impl HeraldError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        HeraldError::Config(msg.into())
    }

    /// Create an invalid-version error for the given input
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        HeraldError::InvalidVersion(msg.into())
    }

    /// Create an unknown-level error for a configured commit type
    pub fn unknown_level(commit_type: impl Into<String>, level: impl Into<String>) -> Self {
        HeraldError::UnknownSemverLevel {
            commit_type: commit_type.into(),
            level: level.into(),
        }
    }

    /// Wrap an I/O failure on the changelog document
    pub fn changelog_io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        HeraldError::ChangelogIo {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeraldError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_empty_and_invalid_are_distinct() {
        let empty = HeraldError::EmptyVersion;
        let invalid = HeraldError::invalid_version("1.2");
        assert_eq!(empty.to_string(), "Version string cannot be empty");
        assert_eq!(invalid.to_string(), "Invalid semantic version: 1.2");
    }

    #[test]
    fn test_unknown_level_names_type_and_level() {
        let err = HeraldError::unknown_level("feat", "huge");
        let msg = err.to_string();
        assert!(msg.contains("'feat'"));
        assert!(msg.contains("'huge'"));
    }

    #[test]
    fn test_changelog_io_keeps_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = HeraldError::changelog_io("CHANGELOG.md", io_err);
        assert!(err.to_string().contains("CHANGELOG.md"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HeraldError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (HeraldError::config("x"), "Configuration error"),
            (HeraldError::invalid_version("x"), "Invalid semantic version"),
            (HeraldError::unknown_level("x", "y"), "Commit type"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
