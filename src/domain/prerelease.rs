//! Prerelease suffix handling for release-candidate style cycles
//!
//! A suffix like `-rc.2` is read as a label (`rc`) plus an optional numeric
//! iteration (`2`). See https://semver.org/#spec-item-9

use crate::error::{HeraldError, Result};
use std::fmt;

/// Prerelease label with optional iteration number
///
/// # Examples
/// - "-alpha" -> PreRelease { label: "alpha", iteration: None }
/// - "-rc.3" -> PreRelease { label: "rc", iteration: Some(3) }
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreRelease {
    pub label: String,
    pub iteration: Option<u64>,
}

impl PreRelease {
    pub fn new(label: impl Into<String>, iteration: Option<u64>) -> Self {
        PreRelease {
            label: label.into(),
            iteration,
        }
    }

    /// Parse a prerelease suffix, with or without its leading `-`.
    ///
    /// The label must be non-empty and consist of ASCII alphanumerics and
    /// hyphens. A second dot-separated part, when present, must be numeric.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.strip_prefix('-').unwrap_or(s);
        if s.is_empty() {
            return Err(HeraldError::invalid_version("empty prerelease identifier"));
        }

        let mut parts = s.splitn(2, '.');
        let label = parts.next().unwrap_or_default();

        if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(HeraldError::invalid_version(format!(
                "invalid prerelease label: '{}'",
                label
            )));
        }

        let iteration = match parts.next() {
            Some(n) => Some(n.parse::<u64>().map_err(|_| {
                HeraldError::invalid_version(format!("invalid prerelease iteration: '{}'", n))
            })?),
            None => None,
        };

        Ok(PreRelease {
            label: label.to_string(),
            iteration,
        })
    }

    /// Next iteration of the same label; an unnumbered label becomes `.1`.
    pub fn increment_iteration(&self) -> Self {
        PreRelease {
            label: self.label.clone(),
            iteration: Some(self.iteration.map_or(1, |n| n + 1)),
        }
    }

    /// Iteration as passed to `Version::create_prerelease` (0 means none)
    pub fn iteration_or_zero(&self) -> u64 {
        self.iteration.unwrap_or(0)
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
