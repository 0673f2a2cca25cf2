use crate::domain::{BumpLevel, CommitTypes, ConventionalCommit, PreRelease, Version};
use crate::error::Result;
use tracing::debug;

/// Resolve the bump level for a set of classified commits.
///
/// Any breaking commit forces `Major`. Otherwise the result is the highest
/// configured severity among the commits; unknown types contribute `None`,
/// and an empty list resolves to `None`.
pub fn resolve_bump(commits: &[ConventionalCommit], types: &CommitTypes) -> BumpLevel {
    let mut level = BumpLevel::None;

    for commit in commits {
        if commit.is_breaking {
            return BumpLevel::Major;
        }
        level = level.max(types.severity(&commit.commit_type));
    }

    level
}

/// A tag skipped while looking for the latest version
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTag {
    pub tag: String,
    pub reason: String,
}

/// Analyzes classified commits and tags to determine versions
pub struct VersionAnalyzer {
    types: CommitTypes,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(types: CommitTypes) -> Self {
        VersionAnalyzer { types }
    }

    pub fn types(&self) -> &CommitTypes {
        &self.types
    }

    /// Bump level implied by the commits
    pub fn resolve_bump(&self, commits: &[ConventionalCommit]) -> BumpLevel {
        let level = resolve_bump(commits, &self.types);
        debug!(commit_count = commits.len(), level = %level, "resolved bump level");
        level
    }

    /// Apply the resolved level to the current version
    pub fn next_version(&self, current: &Version, commits: &[ConventionalCommit]) -> Version {
        current.bump(self.resolve_bump(commits))
    }

    /// Highest-precedence version among the given tags.
    ///
    /// Unparsable tags are skipped and returned alongside the result. When no
    /// tag parses the first element is `None` and the caller falls back to
    /// the configured initial version.
    pub fn latest_version(&self, tags: &[String]) -> (Option<(String, Version)>, Vec<SkippedTag>) {
        let mut latest: Option<(String, Version)> = None;
        let mut skipped = Vec::new();

        for tag in tags {
            match Version::parse(tag) {
                Ok(version) => {
                    let is_newer = latest
                        .as_ref()
                        .map_or(true, |(_, current)| version.is_greater_than(current));
                    if is_newer {
                        latest = Some((tag.clone(), version));
                    }
                }
                Err(e) => skipped.push(SkippedTag {
                    tag: tag.clone(),
                    reason: e.to_string(),
                }),
            }
        }

        (latest, skipped)
    }

    /// Current version from the latest tag, or the initial version when there is none
    pub fn current_version(&self, latest_tag: Option<&str>, initial: &str) -> Result<Version> {
        match latest_tag {
            Some(tag) => Version::parse(tag),
            None => Version::parse(initial),
        }
    }

    /// The automatically resolved version plus every alternative bump.
    ///
    /// The first entry is labelled `"auto"` and is present only when the
    /// commits call for a bump.
    pub fn version_suggestions(
        &self,
        current: &Version,
        commits: &[ConventionalCommit],
    ) -> Vec<(String, Version)> {
        let auto = self.resolve_bump(commits);
        let mut suggestions = Vec::new();

        if auto != BumpLevel::None {
            suggestions.push(("auto".to_string(), current.bump(auto)));
        }

        for level in [BumpLevel::Major, BumpLevel::Minor, BumpLevel::Patch] {
            suggestions.push((level.to_string(), current.bump(level)));
        }

        suggestions
    }
}

/// Next prerelease for the given label.
///
/// When `current` is already a prerelease with the same label, its iteration
/// is advanced on the same core (`1.1.0-rc.1` -> `1.1.0-rc.2`). Otherwise the
/// core is bumped by `level` (`None` counts as `Patch`, since a prerelease of
/// the current release would sort below it) and the cycle starts at `.1`.
pub fn next_prerelease(current: &Version, level: BumpLevel, label: &str) -> Version {
    if let Ok(existing) = PreRelease::parse(current.prerelease()) {
        if existing.label == label {
            let next = existing.increment_iteration();
            return current.create_prerelease(&next.label, next.iteration_or_zero());
        }
    }

    let level = if level == BumpLevel::None {
        BumpLevel::Patch
    } else {
        level
    };

    current.bump(level).create_prerelease(label, 1)
}
