use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

use crate::domain::{ConventionalCommit, Version};

/// Section order used before any remaining types
pub const SECTION_PRIORITY: [&str; 7] = ["feat", "fix", "docs", "style", "refactor", "test", "chore"];

/// Types that only appear in a changelog when they carry a breaking change
const HIDDEN_UNLESS_BREAKING: [&str; 5] = ["docs", "style", "refactor", "test", "chore"];

/// Everything needed to render one release section
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub version: Version,
    pub date: NaiveDate,
    /// Commits eligible for display, in input order
    pub commits: Vec<ConventionalCommit>,
    pub grouped: BTreeMap<String, Vec<ConventionalCommit>>,
    /// Breaking commits taken from the unfiltered input
    pub breaking_changes: Vec<ConventionalCommit>,
}

/// Commit counts for a release
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseStats {
    pub by_type: BTreeMap<String, usize>,
    pub total: usize,
    pub breaking_changes: usize,
}

impl Release {
    /// Assemble a release dated today.
    pub fn new(version: Version, commits: &[ConventionalCommit], include_all: bool) -> Self {
        let displayed = filter_commits(commits, include_all);
        let grouped = group_commits(&displayed);
        let breaking_changes = commits.iter().filter(|c| c.is_breaking).cloned().collect();

        Release {
            version,
            date: Local::now().date_naive(),
            commits: displayed,
            grouped,
            breaking_changes,
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Type keys in render order: the fixed priority list first, then the
    /// remaining types alphabetically.
    pub fn section_order(&self) -> Vec<&str> {
        let mut order: Vec<&str> = SECTION_PRIORITY
            .iter()
            .copied()
            .filter(|t| self.grouped.contains_key(*t))
            .collect();

        order.extend(
            self.grouped
                .keys()
                .map(String::as_str)
                .filter(|t| !SECTION_PRIORITY.contains(t)),
        );

        order
    }

    pub fn stats(&self) -> ReleaseStats {
        ReleaseStats {
            by_type: self
                .grouped
                .iter()
                .map(|(t, commits)| (t.clone(), commits.len()))
                .collect(),
            total: self.commits.len(),
            breaking_changes: self.breaking_changes.len(),
        }
    }

    /// True when the release has a breaking change, a feature or a fix
    pub fn has_significant_changes(&self) -> bool {
        if !self.breaking_changes.is_empty() {
            return true;
        }

        ["feat", "fix"]
            .iter()
            .any(|t| self.grouped.get(*t).is_some_and(|c| !c.is_empty()))
    }
}

/// Decide which commits are shown.
///
/// With `include_all` everything is kept. Otherwise `feat` and `fix` are
/// always kept, the housekeeping types only when breaking, and any other
/// type is kept so that unrecognised history stays visible.
pub fn filter_commits(commits: &[ConventionalCommit], include_all: bool) -> Vec<ConventionalCommit> {
    commits
        .iter()
        .filter(|c| include_all || is_displayed(c))
        .cloned()
        .collect()
}

fn is_displayed(commit: &ConventionalCommit) -> bool {
    match commit.commit_type.as_str() {
        "feat" | "fix" => true,
        t if HIDDEN_UNLESS_BREAKING.contains(&t) => commit.is_breaking,
        _ => true,
    }
}

/// Partition commits by type, keeping relative order inside each group
pub fn group_commits(commits: &[ConventionalCommit]) -> BTreeMap<String, Vec<ConventionalCommit>> {
    let mut grouped: BTreeMap<String, Vec<ConventionalCommit>> = BTreeMap::new();
    for commit in commits {
        grouped
            .entry(commit.commit_type.clone())
            .or_default()
            .push(commit.clone());
    }
    grouped
}
