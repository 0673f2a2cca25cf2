//! Conventional commit classification
//!
//! Turns raw commit records into [`ConventionalCommit`]s. Classification is
//! total: a subject that does not follow `type(scope): description` is kept
//! with the type `"other"` and its full subject as description.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::domain::{CommitRecord, ConventionalCommit};

/// Type assigned to subjects that are not conventional commits
pub const OTHER_TYPE: &str = "other";

/// `type[(scope)]: description`. A `!` before the colon does not match; the
/// breaking marker is detected separately.
static SUBJECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]+)(?:\((?P<scope>[^()]+)\))?: (?P<description>.+)$")
        .expect("Invalid regex")
});

/// Returns the default list of breaking change keywords.
pub fn default_breaking_change_keywords() -> Vec<String> {
    vec!["BREAKING CHANGE".to_string(), "BREAKING-CHANGE".to_string()]
}

/// Classifies commits using a configurable breaking-change keyword set
#[derive(Debug, Clone)]
pub struct CommitClassifier {
    breaking_keywords: Vec<String>,
}

impl CommitClassifier {
    pub fn new(breaking_keywords: Vec<String>) -> Self {
        CommitClassifier { breaking_keywords }
    }

    pub fn breaking_keywords(&self) -> &[String] {
        &self.breaking_keywords
    }

    /// Classify a single commit. Never fails.
    pub fn classify(&self, commit: &CommitRecord) -> ConventionalCommit {
        let (commit_type, scope, description) = match SUBJECT_PATTERN.captures(&commit.subject) {
            Some(caps) => (
                caps["type"].to_string(),
                caps.name("scope").map(|m| m.as_str().to_string()),
                caps["description"].to_string(),
            ),
            None => (OTHER_TYPE.to_string(), None, commit.subject.clone()),
        };

        let full_text = commit.full_text();
        let is_breaking = self.has_breaking_change(&commit.subject, &full_text);
        let breaking_changes = self.extract_breaking_changes(&full_text);

        debug!(
            hash = %commit.hash,
            commit_type = %commit_type,
            is_breaking,
            "classified commit"
        );

        ConventionalCommit {
            commit_type,
            scope,
            description,
            body: commit.body.clone(),
            is_breaking,
            breaking_changes,
            source: commit.clone(),
        }
    }

    /// Classify commits, preserving their order
    pub fn classify_all(&self, commits: &[CommitRecord]) -> Vec<ConventionalCommit> {
        commits.iter().map(|c| self.classify(c)).collect()
    }

    // The `!:` check is a plain substring test over the whole subject, so it
    // also fires when `!:` shows up inside the description.
    fn has_breaking_change(&self, subject: &str, full_text: &str) -> bool {
        if subject.contains("!:") {
            return true;
        }

        self.breaking_keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && full_text.contains(keyword.as_str()))
    }

    fn extract_breaking_changes(&self, full_text: &str) -> Vec<String> {
        let mut descriptions = Vec::new();

        for keyword in &self.breaking_keywords {
            if keyword.is_empty() || !full_text.contains(keyword.as_str()) {
                continue;
            }

            for line in full_text.lines() {
                let Some((_, rest)) = line.split_once(keyword.as_str()) else {
                    continue;
                };

                let rest = rest.trim();
                let rest = rest.strip_prefix(':').unwrap_or(rest).trim();
                if !rest.is_empty() {
                    descriptions.push(rest.to_string());
                }
            }
        }

        descriptions
    }
}

impl Default for CommitClassifier {
    fn default() -> Self {
        CommitClassifier::new(default_breaking_change_keywords())
    }
}
