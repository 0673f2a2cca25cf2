//! Changelog assembly: filtering, grouping, rendering and merging

pub mod document;
pub mod markdown;
pub mod release;

pub use document::{merge_into_document, ChangelogFile, CHANGELOG_MARKER, DEFAULT_HEADER};
pub use markdown::{render_full_document, render_release, wrap_preview};
pub use release::{filter_commits, group_commits, Release, ReleaseStats, SECTION_PRIORITY};

use tracing::{info, instrument};

use crate::domain::{CommitTypes, ConventionalCommit, Version};

/// Builds and renders release sections with one commit type table
#[derive(Debug, Clone)]
pub struct ChangelogGenerator {
    types: CommitTypes,
    include_all: bool,
}

impl ChangelogGenerator {
    pub fn new(types: CommitTypes, include_all: bool) -> Self {
        ChangelogGenerator { types, include_all }
    }

    pub fn types(&self) -> &CommitTypes {
        &self.types
    }

    /// Build the release for `version` from classified commits
    #[instrument(skip(self, version, commits), fields(version = %version, commit_count = commits.len()))]
    pub fn build_release(&self, version: Version, commits: &[ConventionalCommit]) -> Release {
        let release = Release::new(version, commits, self.include_all);
        info!(
            displayed = release.commits.len(),
            sections = release.grouped.len(),
            breaking = release.breaking_changes.len(),
            "release built"
        );
        release
    }

    pub fn render_release(&self, release: &Release) -> String {
        render_release(release, &self.types)
    }

    /// Rendered section wrapped in preview delimiters
    pub fn preview(&self, release: &Release) -> String {
        wrap_preview(&self.render_release(release))
    }

    pub fn render_full_document(&self, releases: &[Release]) -> String {
        render_full_document(releases, &self.types)
    }
}
