//! Markdown rendering of release sections

use std::fmt::Write;

use super::document::DEFAULT_HEADER;
use super::release::Release;
use crate::domain::{CommitTypes, ConventionalCommit};

/// Render one release section.
///
/// Layout:
/// ```text
/// ## [v1.2.0] - 2024-03-01
///
/// ### ⚠ BREAKING CHANGES
///
/// * remove legacy API (**api**)
///   legacy API removed
///
/// ### Features
///
/// * **auth:** add login ([abc1234])
/// ```
pub fn render_release(release: &Release, types: &CommitTypes) -> String {
    let mut out = String::new();

    let _ = write!(
        out,
        "## [{}] - {}\n\n",
        release.version,
        release.date.format("%Y-%m-%d")
    );

    if !release.breaking_changes.is_empty() {
        out.push_str("### ⚠ BREAKING CHANGES\n\n");
        for commit in &release.breaking_changes {
            render_breaking(&mut out, commit);
        }
        out.push('\n');
    }

    for commit_type in release.section_order() {
        let Some(commits) = release.grouped.get(commit_type) else {
            continue;
        };

        let _ = write!(out, "### {}\n\n", types.title(commit_type));
        for commit in commits {
            render_entry(&mut out, commit);
        }
        out.push('\n');
    }

    out
}

fn render_breaking(out: &mut String, commit: &ConventionalCommit) {
    out.push_str("* ");
    out.push_str(&commit.description);
    if let Some(scope) = &commit.scope {
        let _ = write!(out, " (**{}**)", scope);
    }
    out.push('\n');

    for detail in &commit.breaking_changes {
        let _ = writeln!(out, "  {}", detail);
    }
}

fn render_entry(out: &mut String, commit: &ConventionalCommit) {
    out.push_str("* ");
    if let Some(scope) = &commit.scope {
        let _ = write!(out, "**{}:** ", scope);
    }
    out.push_str(&commit.description);
    if let Some(short) = commit.source.short_hash() {
        let _ = write!(out, " ([{}])", short);
    }
    out.push('\n');
}

/// Rendered section wrapped in preview delimiters
pub fn wrap_preview(rendered: &str) -> String {
    format!(
        "=== CHANGELOG PREVIEW ===\n\n{}\n=== END PREVIEW ===\n",
        rendered
    )
}

/// A complete changelog document built from scratch, newest release first
pub fn render_full_document(releases: &[Release], types: &CommitTypes) -> String {
    let mut out = String::from(DEFAULT_HEADER);
    for release in releases {
        out.push_str(&render_release(release, types));
    }
    out
}
