//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user interaction.
//! `format_*` functions build strings and are testable; `display_*` print them.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::changelog::ReleaseStats;
use crate::domain::{BumpLevel, ConventionalCommit, Version};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The boundary warning to display
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Numbered commit list, marking breaking commits.
///
/// # Arguments
/// * `commits` - Classified commits, in display order
pub fn format_commit_list(commits: &[ConventionalCommit]) -> String {
    let mut out = String::new();
    for (i, commit) in commits.iter().enumerate() {
        out.push_str(&format!("{}. ", i + 1));
        if let Some(scope) = &commit.scope {
            out.push_str(&format!("{}: ", scope));
        }
        out.push_str(&commit.description);
        if commit.is_breaking {
            out.push_str(" ⚠");
        }
        out.push('\n');
    }
    out
}

/// Display commit analysis: how many commits and the first ten of them.
pub fn display_commit_analysis(commits: &[ConventionalCommit], latest_tag: Option<&str>) {
    match latest_tag {
        Some(tag) => println!("\n{}", style(format!("Commits since {}:", tag)).bold()),
        None => println!("\n{}", style("Commits in history:").bold()),
    }

    let shown = commits.len().min(10);
    print!("{}", indent(&format_commit_list(&commits[..shown])));

    if commits.len() > shown {
        println!("  ... and {} more commits", commits.len() - shown);
    }
}

fn indent(text: &str) -> String {
    text.lines().map(|l| format!("  {}\n", l)).collect()
}

/// Display the proposed version change.
///
/// # Arguments
/// * `current` - Current version (from the latest tag or the initial version)
/// * `next` - Version the release would get
/// * `bump` - Level that produced `next`
pub fn display_proposed_version(current: &Version, next: &Version, bump: BumpLevel) {
    println!("\n{}", style("Proposed Version:").bold());
    println!("  Bump: {}", style(bump).cyan());
    println!("  From: {}", style(current).red());
    println!("  To:   {}", style(next).green());
}

/// One line per suggestion, e.g. `  auto   1.3.0`
pub fn format_suggestions(suggestions: &[(String, Version)]) -> String {
    suggestions
        .iter()
        .map(|(label, version)| format!("  {:<6} {}\n", label, version))
        .collect()
}

pub fn display_suggestions(suggestions: &[(String, Version)]) {
    println!("\n{}", style("All possible versions:").bold());
    print!("{}", format_suggestions(suggestions));
}

/// Short summary of release statistics
pub fn format_stats(stats: &ReleaseStats) -> String {
    let mut parts: Vec<String> = stats
        .by_type
        .iter()
        .map(|(commit_type, count)| format!("{} {}", count, commit_type))
        .collect();
    parts.push(format!("{} breaking", stats.breaking_changes));
    format!("{} commit(s) in changelog: {}", stats.total, parts.join(", "))
}

/// Show the changelog section that would be written.
pub fn display_preview(preview: &str) {
    println!();
    print!("{}", style(preview).dim());
}

/// Display the tag a release would use and how to create it.
///
/// Tags are never created by this tool.
pub fn display_tag_instruction(tag: &str) {
    println!(
        "\n{} To tag this release, run:\n  {}",
        style("→").yellow(),
        style(format!("git tag {}", tag)).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventional::CommitClassifier;
    use crate::domain::CommitRecord;
    use std::collections::BTreeMap;

    #[test]
    fn test_format_commit_list() {
        let commits = CommitClassifier::default().classify_all(&[
            CommitRecord::new("1", "feat(ui): add button"),
            CommitRecord::new("2", "fix!: drop flag"),
        ]);
        assert_eq!(
            format_commit_list(&commits),
            "1. ui: add button\n2. fix!: drop flag ⚠\n"
        );
    }

    #[test]
    fn test_format_suggestions() {
        let suggestions = vec![
            ("auto".to_string(), Version::new(1, 1, 0)),
            ("major".to_string(), Version::new(2, 0, 0)),
        ];
        assert_eq!(
            format_suggestions(&suggestions),
            "  auto   1.1.0\n  major  2.0.0\n"
        );
    }

    #[test]
    fn test_format_stats() {
        let mut by_type = BTreeMap::new();
        by_type.insert("feat".to_string(), 2);
        by_type.insert("fix".to_string(), 1);
        let stats = ReleaseStats {
            by_type,
            total: 3,
            breaking_changes: 1,
        };
        assert_eq!(
            format_stats(&stats),
            "3 commit(s) in changelog: 2 feat, 1 fix, 1 breaking"
        );
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
    }
}
