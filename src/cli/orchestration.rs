//! Main workflow orchestration logic
//!
//! Wires the release pipeline end to end: tags and commits come from a
//! [`Repository`], flow through classification, bump resolution and
//! changelog assembly, and the rendered section is optionally merged into
//! the changelog file. CLI parsing stays in `main.rs`, so the workflow can be
//! driven programmatically and tested against a mock repository.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::analyzer::{next_prerelease, VersionAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::changelog::{ChangelogFile, ChangelogGenerator, Release};
use crate::config::Config;
use crate::conventional::CommitClassifier;
use crate::domain::{BumpLevel, ConventionalCommit, Version};
use crate::git::Repository;

/// What the run is for; decides whether the changelog gets written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowMode {
    /// Report the next version only
    Preview,
    /// Write the changelog whenever there are new commits
    Changelog,
    /// Write the changelog only when the commits call for a bump
    Release,
}

/// Arguments for the release workflow
///
/// Mirrors the CLI flags in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowArgs {
    pub mode: WorkflowMode,

    /// Bump level forced by the user instead of the resolved one
    pub bump_override: Option<BumpLevel>,

    /// Prerelease label, e.g. "rc"
    pub prerelease: Option<String>,

    /// Preview mode - never write the changelog
    pub dry_run: bool,

    /// Directory relative changelog paths are resolved against
    pub base_dir: PathBuf,
}

impl WorkflowArgs {
    pub fn new(mode: WorkflowMode) -> Self {
        WorkflowArgs {
            mode,
            bump_override: None,
            prerelease: None,
            dry_run: false,
            base_dir: PathBuf::from("."),
        }
    }
}

/// Everything decided about a release before anything is written
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePlan {
    pub latest_tag: Option<String>,
    pub current_version: Version,
    pub next_version: Version,
    /// Tag name the release would use (not created)
    pub tag_name: String,
    /// Level resolved from the commits
    pub resolved_bump: BumpLevel,
    /// Level actually applied, after any override
    pub bump: BumpLevel,
    pub commits: Vec<ConventionalCommit>,
    pub release: Release,
    pub rendered: String,
    pub suggestions: Vec<(String, Version)>,
    pub changelog_path: PathBuf,
    pub warnings: Vec<BoundaryWarning>,
}

impl ReleasePlan {
    /// Whether `mode` writes the changelog for this plan
    pub fn should_write(&self, mode: WorkflowMode) -> bool {
        match mode {
            WorkflowMode::Preview => false,
            WorkflowMode::Changelog => !self.commits.is_empty(),
            WorkflowMode::Release => !self.commits.is_empty() && self.bump != BumpLevel::None,
        }
    }
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    pub plan: ReleasePlan,

    /// Path of the changelog if it was written
    pub written: Option<PathBuf>,
}

/// Compute the release without touching the filesystem.
///
/// 1. Find the latest parseable tag (or fall back to the initial version)
/// 2. Collect and classify the commits since that tag
/// 3. Resolve the bump, apply any override and prerelease label
/// 4. Build and render the release section
///
/// # Arguments
/// * `repo` - Commit and tag source
/// * `config` - Validated configuration
/// * `args` - Workflow arguments
///
/// # Returns
/// * `Ok(ReleasePlan)` - The computed plan with any non-fatal warnings
/// * `Err` - If the repository cannot be read or a version is invalid
#[instrument(skip_all, fields(mode = ?args.mode))]
pub fn plan_release<R: Repository>(repo: &R, config: &Config, args: &WorkflowArgs) -> Result<ReleasePlan> {
    let types = config.commit_types().context("invalid commit type table")?;
    let analyzer = VersionAnalyzer::new(types.clone());
    let classifier = CommitClassifier::new(config.commits.breaking_change_keywords.clone());
    let generator = ChangelogGenerator::new(types, config.changelog.include_all);

    let mut warnings = Vec::new();

    let tags = repo.list_tags().context("failed to list tags")?;
    let (latest, skipped) = analyzer.latest_version(&tags);
    warnings.extend(skipped.into_iter().map(|s| BoundaryWarning::UnparsableTag {
        tag: s.tag,
        reason: s.reason,
    }));

    let (latest_tag, current_version) = match latest {
        Some((tag, version)) => (Some(tag), version),
        None => (
            None,
            analyzer
                .current_version(None, &config.version.initial)
                .context("invalid initial version")?,
        ),
    };

    let records = repo
        .commits_since(latest_tag.as_deref())
        .context("failed to read commits")?;

    if records.is_empty() {
        if let Some(tag) = &latest_tag {
            let head = repo.head_hash()?.unwrap_or_default();
            warnings.push(BoundaryWarning::NoNewCommits {
                latest_tag: tag.clone(),
                current_commit_hash: head,
            });
        }
    }

    let commits = classifier.classify_all(&records);
    let resolved_bump = analyzer.resolve_bump(&commits);
    let bump = args.bump_override.unwrap_or(resolved_bump);

    if !commits.is_empty() && bump == BumpLevel::None {
        warnings.push(BoundaryWarning::NoReleasableChanges {
            commit_count: commits.len(),
        });
    }

    let next_version = match &args.prerelease {
        Some(label) => next_prerelease(&current_version, bump, label),
        None => current_version.bump(bump),
    };
    let tag_name = next_version.format_tag_name(&config.version.prefix);

    let release = generator.build_release(next_version.clone(), &commits);
    let rendered = generator.render_release(&release);
    let suggestions = analyzer.version_suggestions(&current_version, &commits);

    info!(
        current = %current_version,
        next = %next_version,
        bump = %bump,
        commits = commits.len(),
        "release planned"
    );

    Ok(ReleasePlan {
        latest_tag,
        current_version,
        next_version,
        tag_name,
        resolved_bump,
        bump,
        commits,
        release,
        rendered,
        suggestions,
        changelog_path: args.base_dir.join(&config.changelog.file),
        warnings,
    })
}

/// Merge the planned section into the changelog file
pub fn write_changelog(plan: &ReleasePlan) -> Result<PathBuf> {
    ChangelogFile::new(&plan.changelog_path)
        .prepend(&plan.rendered)
        .with_context(|| format!("failed to update {}", plan.changelog_path.display()))?;
    Ok(plan.changelog_path.clone())
}

/// Main release workflow
///
/// Plans the release and writes the changelog when the mode calls for it
/// and `dry_run` is off.
pub fn run_release_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    args: &WorkflowArgs,
) -> Result<WorkflowResult> {
    let plan = plan_release(repo, config, args)?;

    let written = if !args.dry_run && plan.should_write(args.mode) {
        Some(write_changelog(&plan)?)
    } else {
        None
    };

    Ok(WorkflowResult { plan, written })
}
