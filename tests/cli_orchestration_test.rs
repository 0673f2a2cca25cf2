use git_herald::boundary::BoundaryWarning;
use git_herald::cli::orchestration::{
    plan_release, run_release_workflow, WorkflowArgs, WorkflowMode,
};
use git_herald::config::Config;
use git_herald::domain::BumpLevel;
use git_herald::git::MockRepository;
use tempfile::TempDir;

fn repo_with_release() -> MockRepository {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: initial feature");
    repo.add_tag("v1.0.0");
    repo.commit("2222222bbbb", "fix(api): handle timeout");
    repo.commit("3333333cccc", "feat(ui): dark mode");
    repo
}

fn args(mode: WorkflowMode, dir: &TempDir) -> WorkflowArgs {
    WorkflowArgs {
        base_dir: dir.path().to_path_buf(),
        ..WorkflowArgs::new(mode)
    }
}

#[test]
fn test_plan_minor_release() {
    let dir = TempDir::new().unwrap();
    let plan = plan_release(
        &repo_with_release(),
        &Config::default(),
        &args(WorkflowMode::Preview, &dir),
    )
    .unwrap();

    assert_eq!(plan.latest_tag.as_deref(), Some("v1.0.0"));
    assert_eq!(plan.current_version.render(), "v1.0.0");
    assert_eq!(plan.bump, BumpLevel::Minor);
    assert_eq!(plan.next_version.render(), "v1.1.0");
    assert_eq!(plan.tag_name, "v1.1.0");
    assert_eq!(plan.commits.len(), 2);
    assert_eq!(plan.commits[0].description, "dark mode");
    assert!(plan.rendered.contains("## [v1.1.0]"));
    assert!(plan.rendered.contains("* **ui:** dark mode ([3333333])"));
    assert!(plan.warnings.is_empty());
    assert_eq!(plan.suggestions[0].0, "auto");
}

#[test]
fn test_preview_never_writes() {
    let dir = TempDir::new().unwrap();
    let result = run_release_workflow(
        &repo_with_release(),
        &Config::default(),
        &args(WorkflowMode::Preview, &dir),
    )
    .unwrap();

    assert_eq!(result.written, None);
    assert!(!dir.path().join("CHANGELOG.md").exists());
}

#[test]
fn test_changelog_mode_writes_file() {
    let dir = TempDir::new().unwrap();
    let result = run_release_workflow(
        &repo_with_release(),
        &Config::default(),
        &args(WorkflowMode::Changelog, &dir),
    )
    .unwrap();

    let path = dir.path().join("CHANGELOG.md");
    assert_eq!(result.written, Some(path.clone()));

    let text = std::fs::read_to_string(path).unwrap();
    assert!(text.starts_with("# Changelog\n"));
    assert!(text.contains("### Bug Fixes\n\n* **api:** handle timeout ([2222222])"));
}

#[test]
fn test_dry_run_does_not_write() {
    let dir = TempDir::new().unwrap();
    let mut workflow_args = args(WorkflowMode::Release, &dir);
    workflow_args.dry_run = true;

    let result =
        run_release_workflow(&repo_with_release(), &Config::default(), &workflow_args).unwrap();
    assert_eq!(result.written, None);
    assert!(result.plan.should_write(WorkflowMode::Release));
}

#[test]
fn test_release_without_bump_does_not_write() {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: initial");
    repo.add_tag("v1.0.0");
    repo.commit("2222222bbbb", "docs: typo");
    repo.commit("3333333cccc", "chore: deps");

    let dir = TempDir::new().unwrap();
    let result =
        run_release_workflow(&repo, &Config::default(), &args(WorkflowMode::Release, &dir)).unwrap();

    assert_eq!(result.plan.bump, BumpLevel::None);
    assert_eq!(result.plan.next_version, result.plan.current_version);
    assert_eq!(result.written, None);
    assert!(result
        .plan
        .warnings
        .contains(&BoundaryWarning::NoReleasableChanges { commit_count: 2 }));

    // the changelog command still records them
    let result =
        run_release_workflow(&repo, &Config::default(), &args(WorkflowMode::Changelog, &dir))
            .unwrap();
    assert!(result.written.is_some());
}

#[test]
fn test_no_new_commits_warning() {
    let mut repo = MockRepository::new();
    repo.commit("abcdef1234567", "feat: initial");
    repo.add_tag("v1.0.0");

    let dir = TempDir::new().unwrap();
    let result =
        run_release_workflow(&repo, &Config::default(), &args(WorkflowMode::Changelog, &dir))
            .unwrap();

    assert_eq!(result.written, None);
    assert_eq!(
        result.plan.warnings,
        vec![BoundaryWarning::NoNewCommits {
            latest_tag: "v1.0.0".to_string(),
            current_commit_hash: "abcdef1234567".to_string(),
        }]
    );
}

#[test]
fn test_unparsable_tags_are_skipped() {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: one");
    repo.add_tag("nightly");
    repo.add_tag("v0.3.0");
    repo.commit("2222222bbbb", "fix: two");

    let dir = TempDir::new().unwrap();
    let plan =
        plan_release(&repo, &Config::default(), &args(WorkflowMode::Preview, &dir)).unwrap();

    assert_eq!(plan.latest_tag.as_deref(), Some("v0.3.0"));
    assert_eq!(plan.next_version.render(), "v0.3.1");
    assert!(plan
        .warnings
        .iter()
        .any(|w| matches!(w, BoundaryWarning::UnparsableTag { tag, .. } if tag == "nightly")));
}

#[test]
fn test_equal_precedence_tags_pick_first_by_name() {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: one");
    repo.add_tag("v1.0.0");
    repo.add_tag("1.0.0");
    repo.commit("2222222bbbb", "fix: two");

    let dir = TempDir::new().unwrap();
    for _ in 0..3 {
        let plan =
            plan_release(&repo, &Config::default(), &args(WorkflowMode::Preview, &dir)).unwrap();
        assert_eq!(plan.latest_tag.as_deref(), Some("1.0.0"));
        assert_eq!(plan.next_version.render(), "1.0.1");
    }
}

#[test]
fn test_initial_version_without_tags() {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: first");

    let dir = TempDir::new().unwrap();
    let plan =
        plan_release(&repo, &Config::default(), &args(WorkflowMode::Preview, &dir)).unwrap();

    assert_eq!(plan.latest_tag, None);
    assert_eq!(plan.current_version.render(), "0.1.0");
    assert_eq!(plan.next_version.render(), "0.2.0");
    assert_eq!(plan.tag_name, "v0.2.0");
}

#[test]
fn test_bump_override_and_prerelease() {
    let dir = TempDir::new().unwrap();
    let mut workflow_args = args(WorkflowMode::Preview, &dir);
    workflow_args.bump_override = Some(BumpLevel::Major);
    workflow_args.prerelease = Some("rc".to_string());

    let plan = plan_release(&repo_with_release(), &Config::default(), &workflow_args).unwrap();

    assert_eq!(plan.resolved_bump, BumpLevel::Minor);
    assert_eq!(plan.bump, BumpLevel::Major);
    assert_eq!(plan.next_version.render(), "v2.0.0-rc.1");
}

#[test]
fn test_prerelease_cycle_continues() {
    let mut repo = MockRepository::new();
    repo.commit("1111111aaaa", "feat: one");
    repo.add_tag("v1.1.0-rc.1");
    repo.commit("2222222bbbb", "fix: two");

    let dir = TempDir::new().unwrap();
    let mut workflow_args = args(WorkflowMode::Preview, &dir);
    workflow_args.prerelease = Some("rc".to_string());

    let plan = plan_release(&repo, &Config::default(), &workflow_args).unwrap();
    assert_eq!(plan.next_version.render(), "v1.1.0-rc.2");
}

#[test]
fn test_custom_prefix_in_tag_name() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.version.prefix = "release-".to_string();

    let plan =
        plan_release(&repo_with_release(), &config, &args(WorkflowMode::Preview, &dir)).unwrap();
    assert_eq!(plan.tag_name, "release-1.1.0");
}
