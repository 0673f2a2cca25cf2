use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use git_herald::changelog::wrap_preview;
use git_herald::cli::{plan_release, write_changelog, ReleasePlan, WorkflowArgs, WorkflowMode};
use git_herald::config::{self, Config, CONFIG_FILE_NAME};
use git_herald::domain::BumpLevel;
use git_herald::git::Git2Repository;
use git_herald::ui;

#[derive(Parser)]
#[command(
    name = "git-herald",
    version,
    about = "Compute the next version and changelog from conventional commits"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Repository path (defaults to the current directory)")]
    repo: Option<PathBuf>,

    #[arg(long, global = true, help = "Preview what would happen without writing files")]
    dry_run: bool,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default herald.toml
    Init,

    /// Show the next version and every alternative
    Next {
        #[arg(long, value_parser = parse_bump, help = "Force a bump level (major, minor, patch, none)")]
        bump: Option<BumpLevel>,

        #[arg(long, help = "Prerelease label, e.g. rc")]
        pre: Option<String>,
    },

    /// Update the changelog with the commits since the latest tag
    Changelog,

    /// Prepare a release: changelog entry plus the tag name to create
    Release {
        #[arg(short, long, help = "Skip confirmation prompts")]
        yes: bool,

        #[arg(long, value_parser = parse_bump, help = "Force a bump level (major, minor, patch, none)")]
        bump: Option<BumpLevel>,

        #[arg(long, help = "Prerelease label, e.g. rc")]
        pre: Option<String>,
    },
}

fn parse_bump(value: &str) -> std::result::Result<BumpLevel, String> {
    BumpLevel::parse(value)
        .ok_or_else(|| format!("'{}' is not one of major, minor, patch, none", value))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let base_dir = args.repo.clone().unwrap_or_else(|| PathBuf::from("."));

    let (mode, bump_override, prerelease, yes) = match args.command {
        Command::Init => return init(args.config, &base_dir),
        Command::Next { bump, pre } => (WorkflowMode::Preview, bump, pre, false),
        Command::Changelog => (WorkflowMode::Changelog, None, None, false),
        Command::Release { yes, bump, pre } => (WorkflowMode::Release, bump, pre, yes),
    };

    let config = load_config(args.config.as_deref(), args.repo.as_deref())?;
    let repo = Git2Repository::open(&base_dir)
        .with_context(|| format!("not a git repository: {}", base_dir.display()))?;

    let workflow_args = WorkflowArgs {
        mode,
        bump_override,
        prerelease,
        dry_run: args.dry_run,
        base_dir,
    };

    let plan = plan_release(&repo, &config, &workflow_args)?;
    for warning in &plan.warnings {
        ui::display_boundary_warning(warning);
    }

    match mode {
        WorkflowMode::Preview => show_next(&plan),
        WorkflowMode::Changelog => update_changelog(&plan, &workflow_args),
        WorkflowMode::Release => prepare_release(&plan, &workflow_args, yes),
    }
}

fn init(config_path: Option<PathBuf>, base_dir: &Path) -> Result<()> {
    let path = config_path.unwrap_or_else(|| base_dir.join(CONFIG_FILE_NAME));
    config::init_config(&path).with_context(|| format!("failed to create {}", path.display()))?;
    ui::display_success(&format!("Created {}", path.display()));
    Ok(())
}

/// A config file inside `--repo` takes precedence over the working directory.
fn load_config(explicit: Option<&Path>, repo: Option<&Path>) -> Result<Config> {
    let in_repo = repo
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists());
    let path = explicit.map(Path::to_path_buf).or(in_repo);

    config::load_config(path.as_deref()).context("failed to load configuration")
}

fn show_next(plan: &ReleasePlan) -> Result<()> {
    ui::display_commit_analysis(&plan.commits, plan.latest_tag.as_deref());
    ui::display_proposed_version(&plan.current_version, &plan.next_version, plan.bump);
    ui::display_suggestions(&plan.suggestions);
    Ok(())
}

fn update_changelog(plan: &ReleasePlan, args: &WorkflowArgs) -> Result<()> {
    if !plan.should_write(args.mode) {
        ui::display_status("No new commits, changelog left unchanged");
        return Ok(());
    }

    if args.dry_run {
        ui::display_preview(&wrap_preview(&plan.rendered));
        return Ok(());
    }

    let path = write_changelog(plan)?;
    ui::display_success(&format!("Updated {}", path.display()));
    Ok(())
}

fn prepare_release(plan: &ReleasePlan, args: &WorkflowArgs, yes: bool) -> Result<()> {
    ui::display_commit_analysis(&plan.commits, plan.latest_tag.as_deref());
    ui::display_proposed_version(&plan.current_version, &plan.next_version, plan.bump);

    if !plan.should_write(args.mode) {
        ui::display_status("Nothing to release");
        return Ok(());
    }

    ui::display_status(&ui::format_stats(&plan.release.stats()));
    ui::display_preview(&wrap_preview(&plan.rendered));

    if args.dry_run {
        ui::display_status(&format!("Dry run: would update {}", plan.changelog_path.display()));
        ui::display_tag_instruction(&plan.tag_name);
        return Ok(());
    }

    if !yes && !ui::confirm_action(&format!("Write release {} to the changelog?", plan.tag_name))? {
        println!("Operation cancelled by user.");
        return Ok(());
    }

    let path = write_changelog(plan)?;
    ui::display_success(&format!("Updated {}", path.display()));
    ui::display_tag_instruction(&plan.tag_name);
    Ok(())
}
