use crate::domain::CommitRecord;
use crate::error::Result;
use chrono::{DateTime, Utc};
use git2::{ErrorCode, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn to_record(commit: &git2::Commit<'_>) -> CommitRecord {
        let author = commit.author();
        let date = DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0).unwrap_or_default();

        CommitRecord::new(commit.id().to_string(), commit.message().unwrap_or(""))
            .with_author(
                author.name().unwrap_or("unknown"),
                author.email().unwrap_or(""),
            )
            .with_date(date)
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL)?;

        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                debug!("HEAD is unborn, no commits");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        }

        if let Some(tag) = tag {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", tag))?;
            let tagged = reference.peel_to_commit()?;
            revwalk.hide(tagged.id())?;
        }

        let mut commits = Vec::new();
        for oid in revwalk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(Self::to_record(&commit));
        }

        debug!(tag = ?tag, count = commits.len(), "collected commits");
        Ok(commits)
    }

    fn head_hash(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) => Ok(head.target().map(|oid| oid.to_string())),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
