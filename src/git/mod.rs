//! Read-only commit and tag source
//!
//! The release pipeline only needs three things from version control: the
//! tag names, the commits made since a tag, and the current HEAD. The
//! [Repository] trait captures exactly that, so the pipeline can run against
//! a real repository or an in-memory one in tests.
//!
//! - [repository::Git2Repository]: backed by the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//!
//! ```rust
//! # use git_herald::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_herald::Result<()> {
//! let tags = repo.list_tags()?;
//! let commits = repo.commits_since(tags.first().map(String::as_str))?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::Result;

/// Read-only view of a repository's history
///
/// Nothing here mutates the repository: no tags are created and no remote
/// is contacted.
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, in no particular order
    /// * `Err` - If there's a Git error
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Get commits reachable from HEAD but not from `tag`
    ///
    /// With `None` the whole history of HEAD is returned. An unborn HEAD
    /// yields an empty list.
    ///
    /// # Arguments
    /// * `tag` - Tag marking the previous release, if any
    ///
    /// # Returns
    /// * `Ok(Vec<CommitRecord>)` - Commits, newest first
    /// * `Err` - If the tag does not exist or there's a Git error
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>>;

    /// Full hash of the HEAD commit, or `None` for an empty repository
    fn head_hash(&self) -> Result<Option<String>>;
}
