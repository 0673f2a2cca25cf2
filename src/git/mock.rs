use crate::domain::CommitRecord;
use crate::error::Result;
use crate::git::Repository;
use std::collections::BTreeMap;

/// Mock repository for testing without actual git operations
///
/// History is linear. A tag remembers how many commits existed when it was
/// added, so `commits_since` returns everything committed after it. Tags
/// are listed in name order, as git lists them.
pub struct MockRepository {
    commits: Vec<CommitRecord>,
    tags: BTreeMap<String, usize>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Append a commit on top of the current history
    pub fn add_commit(&mut self, record: CommitRecord) {
        self.commits.push(record);
    }

    /// Append a commit built from a hash and full message
    pub fn commit(&mut self, hash: impl Into<String>, message: &str) {
        self.add_commit(CommitRecord::new(hash, message));
    }

    /// Tag the current HEAD
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into(), self.commits.len());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let start = match tag {
            Some(name) => *self.tags.get(name).ok_or_else(|| {
                git2::Error::from_str(&format!("reference 'refs/tags/{}' not found", name))
            })?,
            None => 0,
        };

        Ok(self.commits[start..].iter().rev().cloned().collect())
    }

    fn head_hash(&self) -> Result<Option<String>> {
        Ok(self.commits.last().map(|c| c.hash.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_commits_newest_first() {
        let mut repo = MockRepository::new();
        repo.commit("aaa1111", "feat: first");
        repo.commit("bbb2222", "fix: second");

        let commits = repo.commits_since(None).unwrap();
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].subject, "fix: second");
        assert_eq!(repo.head_hash().unwrap(), Some("bbb2222".to_string()));
    }

    #[test]
    fn test_mock_repository_tags() {
        let mut repo = MockRepository::new();
        repo.commit("aaa1111", "feat: first");
        repo.add_tag("v1.0.0");
        repo.commit("bbb2222", "fix: second");

        let commits = repo.commits_since(Some("v1.0.0")).unwrap();
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].hash, "bbb2222");
        assert_eq!(repo.list_tags().unwrap(), vec!["v1.0.0".to_string()]);
    }

    #[test]
    fn test_mock_repository_lists_tags_in_name_order() {
        let mut repo = MockRepository::new();
        repo.commit("aaa1111", "feat: first");
        repo.add_tag("v1.0.0");
        repo.add_tag("1.0.0");
        repo.add_tag("nightly");

        for _ in 0..3 {
            assert_eq!(
                repo.list_tags().unwrap(),
                vec!["1.0.0".to_string(), "nightly".to_string(), "v1.0.0".to_string()]
            );
        }
    }

    #[test]
    fn test_mock_repository_tag_at_head() {
        let mut repo = MockRepository::new();
        repo.commit("aaa1111", "feat: first");
        repo.add_tag("v1.0.0");

        assert!(repo.commits_since(Some("v1.0.0")).unwrap().is_empty());
    }

    #[test]
    fn test_mock_repository_unknown_tag() {
        let repo = MockRepository::new();
        assert!(repo.commits_since(Some("v1.0.0")).is_err());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
        assert_eq!(repo.head_hash().unwrap(), None);
    }
}
