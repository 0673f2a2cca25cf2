use chrono::{DateTime, Utc};

/// A raw commit as delivered by the commit source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    pub subject: String,
    pub body: String,
    pub author: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

impl CommitRecord {
    /// Build a record from a full commit message.
    ///
    /// The first line becomes the subject; everything after it (minus
    /// surrounding blank lines) becomes the body.
    pub fn new(hash: impl Into<String>, message: &str) -> Self {
        let (subject, body) = match message.split_once('\n') {
            Some((subject, body)) => (subject, body.trim()),
            None => (message, ""),
        };

        CommitRecord {
            hash: hash.into(),
            subject: subject.trim_end().to_string(),
            body: body.to_string(),
            author: String::new(),
            email: String::new(),
            date: Utc::now(),
        }
    }

    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = name.into();
        self.email = email.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Subject and body joined the way breaking-change detection reads them
    pub fn full_text(&self) -> String {
        format!("{}\n{}", self.subject, self.body)
    }

    /// Seven-character hash reference, if the hash is long enough
    pub fn short_hash(&self) -> Option<&str> {
        self.hash.get(..7)
    }
}

/// A commit after conventional-commit classification.
///
/// `commit_type` is never empty: subjects that do not follow the
/// `type(scope): description` shape get the type `"other"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    pub commit_type: String,
    pub scope: Option<String>,
    pub description: String,
    pub body: String,
    pub is_breaking: bool,
    pub breaking_changes: Vec<String>,
    pub source: CommitRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_splits_subject_and_body() {
        let record = CommitRecord::new(
            "abc1234def",
            "feat: add login\n\nLonger text.\n\nBREAKING CHANGE: x\n",
        );
        assert_eq!(record.subject, "feat: add login");
        assert_eq!(record.body, "Longer text.\n\nBREAKING CHANGE: x");
    }

    #[test]
    fn test_record_subject_only() {
        let record = CommitRecord::new("abc", "fix: typo");
        assert_eq!(record.subject, "fix: typo");
        assert!(record.body.is_empty());
        assert_eq!(record.full_text(), "fix: typo\n");
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(CommitRecord::new("abc1234def", "x").short_hash(), Some("abc1234"));
        assert_eq!(CommitRecord::new("abc1234", "x").short_hash(), Some("abc1234"));
        assert_eq!(CommitRecord::new("abc12", "x").short_hash(), None);
    }

    #[test]
    fn test_with_author() {
        let record = CommitRecord::new("abc", "x").with_author("Ada", "ada@example.com");
        assert_eq!(record.author, "Ada");
        assert_eq!(record.email, "ada@example.com");
    }
}
