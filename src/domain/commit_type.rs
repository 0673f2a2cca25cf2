use crate::domain::BumpLevel;
use std::collections::BTreeMap;

/// Display title and bump severity for one commit type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTypeSpec {
    pub title: String,
    pub severity: BumpLevel,
}

impl CommitTypeSpec {
    pub fn new(title: impl Into<String>, severity: BumpLevel) -> Self {
        CommitTypeSpec {
            title: title.into(),
            severity,
        }
    }
}

/// Validated commit type table.
///
/// Lookups never fail: an unconfigured type has severity `None` and a
/// capitalised version of its own name as title.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitTypes {
    entries: BTreeMap<String, CommitTypeSpec>,
}

impl CommitTypes {
    pub fn new() -> Self {
        CommitTypes::default()
    }

    /// The conventional default table: feat=minor, fix=patch, the rest none
    pub fn conventional() -> Self {
        let mut types = CommitTypes::new();
        types.insert("feat", CommitTypeSpec::new("Features", BumpLevel::Minor));
        types.insert("fix", CommitTypeSpec::new("Bug Fixes", BumpLevel::Patch));
        types.insert("docs", CommitTypeSpec::new("Documentation", BumpLevel::None));
        types.insert("style", CommitTypeSpec::new("Styles", BumpLevel::None));
        types.insert("refactor", CommitTypeSpec::new("Code Refactoring", BumpLevel::None));
        types.insert("test", CommitTypeSpec::new("Tests", BumpLevel::None));
        types.insert("chore", CommitTypeSpec::new("Chores", BumpLevel::None));
        types
    }

    pub fn insert(&mut self, commit_type: impl Into<String>, spec: CommitTypeSpec) {
        self.entries.insert(commit_type.into(), spec);
    }

    pub fn get(&self, commit_type: &str) -> Option<&CommitTypeSpec> {
        self.entries.get(commit_type)
    }

    pub fn contains(&self, commit_type: &str) -> bool {
        self.entries.contains_key(commit_type)
    }

    pub fn severity(&self, commit_type: &str) -> BumpLevel {
        self.get(commit_type)
            .map(|spec| spec.severity)
            .unwrap_or(BumpLevel::None)
    }

    pub fn title(&self, commit_type: &str) -> String {
        match self.get(commit_type) {
            Some(spec) => spec.title.clone(),
            None => capitalize(commit_type),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommitTypeSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_table() {
        let types = CommitTypes::conventional();
        assert_eq!(types.len(), 7);
        assert_eq!(types.severity("feat"), BumpLevel::Minor);
        assert_eq!(types.severity("fix"), BumpLevel::Patch);
        assert_eq!(types.severity("docs"), BumpLevel::None);
        assert_eq!(types.title("refactor"), "Code Refactoring");
    }

    #[test]
    fn test_unknown_type_fallbacks() {
        let types = CommitTypes::conventional();
        assert!(!types.contains("perf"));
        assert_eq!(types.severity("perf"), BumpLevel::None);
        assert_eq!(types.title("perf"), "Perf");
        assert_eq!(types.title("other"), "Other");
    }

    #[test]
    fn test_insert_overrides() {
        let mut types = CommitTypes::conventional();
        types.insert("docs", CommitTypeSpec::new("Docs", BumpLevel::Patch));
        assert_eq!(types.severity("docs"), BumpLevel::Patch);
        assert_eq!(types.title("docs"), "Docs");
    }
}
