use std::fmt;

/// Magnitude of the version increment implied by a set of commits.
///
/// Ordered `None < Patch < Minor < Major`, so the resolved level for a
/// release is simply the maximum over its commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Parse a configured level name (`major`, `minor`, `patch`, `none`),
    /// ignoring case. Returns `None` for anything else.
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "major" => Some(BumpLevel::Major),
            "minor" => Some(BumpLevel::Minor),
            "patch" => Some(BumpLevel::Patch),
            "none" => Some(BumpLevel::None),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order() {
        assert!(BumpLevel::None < BumpLevel::Patch);
        assert!(BumpLevel::Patch < BumpLevel::Minor);
        assert!(BumpLevel::Minor < BumpLevel::Major);
        assert_eq!(BumpLevel::Patch.max(BumpLevel::Minor), BumpLevel::Minor);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(BumpLevel::parse("MAJOR"), Some(BumpLevel::Major));
        assert_eq!(BumpLevel::parse("Minor"), Some(BumpLevel::Minor));
        assert_eq!(BumpLevel::parse("patch"), Some(BumpLevel::Patch));
        assert_eq!(BumpLevel::parse("none"), Some(BumpLevel::None));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(BumpLevel::parse("huge"), None);
        assert_eq!(BumpLevel::parse(""), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for level in [
            BumpLevel::None,
            BumpLevel::Patch,
            BumpLevel::Minor,
            BumpLevel::Major,
        ] {
            assert_eq!(BumpLevel::parse(&level.to_string()), Some(level));
        }
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(BumpLevel::default(), BumpLevel::None);
    }
}
