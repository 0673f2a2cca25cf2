use crate::domain::BumpLevel;
use crate::error::{HeraldError, Result};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Semantic versioning 2.0.0 grammar, without a prefix
static SEMVER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<major>0|[1-9][0-9]*)\.(?P<minor>0|[1-9][0-9]*)\.(?P<patch>0|[1-9][0-9]*)(?:-(?P<pre>(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<build>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("Invalid regex")
});

/// Semantic version value.
///
/// `prerelease` and `build` keep their leading `-` / `+` so rendering is a
/// plain concatenation. `raw` is the text this value was parsed from, or the
/// rendered form for values derived through a bump or prerelease operation.
/// Every transform returns a new `Version`; nothing is mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    build: String,
    prefix: String,
    raw: String,
}

impl Version {
    /// Create a plain `major.minor.patch` version with no prefix
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version::assemble(major, minor, patch, String::new(), String::new(), String::new())
    }

    fn assemble(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: String,
        build: String,
        prefix: String,
    ) -> Self {
        let mut version = Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            prefix,
            raw: String::new(),
        };
        version.raw = version.render();
        version
    }

    /// Parse a version such as `1.2.3`, `v1.2.3-rc.1` or `v1.2.3-rc.1+build5`.
    ///
    /// Only a lowercase `v` is recognized as a prefix. Everything after it
    /// must be a complete semantic version (three numeric components,
    /// optional prerelease and build metadata). A core component too large
    /// for `u64` reads as zero.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HeraldError::EmptyVersion);
        }

        let (prefix, rest) = match text.strip_prefix('v') {
            Some(rest) => ("v", rest),
            None => ("", text),
        };

        let caps = SEMVER_PATTERN
            .captures(rest)
            .ok_or_else(|| HeraldError::invalid_version(text))?;

        let component = |name: &str| caps[name].parse::<u64>().unwrap_or(0);
        let prerelease = caps
            .name("pre")
            .map(|m| format!("-{}", m.as_str()))
            .unwrap_or_default();
        let build = caps
            .name("build")
            .map(|m| format!("+{}", m.as_str()))
            .unwrap_or_default();

        Ok(Version {
            major: component("major"),
            minor: component("minor"),
            patch: component("patch"),
            prerelease,
            build,
            prefix: prefix.to_string(),
            raw: text.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease suffix including the leading `-`, or empty
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Build metadata including the leading `+`, or empty
    pub fn build(&self) -> &str {
        &self.build
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Apply a bump level.
    ///
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    /// - **None**: unchanged
    ///
    /// Prerelease and build metadata are cleared on every real bump. The
    /// incremented component saturates at `u64::MAX`.
    pub fn bump(&self, level: BumpLevel) -> Self {
        let (major, minor, patch) = match level {
            BumpLevel::None => return self.clone(),
            BumpLevel::Major => (self.major.saturating_add(1), 0, 0),
            BumpLevel::Minor => (self.major, self.minor.saturating_add(1), 0),
            BumpLevel::Patch => (self.major, self.minor, self.patch.saturating_add(1)),
        };

        Version::assemble(
            major,
            minor,
            patch,
            String::new(),
            String::new(),
            self.prefix.clone(),
        )
    }

    /// Attach a prerelease label, keeping the core, build and prefix.
    ///
    /// Iteration `0` yields `-label`, anything else `-label.N`.
    pub fn create_prerelease(&self, label: &str, iteration: u64) -> Self {
        let prerelease = if iteration > 0 {
            format!("-{}.{}", label, iteration)
        } else {
            format!("-{}", label)
        };

        Version::assemble(
            self.major,
            self.minor,
            self.patch,
            prerelease,
            self.build.clone(),
            self.prefix.clone(),
        )
    }

    /// Semantic-versioning precedence. Build metadata never participates.
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| compare_prerelease(&self.prerelease, &other.prerelease))
    }

    pub fn is_greater_than(&self, other: &Version) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// Render including the stored prefix
    pub fn render(&self) -> String {
        format!("{}{}", self.prefix, self.render_without_prefix())
    }

    pub fn render_without_prefix(&self) -> String {
        format!(
            "{}.{}.{}{}{}",
            self.major, self.minor, self.patch, self.prerelease, self.build
        )
    }

    /// Tag name for this version. A non-empty configured prefix replaces
    /// whatever prefix the version carries.
    pub fn format_tag_name(&self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.render()
        } else {
            format!("{}{}", prefix, self.render_without_prefix())
        }
    }
}

fn compare_prerelease(a: &str, b: &str) -> Ordering {
    let a = a.strip_prefix('-').unwrap_or(a);
    let b = b.strip_prefix('-').unwrap_or(b);

    match (semver::Prerelease::new(a), semver::Prerelease::new(b)) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        // labels built through create_prerelease may fall outside the grammar
        _ => match (a.is_empty(), b.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => a.cmp(b),
        },
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Version {
    type Err = HeraldError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
