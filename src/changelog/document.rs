//! Changelog document merge and file access

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::error::{HeraldError, Result};

/// Line prefix that marks an existing document as already carrying a header
pub const CHANGELOG_MARKER: &str = "# Changelog";

/// Header written in front of a document that has none
pub const DEFAULT_HEADER: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/),\n\
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

/// Insert a rendered release section at the top of a changelog document.
///
/// A header is present when some line starts with [`CHANGELOG_MARKER`], so
/// `## Changelog` does not count. Without one the default header is synthesised, followed by
/// the new section and then the existing text verbatim. With a marker the
/// header block (everything before the first `## ` line) is kept, the new
/// section goes right below it and the existing releases follow unchanged.
pub fn merge_into_document(existing: &str, section: &str) -> String {
    if !has_header(existing) {
        let mut out = String::with_capacity(DEFAULT_HEADER.len() + section.len() + existing.len());
        out.push_str(DEFAULT_HEADER);
        out.push_str(section);
        out.push_str(existing);
        return out;
    }

    let (header, releases) = split_header(existing);
    debug!(
        header_len = header.len(),
        releases_len = releases.len(),
        "merging into existing changelog"
    );

    let header = header.trim_end();
    let mut out = String::with_capacity(existing.len() + section.len() + 2);
    if !header.is_empty() {
        out.push_str(header);
        out.push_str("\n\n");
    }
    out.push_str(section);
    out.push_str(releases);
    out
}

fn has_header(text: &str) -> bool {
    text.lines().any(|line| line.starts_with(CHANGELOG_MARKER))
}

/// Split at the first line that starts with `## `.
///
/// When there is no release heading the whole text is header.
fn split_header(text: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with("## ") {
            return text.split_at(offset);
        }
        offset += line.len();
    }
    (text, "")
}

/// The changelog file on disk
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChangelogFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current document text; a missing file reads as empty
    pub fn read(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "changelog not found, starting empty");
                Ok(String::new())
            }
            Err(e) => Err(HeraldError::changelog_io(&self.path, e)),
        }
    }

    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content).map_err(|e| HeraldError::changelog_io(&self.path, e))
    }

    /// Merge `section` into the file and write the result back.
    ///
    /// # Returns
    /// * `Ok(String)` - The document as written
    /// * `Err(HeraldError::ChangelogIo)` - Reading or writing failed
    #[instrument(skip(self, section), fields(path = %self.path.display()))]
    pub fn prepend(&self, section: &str) -> Result<String> {
        let existing = self.read()?;
        let merged = merge_into_document(&existing, section);
        self.write(&merged)?;
        info!(bytes = merged.len(), "changelog written");
        Ok(merged)
    }
}
