//! Planned files and disk writes.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;

/// A single file the layout planner has decided to write.
///
/// The planner produces these in write order; it never touches the disk
/// itself. Collision checking happens before planning (see [`exists`]), so
/// writing always overwrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    dir: PathBuf,
    file_name: String,
    content: String,
}

impl PlannedFile {
    pub fn new(
        dir: impl Into<PathBuf>,
        file_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
            content: content.into(),
        }
    }

    /// The directory the file will be written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file name, including extension.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The full destination path.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Replace the content, e.g. with its formatted form.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Write the file, creating intermediate directories as needed.
    pub fn write(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path(), &self.content)?;
        Ok(())
    }
}

/// Check whether a file or folder named `candidate` already occupies `dir`.
///
/// Consulted by the caller before planning; the planner itself assumes the
/// path is free.
pub fn exists(dir: &Path, candidate: &str) -> bool {
    dir.join(candidate).exists()
}
