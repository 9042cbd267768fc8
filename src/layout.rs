use std::path::{Path, PathBuf};

/// A directory to be created, relative to the scaffold root.
///
/// Creation is idempotent and includes every missing ancestor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    pub path: PathBuf,
}
impl DirectorySpec {
    /// Builds the relative path from an ordered sequence of segments.
    pub fn new(segments: &[&str]) -> Self {
        Self {
            path: segments.iter().collect(),
        }
    }
}
/// A file to be written verbatim, relative to the scaffold root.
///
/// Writing always creates or truncates the target, so prior content is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: &'static str,
}
impl FileSpec {
    pub fn new(segments: &[&str], content: &'static str) -> Self {
        Self {
            path: segments.iter().collect(),
            content,
        }
    }
}
/// The ordered directories and files the scaffolder applies.
///
/// Directories always come first: every [`DirectorySpec`] is created before
/// any [`FileSpec`] is written.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub directories: Vec<DirectorySpec>,
    pub files: Vec<FileSpec>,
}
impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directory(mut self, segments: &[&str]) -> Self {
        self.directories.push(DirectorySpec::new(segments));
        self
    }

    pub fn file(mut self, segments: &[&str], content: &'static str) -> Self {
        self.files.push(FileSpec::new(segments, content));
        self
    }

    /// Returns the payload registered for `path`, if any.
    pub fn content_of<P: AsRef<Path>>(&self, path: P) -> Option<&'static str> {
        let path = path.as_ref();

        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.content)
    }
}
