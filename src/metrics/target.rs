//! What a measurement runs against: a file on disk or supplied content.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// A file in a directory, supplied content, or both.
///
/// Exactly one source is measured. An existing file is read when no content
/// was supplied; supplied content is used when no file exists. Any other
/// combination measures nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckTarget<'a> {
    path: Option<PathBuf>,
    content: Option<&'a str>,
}

impl<'a> CheckTarget<'a> {
    /// Target a file name inside a containing directory.
    pub fn file<P: AsRef<Path>>(file: &str, directory: P) -> Self {
        Self {
            path: Some(directory.as_ref().join(file)),
            content: None,
        }
    }

    /// Target supplied content, such as the output of a command.
    pub fn content(content: &'a str) -> Self {
        Self {
            path: None,
            content: Some(content),
        }
    }

    /// Build a target from optional parts, the way checkers receive them.
    pub fn new(file: Option<&str>, directory: Option<&Path>, content: Option<&'a str>) -> Self {
        let path = match (file, directory) {
            (Some(file), Some(directory)) => Some(directory.join(file)),
            (Some(file), None) => Some(PathBuf::from(file)),
            (None, _) => None,
        };
        Self { path, content }
    }

    /// The resolved file path, if a file was named.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True if the named file exists as a regular file.
    pub fn file_exists(&self) -> bool {
        self.path.as_deref().is_some_and(Path::is_file)
    }

    /// The text to measure, or `None` if neither source applies.
    pub fn text(&self) -> Option<Cow<'a, str>> {
        match (self.file_exists(), self.content) {
            (false, Some(content)) => Some(Cow::Borrowed(content)),
            (true, None) => {
                let path = self.path.as_deref()?;
                match std::fs::read(path) {
                    Ok(bytes) => Some(Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "could not read target file");
                        None
                    }
                }
            }
            _ => None,
        }
    }

    /// Apply a measurement to the target's text.
    ///
    /// Returns `None` when there is nothing to measure.
    pub fn measure<T>(&self, f: impl FnOnce(&str) -> T) -> Option<T> {
        self.text().map(|text| f(&text))
    }

    /// Human-readable name of the target for check descriptions.
    pub fn describe(&self) -> String {
        match (&self.path, self.content) {
            (Some(path), _) => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.to_string_lossy().to_string());
                match path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    Some(parent) => format!("file {} in {}", file, parent.display()),
                    None => format!("file {}", file),
                }
            }
            (None, Some(_)) => "supplied content".to_string(),
            (None, None) => "empty target".to_string(),
        }
    }
}
