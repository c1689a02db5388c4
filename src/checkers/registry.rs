//! Finding, verifying, and loading checkers by name.
//!
//! A checker is looked up in each source in turn: the checker directory
//! given on the command line, then the built-in catalog. The first source
//! that holds the unit wins, so a directory can replace a built-in checker.

use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::external::ExternalUnit;
use super::{builtin, Checker};
use crate::error::{GraderError, Result};

const UNIT_PREFIX: &str = "check_";
const UNIT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Map a checker name to its unit identifier.
///
/// `MatchFileFragment`, `check_MatchFileFragment`, and
/// `check_MatchFileFragment.yaml` all resolve to `check_MatchFileFragment`.
pub fn resolve_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_extension = UNIT_EXTENSIONS
        .iter()
        .find_map(|ext| trimmed.strip_suffix(&format!(".{}", ext)))
        .unwrap_or(trimmed);
    let bare = without_extension
        .strip_prefix(UNIT_PREFIX)
        .unwrap_or(without_extension);
    format!("{}{}", UNIT_PREFIX, bare)
}

fn bare_name(unit: &str) -> &str {
    unit.strip_prefix(UNIT_PREFIX).unwrap_or(unit)
}

/// A place checkers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Directory(PathBuf),
    Builtin,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Directory(dir) => write!(f, "{}", dir.display()),
            Source::Builtin => write!(f, "built-in checkers"),
        }
    }
}

impl Source {
    /// The document defining a unit in a checker directory.
    fn unit_path(dir: &Path, unit: &str) -> Option<PathBuf> {
        UNIT_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}.{}", unit, ext)))
            .find(|path| path.is_file())
    }

    fn holds(&self, unit: &str) -> bool {
        match self {
            Source::Directory(dir) => Self::unit_path(dir, unit).is_some(),
            Source::Builtin => builtin::contains(bare_name(unit)),
        }
    }
}

/// A resolved unit that has not been verified yet.
pub enum PluginUnit {
    Builtin(Box<dyn Checker>),
    External(ExternalUnit),
}

impl fmt::Debug for PluginUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginUnit::Builtin(checker) => f.debug_tuple("Builtin").field(&checker.name()).finish(),
            PluginUnit::External(unit) => f.debug_tuple("External").field(&unit.path).finish(),
        }
    }
}

impl PluginUnit {
    pub fn name(&self) -> &str {
        match self {
            PluginUnit::Builtin(checker) => checker.name(),
            PluginUnit::External(unit) => unit.checker_name(),
        }
    }

    /// Verify the checker contract and hand out a runnable checker.
    pub fn verify(self) -> Result<Box<dyn Checker>> {
        match self {
            PluginUnit::Builtin(checker) => Ok(checker),
            PluginUnit::External(unit) => Ok(Box::new(unit.verify()?)),
        }
    }
}

/// Return true if the unit satisfies the checker contract.
///
/// Built-in checkers satisfy it by implementing [`Checker`].
pub fn verify_contract(unit: &PluginUnit) -> bool {
    match unit {
        PluginUnit::Builtin(_) => true,
        PluginUnit::External(unit) => unit.contract_problems().is_empty(),
    }
}

/// Result of looking a unit up.
#[derive(Debug)]
pub enum Discovery {
    Found(PluginUnit),
    NotFound,
    LoadFailed(String),
}

/// The sources checkers are found in, in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerRegistry {
    sources: Vec<Source>,
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::locate(None)
    }
}

impl CheckerRegistry {
    /// Combine an optional checker directory with the built-in catalog.
    pub fn locate(checker_dir: Option<&Path>) -> Self {
        let mut sources = Vec::new();
        if let Some(dir) = checker_dir {
            if !dir.is_dir() {
                tracing::warn!(dir = %dir.display(), "checker directory does not exist");
            }
            sources.push(Source::Directory(dir.to_path_buf()));
        }
        sources.push(Source::Builtin);
        tracing::debug!(?sources, "located checker sources");
        Self { sources }
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Return true if any source holds the unit.
    pub fn exists(&self, unit: &str) -> bool {
        self.sources.iter().any(|source| source.holds(unit))
    }

    /// Look a unit up in the first source that holds it.
    pub fn discover(&self, unit: &str) -> Discovery {
        let Some(source) = self.sources.iter().find(|source| source.holds(unit)) else {
            return Discovery::NotFound;
        };
        match source {
            Source::Builtin => match builtin::create(bare_name(unit)) {
                Some(checker) => Discovery::Found(PluginUnit::Builtin(checker)),
                None => Discovery::NotFound,
            },
            Source::Directory(dir) => {
                let Some(path) = Source::unit_path(dir, unit) else {
                    return Discovery::NotFound;
                };
                match ExternalUnit::parse_file(unit, &path) {
                    Ok(external) => Discovery::Found(PluginUnit::External(external)),
                    Err(e) => Discovery::LoadFailed(e.to_string()),
                }
            }
        }
    }

    /// Load a unit, failing if it cannot be found or read.
    pub fn load(&self, unit: &str) -> Result<PluginUnit> {
        match self.discover(unit) {
            Discovery::Found(found) => {
                tracing::debug!(unit, found = ?found, "loaded checker");
                Ok(found)
            }
            Discovery::NotFound => Err(self.not_found(unit)),
            Discovery::LoadFailed(reason) => Err(GraderError::CheckerLoad {
                name: unit.to_string(),
                reason,
            }),
        }
    }

    /// The error for a unit that no source holds, listing what is available.
    pub fn not_found(&self, unit: &str) -> GraderError {
        GraderError::CheckerNotFound {
            name: unit.to_string(),
            searched: self
                .sources
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            known: self.available(),
        }
    }

    /// Names of every checker visible through the sources, sorted.
    pub fn available(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for source in &self.sources {
            match source {
                Source::Builtin => names.extend(builtin::names().into_iter().map(String::from)),
                Source::Directory(dir) => {
                    for entry in WalkDir::new(dir)
                        .max_depth(1)
                        .into_iter()
                        .filter_map(|e| e.ok())
                        .filter(|e| e.file_type().is_file())
                    {
                        let path = entry.path();
                        let is_unit = path
                            .extension()
                            .and_then(|ext| ext.to_str())
                            .is_some_and(|ext| UNIT_EXTENSIONS.contains(&ext));
                        let stem = path.file_stem().and_then(|stem| stem.to_str());
                        if let (true, Some(stem)) = (is_unit, stem) {
                            if let Some(name) = stem.strip_prefix(UNIT_PREFIX) {
                                names.push(name.to_string());
                            }
                        }
                    }
                }
            }
        }
        names.sort();
        names.dedup();
        names
    }
}
