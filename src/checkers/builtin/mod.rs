//! Checkers that ship with gatorgrader.

mod comments;
mod files;
mod matching;
mod writing;

pub use comments::{CountMultipleLineComments, CountSingleLineComments, Language};
pub use files::ConfirmFileExists;
pub use matching::{MatchFileFragment, MatchFileRegex};
pub use writing::{CountFileLines, CountFileParagraphs, CountFileWords, CountParagraphWords};

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Args, Command};
use once_cell::sync::Lazy;

use super::Checker;
use crate::error::{usage_line, GraderError, UsageError};
use crate::metrics::CheckTarget;
use crate::threshold::Threshold;

/// Factory function type for creating checker instances.
pub type CheckerFactory = fn() -> Box<dyn Checker>;

fn factory<C: Checker + Default + 'static>() -> Box<dyn Checker> {
    Box::new(C::default())
}

static CATALOG: Lazy<BTreeMap<&'static str, CheckerFactory>> = Lazy::new(|| {
    let mut catalog: BTreeMap<&'static str, CheckerFactory> = BTreeMap::new();
    catalog.insert(files::CONFIRM_FILE_EXISTS, factory::<ConfirmFileExists>);
    catalog.insert(writing::COUNT_FILE_LINES, factory::<CountFileLines>);
    catalog.insert(writing::COUNT_FILE_PARAGRAPHS, factory::<CountFileParagraphs>);
    catalog.insert(writing::COUNT_PARAGRAPH_WORDS, factory::<CountParagraphWords>);
    catalog.insert(writing::COUNT_FILE_WORDS, factory::<CountFileWords>);
    catalog.insert(matching::MATCH_FILE_FRAGMENT, factory::<MatchFileFragment>);
    catalog.insert(matching::MATCH_FILE_REGEX, factory::<MatchFileRegex>);
    catalog.insert(comments::COUNT_SINGLE_LINE_COMMENTS, factory::<CountSingleLineComments>);
    catalog.insert(comments::COUNT_MULTIPLE_LINE_COMMENTS, factory::<CountMultipleLineComments>);
    catalog
});

/// Create a built-in checker by its command-line name.
pub fn create(name: &str) -> Option<Box<dyn Checker>> {
    CATALOG.get(name).map(|factory| factory())
}

pub fn contains(name: &str) -> bool {
    CATALOG.contains_key(name)
}

/// Names of all built-in checkers, sorted.
pub fn names() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

/// The file a checker looks at.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TargetArgs {
    /// File to check
    #[arg(long)]
    pub file: String,

    /// Directory that contains the file
    #[arg(long)]
    pub directory: PathBuf,
}

impl TargetArgs {
    pub fn target(&self) -> CheckTarget<'static> {
        CheckTarget::file(&self.file, &self.directory)
    }
}

/// A required expected count.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CountArgs {
    /// Expected count
    #[arg(long)]
    pub count: usize,

    /// Require the count to match exactly instead of as a minimum
    #[arg(long)]
    pub exact: bool,
}

impl CountArgs {
    pub fn threshold(&self) -> Threshold {
        Threshold::new(self.count, self.exact)
    }
}

/// An expected count that may instead come from a global option.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OptionalCountArgs {
    /// Expected count
    #[arg(long)]
    pub count: Option<usize>,

    /// Require the count to match exactly instead of as a minimum
    #[arg(long)]
    pub exact: bool,
}

impl OptionalCountArgs {
    /// The threshold from `--count`, or else from the fallback global option.
    pub fn threshold_or(
        &self,
        fallback: Option<usize>,
        mut command: Command,
        fallback_flag: &str,
    ) -> Result<Threshold, GraderError> {
        match self.count.or(fallback) {
            Some(expected) => Ok(Threshold::new(expected, self.exact)),
            None => Err(GraderError::Usage(UsageError::new(
                command.get_name().to_string(),
                usage_line(&mut command),
                format!("one of --count or {} is required", fallback_flag),
            ))),
        }
    }
}
