//! Checkers: independently loadable grading rules.
//!
//! This module provides:
//! - `Checker` trait: the contract every checker satisfies
//! - `CheckerRegistry`: lookup of checkers by name across the built-in
//!   catalog and an optional directory of external definitions
//! - Built-in checkers for files, writing, and source code comments

pub mod args;
pub mod builtin;
pub mod external;
pub mod measure;
pub mod registry;

pub use args::{matches_from, parse_args, parse_args_with};
pub use external::{ExternalChecker, ExternalUnit};
pub use measure::{evaluate_count, Measure};
pub use registry::{resolve_name, CheckerRegistry, Discovery, PluginUnit};

use crate::cli::ParsedArguments;
use crate::error::Result;
use crate::report::CheckResult;

/// What running a checker produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// One verdict per sub-check; the process succeeds only if all are true.
    pub verdicts: Vec<bool>,
    pub result: CheckResult,
}

impl CheckOutcome {
    /// An outcome made of one check.
    pub fn single(result: CheckResult) -> Self {
        Self {
            verdicts: vec![result.outcome],
            result,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|verdict| *verdict)
    }
}

/// A grading rule with its own command-line options.
pub trait Checker: Send + Sync {
    /// Name used on the command line, e.g. "MatchFileFragment".
    fn name(&self) -> &str;

    /// One-line summary of what the checker verifies.
    fn description(&self) -> &str;

    /// The checker's own parser.
    fn command(&self) -> clap::Command;

    /// Parse the checker's tokens and run the check.
    ///
    /// Fails only when the tokens do not parse; a check that runs and does
    /// not pass is an `Ok` outcome with a false verdict.
    fn act(&self, parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_outcome_follows_result() {
        let outcome = CheckOutcome::single(CheckResult::failed("check", "why"));
        assert_eq!(outcome.verdicts, vec![false]);
        assert!(!outcome.passed());

        let outcome = CheckOutcome::single(CheckResult::passed("check"));
        assert!(outcome.passed());
    }
}
