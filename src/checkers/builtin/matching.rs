//! Checkers that look for fragments and patterns in a file.

use clap::{CommandFactory, Parser};

use super::{CountArgs, TargetArgs};
use crate::checkers::{evaluate_count, parse_args, CheckOutcome, Checker, Measure};
use crate::cli::ParsedArguments;
use crate::error::Result;

pub(super) const MATCH_FILE_FRAGMENT: &str = "MatchFileFragment";
pub(super) const MATCH_FILE_REGEX: &str = "MatchFileRegex";

/// Check that a file contains a fragment a number of times.
#[derive(Parser, Debug)]
#[command(name = "MatchFileFragment")]
struct MatchFileFragmentArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: CountArgs,
    /// Fragment to look for
    #[arg(long)]
    fragment: String,
}

/// Check that a file matches a regular expression a number of times.
#[derive(Parser, Debug)]
#[command(name = "MatchFileRegex")]
struct MatchFileRegexArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: CountArgs,
    /// Regular expression to match
    #[arg(long, allow_hyphen_values = true)]
    regex: String,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MatchFileFragment;

impl Checker for MatchFileFragment {
    fn name(&self) -> &str {
        MATCH_FILE_FRAGMENT
    }

    fn description(&self) -> &str {
        "Check that a file contains a fragment a number of times"
    }

    fn command(&self) -> clap::Command {
        MatchFileFragmentArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: MatchFileFragmentArgs = parse_args(remaining)?;
        let result = evaluate_count(
            &Measure::Fragment(args.fragment),
            &args.target.target(),
            args.count.threshold(),
        );
        Ok(CheckOutcome::single(result))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MatchFileRegex;

impl Checker for MatchFileRegex {
    fn name(&self) -> &str {
        MATCH_FILE_REGEX
    }

    fn description(&self) -> &str {
        "Check that a file matches a regular expression a number of times"
    }

    fn command(&self) -> clap::Command {
        MatchFileRegexArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: MatchFileRegexArgs = parse_args(remaining)?;
        let result = evaluate_count(
            &Measure::Regex(args.regex),
            &args.target.target(),
            args.count.threshold(),
        );
        Ok(CheckOutcome::single(result))
    }
}
