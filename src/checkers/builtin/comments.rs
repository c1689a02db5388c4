//! Checkers for comments in source code.

use clap::{CommandFactory, Parser, ValueEnum};

use super::{OptionalCountArgs, TargetArgs};
use crate::checkers::{evaluate_count, parse_args, CheckOutcome, Checker, Measure};
use crate::cli::ParsedArguments;
use crate::error::Result;

pub(super) const COUNT_SINGLE_LINE_COMMENTS: &str = "CountSingleLineComments";
pub(super) const COUNT_MULTIPLE_LINE_COMMENTS: &str = "CountMultipleLineComments";

/// Programming languages whose comments can be counted.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
    Python,
}

impl Language {
    /// A single-line comment with at least one non-blank character.
    pub fn single_line_pattern(self) -> &'static str {
        match self {
            Language::Java => r"//[^\S\n]*\S[^\n]*",
            Language::Python => r"#[^\S\n]*\S[^\n]*",
        }
    }

    /// A comment block that may span lines.
    pub fn multiple_line_pattern(self) -> &'static str {
        match self {
            Language::Java => r"/\*.*?\*/",
            Language::Python => r#"""".*?""""#,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Python => "Python",
        }
    }
}

/// Check the number of single-line comments in a source file.
#[derive(Parser, Debug)]
#[command(name = "CountSingleLineComments")]
struct CountSingleLineCommentsArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: OptionalCountArgs,
    /// Language of the source file
    #[arg(long, value_enum, ignore_case = true, allow_hyphen_values = true)]
    language: Language,
}

/// Check the number of multiple-line comments in a source file.
#[derive(Parser, Debug)]
#[command(name = "CountMultipleLineComments")]
struct CountMultipleLineCommentsArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: OptionalCountArgs,
    /// Language of the source file
    #[arg(long, value_enum, ignore_case = true, allow_hyphen_values = true)]
    language: Language,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountSingleLineComments;

impl Checker for CountSingleLineComments {
    fn name(&self) -> &str {
        COUNT_SINGLE_LINE_COMMENTS
    }

    fn description(&self) -> &str {
        "Check the number of single-line comments in a source file"
    }

    fn command(&self) -> clap::Command {
        CountSingleLineCommentsArgs::command()
    }

    fn act(&self, parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountSingleLineCommentsArgs = parse_args(remaining)?;
        let threshold = args
            .count
            .threshold_or(parsed.singlecomments, self.command(), "--singlecomments")?;
        let measure = Measure::Comments {
            kind: format!("single-line {}", args.language.label()),
            pattern: args.language.single_line_pattern(),
        };
        let result = evaluate_count(&measure, &args.target.target(), threshold);
        Ok(CheckOutcome::single(result))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountMultipleLineComments;

impl Checker for CountMultipleLineComments {
    fn name(&self) -> &str {
        COUNT_MULTIPLE_LINE_COMMENTS
    }

    fn description(&self) -> &str {
        "Check the number of multiple-line comments in a source file"
    }

    fn command(&self) -> clap::Command {
        CountMultipleLineCommentsArgs::command()
    }

    fn act(&self, parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountMultipleLineCommentsArgs = parse_args(remaining)?;
        let threshold = args
            .count
            .threshold_or(parsed.multicomments, self.command(), "--multicomments")?;
        let measure = Measure::Comments {
            kind: format!("multiple-line {}", args.language.label()),
            pattern: args.language.multiple_line_pattern(),
        };
        let result = evaluate_count(&measure, &args.target.target(), threshold);
        Ok(CheckOutcome::single(result))
    }
}
