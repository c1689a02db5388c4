//! Checkers for the length of technical writing.

use clap::{CommandFactory, Parser};

use super::{CountArgs, OptionalCountArgs, TargetArgs};
use crate::checkers::{evaluate_count, parse_args, CheckOutcome, Checker, Measure};
use crate::cli::ParsedArguments;
use crate::error::Result;
use crate::metrics::Summarizer;

pub(super) const COUNT_FILE_LINES: &str = "CountFileLines";
pub(super) const COUNT_FILE_PARAGRAPHS: &str = "CountFileParagraphs";
pub(super) const COUNT_PARAGRAPH_WORDS: &str = "CountParagraphWords";
pub(super) const COUNT_FILE_WORDS: &str = "CountFileWords";

/// Check the number of non-blank lines in a file.
#[derive(Parser, Debug)]
#[command(name = "CountFileLines")]
struct CountFileLinesArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: CountArgs,
}

/// Check the number of paragraphs in a Markdown file.
#[derive(Parser, Debug)]
#[command(name = "CountFileParagraphs")]
struct CountFileParagraphsArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: OptionalCountArgs,
}

/// Check the number of words in every paragraph of a Markdown file.
#[derive(Parser, Debug)]
#[command(name = "CountParagraphWords")]
struct CountParagraphWordsArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: CountArgs,
}

/// Check the total number of words in a Markdown file.
#[derive(Parser, Debug)]
#[command(name = "CountFileWords")]
struct CountFileWordsArgs {
    #[command(flatten)]
    target: TargetArgs,
    #[command(flatten)]
    count: CountArgs,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountFileLines;

impl Checker for CountFileLines {
    fn name(&self) -> &str {
        COUNT_FILE_LINES
    }

    fn description(&self) -> &str {
        "Check the number of non-blank lines in a file"
    }

    fn command(&self) -> clap::Command {
        CountFileLinesArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountFileLinesArgs = parse_args(remaining)?;
        let result = evaluate_count(&Measure::Lines, &args.target.target(), args.count.threshold());
        Ok(CheckOutcome::single(result))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountFileParagraphs;

impl Checker for CountFileParagraphs {
    fn name(&self) -> &str {
        COUNT_FILE_PARAGRAPHS
    }

    fn description(&self) -> &str {
        "Check the number of paragraphs in a Markdown file"
    }

    fn command(&self) -> clap::Command {
        CountFileParagraphsArgs::command()
    }

    fn act(&self, parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountFileParagraphsArgs = parse_args(remaining)?;
        let threshold = args
            .count
            .threshold_or(parsed.paragraphs, self.command(), "--paragraphs")?;
        let result = evaluate_count(&Measure::Paragraphs, &args.target.target(), threshold);
        Ok(CheckOutcome::single(result))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountParagraphWords;

impl Checker for CountParagraphWords {
    fn name(&self) -> &str {
        COUNT_PARAGRAPH_WORDS
    }

    fn description(&self) -> &str {
        "Check the number of words in every paragraph of a Markdown file"
    }

    fn command(&self) -> clap::Command {
        CountParagraphWordsArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountParagraphWordsArgs = parse_args(remaining)?;
        let result = evaluate_count(
            &Measure::Words(Summarizer::Minimum),
            &args.target.target(),
            args.count.threshold(),
        );
        Ok(CheckOutcome::single(result))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CountFileWords;

impl Checker for CountFileWords {
    fn name(&self) -> &str {
        COUNT_FILE_WORDS
    }

    fn description(&self) -> &str {
        "Check the total number of words in a Markdown file"
    }

    fn command(&self) -> clap::Command {
        CountFileWordsArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: CountFileWordsArgs = parse_args(remaining)?;
        let result = evaluate_count(
            &Measure::Words(Summarizer::Total),
            &args.target.target(),
            args.count.threshold(),
        );
        Ok(CheckOutcome::single(result))
    }
}
