use clap::{CommandFactory, Parser};

use super::TargetArgs;
use crate::checkers::{parse_args, CheckOutcome, Checker};
use crate::cli::ParsedArguments;
use crate::error::Result;
use crate::report::CheckResult;

pub(super) const CONFIRM_FILE_EXISTS: &str = "ConfirmFileExists";

/// Check that a file exists in a directory.
#[derive(Parser, Debug)]
#[command(name = "ConfirmFileExists")]
struct ConfirmFileExistsArgs {
    #[command(flatten)]
    target: TargetArgs,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfirmFileExists;

impl Checker for ConfirmFileExists {
    fn name(&self) -> &str {
        CONFIRM_FILE_EXISTS
    }

    fn description(&self) -> &str {
        "Check that a file exists in a directory"
    }

    fn command(&self) -> clap::Command {
        ConfirmFileExistsArgs::command()
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let args: ConfirmFileExistsArgs = parse_args(remaining)?;
        let target = args.target.target();

        let check = format!("The {} exists", target.describe());
        let result = if target.file_exists() {
            CheckResult::passed(check)
        } else {
            CheckResult::failed(check, format!("Did not find the {}", target.describe()))
        };
        Ok(CheckOutcome::single(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tokens(dir: &TempDir, file: &str) -> Vec<String> {
        vec![
            format!("--file={}", file),
            format!("--directory={}", dir.path().display()),
        ]
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("present.txt"), "").unwrap();

        let outcome = ConfirmFileExists
            .act(&ParsedArguments::default(), &tokens(&temp, "present.txt"))
            .unwrap();
        assert!(outcome.passed());
        assert!(outcome.result.check.contains("present.txt"));
    }

    #[test]
    fn test_file_missing() {
        let temp = TempDir::new().unwrap();
        let outcome = ConfirmFileExists
            .act(&ParsedArguments::default(), &tokens(&temp, "absent.txt"))
            .unwrap();
        assert_eq!(outcome.verdicts, vec![false]);
        assert!(outcome.result.diagnostic.contains("absent.txt"));
    }
}
