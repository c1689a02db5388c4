//! Error types for gatorgrader.
//!
//! Only failures that stop a check from running are errors. A check that
//! runs and fails is a `CheckResult` with `outcome == false`, and a target
//! that cannot be found simply measures as zero.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing or running a check.
#[derive(Error, Debug)]
pub enum GraderError {
    /// Command-line tokens could not be parsed.
    #[error("{0}")]
    Usage(#[from] UsageError),
    /// Help was requested; carries the rendered help text.
    #[error("{0}")]
    Help(String),
    #[error("no checker was named on the command line")]
    MissingChecker,
    #[error("no checker named {name:?} was found (searched: {searched}; known checkers: {})", .known.join(", "))]
    CheckerNotFound {
        name: String,
        searched: String,
        known: Vec<String>,
    },
    #[error("checker {name:?} could not be loaded: {reason}")]
    CheckerLoad { name: String, reason: String },
    #[error("checker {name:?} does not satisfy the checker contract: {}", .problems.join("; "))]
    CheckerContract { name: String, problems: Vec<String> },
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("rendering report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraderError>;

/// A malformed command line, reported as a fixed three-line block.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{program}: error: {message}")]
pub struct UsageError {
    /// Name of the parser that rejected the tokens.
    pub program: String,
    /// One-line usage synopsis, without the `usage:` prefix.
    pub usage: String,
    /// What was wrong with the tokens.
    pub message: String,
}

impl UsageError {
    pub fn new(
        program: impl Into<String>,
        usage: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            usage: usage.into(),
            message: message.into(),
        }
    }

    /// Render the block written to the error stream.
    ///
    /// Always exactly three newline-terminated lines, the first starting
    /// with `usage:`.
    pub fn render(&self) -> String {
        format!(
            "usage: {}\n{}: error: {}\n{}: error: run with --help to see the accepted arguments\n",
            single_line(&self.usage),
            self.program,
            single_line(&self.message),
            self.program,
        )
    }
}

impl GraderError {
    /// Convert a clap parse failure into a usage error or a help request.
    ///
    /// The usage line and program name come from the command that rejected
    /// the tokens, so a checker's own parser reports its own usage.
    pub fn from_clap(command: &mut clap::Command, err: clap::Error) -> Self {
        use clap::error::ErrorKind;

        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                GraderError::Help(err.to_string())
            }
            _ => {
                let rendered = err.to_string();
                let message = rendered
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("error:")
                    .trim()
                    .to_string();
                GraderError::Usage(UsageError::new(
                    command.get_name().to_string(),
                    usage_line(command),
                    message,
                ))
            }
        }
    }
}

/// The usage synopsis of a command, without its `Usage:` heading.
pub fn usage_line(command: &mut clap::Command) -> String {
    let usage = command.render_usage().to_string();
    usage.trim().trim_start_matches("Usage:").trim().to_string()
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_block_has_three_lines() {
        let err = UsageError::new(
            "gatorgrader",
            "gatorgrader [OPTIONS] [CHECKER]",
            "unexpected argument '--fileWRONG' found",
        );
        let block = err.render();

        assert!(block.starts_with("usage: "));
        assert_eq!(block.matches('\n').count(), 3);
        assert!(block.ends_with('\n'));
        assert!(block.contains("--fileWRONG"));
    }

    #[test]
    fn test_usage_block_flattens_multiline_parts() {
        let err = UsageError::new("p", "p --file <FILE>\n    --directory <DIR>", "bad\nthing");
        assert_eq!(err.render().matches('\n').count(), 3);
        assert!(err.render().contains("p --file <FILE> --directory <DIR>"));
    }

    #[test]
    fn test_clap_errors_become_usage_errors() {
        let mut command = clap::Command::new("demo")
            .no_binary_name(true)
            .arg(clap::Arg::new("file").long("file").required(true));
        let err = command
            .try_get_matches_from_mut(["--fileWRONG", "x"])
            .unwrap_err();

        match GraderError::from_clap(&mut command, err) {
            GraderError::Usage(usage) => {
                assert_eq!(usage.program, "demo");
                assert!(usage.usage.starts_with("demo"));
                assert!(usage.message.contains("--fileWRONG"));
                assert!(!usage.message.starts_with("error:"));
            }
            other => panic!("expected a usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_clap_help_becomes_help() {
        let mut command = clap::Command::new("demo").no_binary_name(true).about("Demo tool");
        let err = command.try_get_matches_from_mut(["--help"]).unwrap_err();
        match GraderError::from_clap(&mut command, err) {
            GraderError::Help(text) => assert!(text.contains("Demo tool")),
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn test_contract_error_lists_problems() {
        let err = GraderError::CheckerContract {
            name: "check_Broken".to_string(),
            problems: vec!["missing parser".to_string(), "missing act".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("check_Broken"));
        assert!(msg.contains("missing parser; missing act"));
    }
}
