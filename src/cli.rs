//! Command-line interface for gatorgrader.
//!
//! The global parser only knows the options shared by every check. The first
//! bare token names the checker, and everything meant for that checker is
//! handed on untouched, together with the target options (`--file`,
//! `--directory`, `--count`, `--exact`, `--fragment`), which both the global
//! parser and every checker's own parser need.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use crate::error::{GraderError, Result};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_INCORRECT: i32 = 2;

/// Options that take a value and are recorded and forwarded to the checker.
const TARGET_VALUE_OPTIONS: &[&str] = &["directory", "file", "count", "fragment"];
/// Switches that are recorded and forwarded to the checker.
const TARGET_SWITCHES: &[&str] = &["exact"];
/// Options that take a value and belong to the global parser alone.
const GLOBAL_VALUE_OPTIONS: &[&str] = &[
    "singlecomments",
    "multicomments",
    "paragraphs",
    "checkerdir",
    "description",
];
/// Switches that belong to the global parser alone.
const GLOBAL_SWITCHES: &[&str] = &["nowelcome", "json"];

/// Automatically check the files of programmers and writers.
///
/// Name a checker after the global options and give it its own options,
/// for example `gatorgrader MatchFileFragment --file README.md --directory
/// . --fragment TODO --count 0 --exact`.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "gatorgrader", no_binary_name = true)]
pub struct ParsedArguments {
    /// Directory that contains the file to check
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// File to check
    #[arg(long)]
    pub file: Option<String>,

    /// Expected count for the check
    #[arg(long)]
    pub count: Option<usize>,

    /// Require the count to match exactly instead of as a minimum
    #[arg(long)]
    pub exact: bool,

    /// Fragment to look for
    #[arg(long)]
    pub fragment: Option<String>,

    /// Minimum number of single-line comments
    #[arg(long)]
    pub singlecomments: Option<usize>,

    /// Minimum number of multiple-line comments
    #[arg(long)]
    pub multicomments: Option<usize>,

    /// Minimum number of paragraphs
    #[arg(long)]
    pub paragraphs: Option<usize>,

    /// Do not display the welcome message
    #[arg(long)]
    pub nowelcome: bool,

    /// Print the check result as JSON
    #[arg(long)]
    pub json: bool,

    /// Directory with additional checker definitions
    #[arg(long)]
    pub checkerdir: Option<PathBuf>,

    /// Description that replaces the checker's own wording in the report
    #[arg(long)]
    pub description: Option<String>,

    /// Name of the checker to run, e.g. MatchFileFragment
    pub checker: Option<String>,
}

/// Where a token ends up after partitioning.
#[derive(Debug, Default, PartialEq, Eq)]
struct Partition {
    global: Vec<String>,
    forwarded: Vec<String>,
}

enum Role {
    Target,
    Global,
    Unknown,
}

fn classify(name: &str) -> (Role, bool) {
    if TARGET_VALUE_OPTIONS.contains(&name) {
        (Role::Target, true)
    } else if TARGET_SWITCHES.contains(&name) {
        (Role::Target, false)
    } else if GLOBAL_VALUE_OPTIONS.contains(&name) {
        (Role::Global, true)
    } else if GLOBAL_SWITCHES.contains(&name) {
        (Role::Global, false)
    } else {
        (Role::Unknown, false)
    }
}

/// Split raw tokens between the global parser and the checker.
///
/// A value of a known option is taken from the next token unless it looks
/// like another long option, and is rejoined as `--name=value` so that a
/// value starting with `-` survives both parsers. Options only a checker
/// knows are forwarded untouched; their parsers accept hyphen values. Unknown
/// tokens before the checker name go to the global parser, which rejects them.
fn partition(tokens: &[String]) -> Partition {
    let mut partition = Partition::default();
    let mut seen_checker = false;
    let mut index = 0;

    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;

        let Some(body) = token.strip_prefix("--").filter(|b| !b.is_empty()) else {
            if !seen_checker && !token.starts_with('-') {
                seen_checker = true;
                partition.global.push(token.clone());
            } else if seen_checker {
                partition.forwarded.push(token.clone());
            } else {
                partition.global.push(token.clone());
            }
            continue;
        };

        let (name, inline_value) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (body, None),
        };
        let (role, takes_value) = classify(name);

        let normalized = if takes_value {
            let value = inline_value.or_else(|| {
                let next = tokens.get(index).filter(|next| !next.starts_with("--"))?;
                index += 1;
                Some(next.clone())
            });
            match value {
                Some(value) => format!("--{}={}", name, value),
                None => token.clone(),
            }
        } else {
            token.clone()
        };

        match role {
            Role::Target => {
                partition.global.push(normalized.clone());
                partition.forwarded.push(normalized);
            }
            Role::Global => partition.global.push(normalized),
            Role::Unknown if seen_checker => partition.forwarded.push(normalized),
            Role::Unknown => partition.global.push(normalized),
        }
    }

    partition
}

/// Parse raw tokens into the global arguments and the checker's tokens.
///
/// The checker name itself is not part of the returned tokens.
pub fn parse<I, S>(tokens: I) -> Result<(ParsedArguments, Vec<String>)>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let partition = partition(&tokens);

    let mut command = ParsedArguments::command();
    let parsed = command
        .try_get_matches_from_mut(&partition.global)
        .and_then(|matches| ParsedArguments::from_arg_matches(&matches))
        .map_err(|e| GraderError::from_clap(&mut command, e))?;

    tracing::debug!(?parsed, remaining = ?partition.forwarded, "parsed arguments");
    Ok((parsed, partition.forwarded))
}

/// Check that a file and its directory are both given.
pub fn is_valid_file(parsed: &ParsedArguments) -> bool {
    parsed.file.is_some() && parsed.directory.is_some()
}

/// Check that comment thresholds come with a file and a directory.
pub fn is_valid_comments(parsed: &ParsedArguments) -> bool {
    if parsed.singlecomments.is_some() || parsed.multicomments.is_some() {
        is_valid_file(parsed)
    } else {
        true
    }
}

/// Check that a paragraph threshold comes with a file and a directory.
pub fn is_valid_paragraphs(parsed: &ParsedArguments) -> bool {
    if parsed.paragraphs.is_some() {
        is_valid_file(parsed)
    } else {
        true
    }
}

/// Verify that the parsed arguments form a usable combination.
pub fn verify(parsed: &ParsedArguments) -> bool {
    is_valid_file(parsed) && is_valid_comments(parsed) && is_valid_paragraphs(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn parsed(tokens: &[&str]) -> ParsedArguments {
        parse(args(tokens)).unwrap().0
    }

    #[test]
    fn test_defaults() {
        let (parsed, remaining) = parse(Vec::<String>::new()).unwrap();
        assert_eq!(parsed, ParsedArguments::default());
        assert!(remaining.is_empty());
        assert!(!verify(&parsed));
    }

    #[test]
    fn test_global_options() {
        let parsed = parsed(&[
            "--nowelcome",
            "--json",
            "--checkerdir",
            "extra",
            "--description",
            "Custom check",
            "--paragraphs",
            "3",
        ]);
        assert!(parsed.nowelcome);
        assert!(parsed.json);
        assert_eq!(parsed.checkerdir, Some(PathBuf::from("extra")));
        assert_eq!(parsed.description.as_deref(), Some("Custom check"));
        assert_eq!(parsed.paragraphs, Some(3));
    }

    #[test]
    fn test_checker_name_and_forwarded_tokens() {
        let (parsed, remaining) = parse(args(&[
            "--nowelcome",
            "MatchFileRegex",
            "--file",
            "a.md",
            "--directory",
            "docs",
            "--regex",
            "[a-z]+",
            "--count",
            "2",
        ]))
        .unwrap();

        assert_eq!(parsed.checker.as_deref(), Some("MatchFileRegex"));
        assert_eq!(parsed.file.as_deref(), Some("a.md"));
        assert_eq!(parsed.directory, Some(PathBuf::from("docs")));
        assert_eq!(parsed.count, Some(2));
        assert_eq!(
            remaining,
            args(&[
                "--file=a.md",
                "--directory=docs",
                "--regex",
                "[a-z]+",
                "--count=2"
            ])
        );
    }

    #[test]
    fn test_target_options_before_checker_are_forwarded() {
        let (parsed, remaining) = parse(args(&[
            "--directory",
            "D",
            "--file",
            "f",
            "--exact",
            "CountFileLines",
            "--count",
            "4",
        ]))
        .unwrap();
        assert!(parsed.exact);
        assert_eq!(
            remaining,
            args(&["--directory=D", "--file=f", "--exact", "--count=4"])
        );
    }

    #[test]
    fn test_global_only_options_are_not_forwarded() {
        let (parsed, remaining) = parse(args(&[
            "CountFileParagraphs",
            "--paragraphs",
            "2",
            "--json",
            "--file",
            "f",
        ]))
        .unwrap();
        assert_eq!(parsed.paragraphs, Some(2));
        assert!(parsed.json);
        assert_eq!(remaining, args(&["--file=f"]));
    }

    #[test]
    fn test_equals_form_and_hyphen_values() {
        let (parsed, remaining) = parse(args(&[
            "Check",
            "--fragment=-x",
            "--description",
            "-dashed wording",
        ]))
        .unwrap();
        assert_eq!(parsed.fragment.as_deref(), Some("-x"));
        assert_eq!(parsed.description.as_deref(), Some("-dashed wording"));
        assert_eq!(remaining, args(&["--fragment=-x"]));
    }

    #[test]
    fn test_second_bare_token_goes_to_checker() {
        let (parsed, remaining) = parse(args(&["--directory", "D", "First", "Second"])).unwrap();
        assert_eq!(parsed.checker.as_deref(), Some("First"));
        assert_eq!(remaining, args(&["--directory=D", "Second"]));
    }

    #[test]
    fn test_malformed_global_tokens_are_usage_errors() {
        for tokens in [
            vec!["--directoryy", "D"],
            vec!["--filles", "F"],
            vec!["-file", "f"],
            vec!["-directory", "f"],
            vec!["--fileWRONG", "filename"],
            vec!["--file"],
            vec!["--count", "many"],
        ] {
            match parse(args(&tokens)) {
                Err(GraderError::Usage(usage)) => {
                    let block = usage.render();
                    assert!(block.starts_with("usage:"), "{tokens:?}");
                    assert_eq!(block.matches('\n').count(), 3, "{tokens:?}");
                }
                other => panic!("{tokens:?} should not parse, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_help_is_not_a_usage_error() {
        match parse(args(&["--help"])) {
            Err(GraderError::Help(text)) => assert!(text.contains("--checkerdir")),
            other => panic!("expected help, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_combinations() {
        assert!(verify(&parsed(&["--nowelcome", "--directory", "D", "--file", "f"])));
        assert!(!verify(&parsed(&["--nowelcome", "--directory", "D"])));
        assert!(verify(&parsed(&[
            "--directory",
            "D",
            "--file",
            "f",
            "--singlecomments",
            "2"
        ])));
        assert!(!verify(&parsed(&["--directory", "D", "--singlecomments", "2"])));
        assert!(!verify(&parsed(&["--nowelcome"])));
        assert!(!verify(&parsed(&["--file", "F"])));
    }

    #[test]
    fn test_is_valid_file() {
        assert!(is_valid_file(&parsed(&["--file", "f", "--directory", "D"])));
        assert!(!is_valid_file(&parsed(&["--directory", "D"])));
        assert!(!is_valid_file(&parsed(&["--file", "F"])));
        assert!(!is_valid_file(&parsed(&[])));
    }

    #[test]
    fn test_is_valid_comments() {
        assert!(is_valid_comments(&parsed(&[
            "--file",
            "f",
            "--directory",
            "D",
            "--multicomments",
            "2"
        ])));
        assert!(!is_valid_comments(&parsed(&["--directory", "D", "--multicomments", "3"])));
        assert!(!is_valid_comments(&parsed(&["--file", "F", "--singlecomments", "1"])));
        assert!(is_valid_comments(&parsed(&["--nowelcome"])));
    }

    #[test]
    fn test_is_valid_paragraphs() {
        assert!(is_valid_paragraphs(&parsed(&[
            "--directory",
            "D",
            "--file",
            "F",
            "--paragraphs",
            "2"
        ])));
        assert!(!is_valid_paragraphs(&parsed(&["--directory", "D", "--paragraphs", "2"])));
        assert!(!is_valid_paragraphs(&parsed(&["--file", "F", "--paragraphs", "1"])));
        assert!(is_valid_paragraphs(&parsed(&["--nowelcome"])));
    }
}
