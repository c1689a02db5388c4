//! Integration tests for built-in and external checkers against fixtures.

use std::path::{Path, PathBuf};

use gatorgrader::checkers::registry::verify_contract;
use gatorgrader::checkers::{resolve_name, CheckerRegistry, Discovery, PluginUnit};
use gatorgrader::{parse, Checker, GraderError};

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Parse a full command line and run its checker.
fn run(registry: &CheckerRegistry, tokens: &[&str]) -> gatorgrader::Result<gatorgrader::CheckOutcome> {
    let (parsed, remaining) = parse(tokens.iter().copied())?;
    let name = parsed.checker.as_deref().expect("a checker should be named");
    let checker: Box<dyn Checker> = registry.load(&resolve_name(name))?.verify()?;
    checker.act(&parsed, &remaining)
}

fn dir(sub: &str) -> String {
    testdata_path().join(sub).display().to_string()
}

#[test]
fn test_writing_checkers() {
    let registry = CheckerRegistry::default();
    let writing = dir("writing");
    let file = ["--file", "reflection.md", "--directory", writing.as_str()];

    let cases: Vec<(Vec<&str>, bool)> = vec![
        (vec!["CountFileLines", "--count", "8", "--exact"], true),
        (vec!["CountFileLines", "--count", "9"], false),
        (vec!["CountFileParagraphs", "--count", "3", "--exact"], true),
        (vec!["--paragraphs", "4", "CountFileParagraphs"], false),
        (vec!["CountParagraphWords", "--count", "7"], true),
        (vec!["CountParagraphWords", "--count", "8"], false),
        (vec!["CountFileWords", "--count", "46", "--exact"], true),
        (vec!["MatchFileFragment", "--fragment", "TODO", "--count", "1", "--exact"], true),
        (vec!["MatchFileRegex", "--regex", r"^#\s", "--count", "2"], false),
        (vec!["MatchFileRegex", "--regex", r"(?m)^#\s", "--count", "1", "--exact"], true),
        (vec!["ConfirmFileExists"], true),
    ];

    for (command, expected) in cases {
        let tokens: Vec<&str> = command.iter().copied().chain(file.iter().copied()).collect();
        let outcome = run(&registry, &tokens).unwrap_or_else(|e| panic!("{tokens:?}: {e}"));
        assert_eq!(outcome.passed(), expected, "{tokens:?}: {:?}", outcome.result);
        assert_eq!(outcome.result.diagnostic.is_empty(), expected, "{tokens:?}");
    }
}

#[test]
fn test_comment_checkers() {
    let registry = CheckerRegistry::default();
    let source = dir("source");

    for (file, language) in [("Main.java", "Java"), ("module.py", "python")] {
        for checker in ["CountSingleLineComments", "CountMultipleLineComments"] {
            let tokens = [
                checker,
                "--file",
                file,
                "--directory",
                source.as_str(),
                "--language",
                language,
                "--count",
                "2",
                "--exact",
            ];
            let outcome = run(&registry, &tokens).unwrap();
            assert!(outcome.passed(), "{tokens:?}: {:?}", outcome.result);
        }
    }

    let outcome = run(
        &registry,
        &[
            "--singlecomments",
            "3",
            "--file",
            "Main.java",
            "--directory",
            source.as_str(),
            "CountSingleLineComments",
            "--language",
            "java",
        ],
    )
    .unwrap();
    assert!(!outcome.passed());
}

#[test]
fn test_external_checker_directory() {
    let checkers = testdata_path().join("checkers");
    let registry = CheckerRegistry::locate(Some(checkers.as_path()));
    let writing = dir("writing");

    assert!(registry.exists("check_CountTodoMarkers"));
    assert!(registry.available().contains(&"CountTodoMarkers".to_string()));

    let outcome = run(
        &registry,
        &[
            "CountTodoMarkers",
            "--file",
            "reflection.md",
            "--directory",
            writing.as_str(),
            "--count",
            "1",
            "--exact",
        ],
    )
    .unwrap();
    assert!(outcome.passed(), "{:?}", outcome.result);

    let outcome = run(
        &registry,
        &["CountTodoMarkers", "--file", "reflection.md", "--directory", writing.as_str(), "--count", "2"],
    )
    .unwrap();
    assert!(!outcome.passed());
}

#[test]
fn test_external_checker_failures() {
    let checkers = testdata_path().join("checkers");
    let registry = CheckerRegistry::locate(Some(checkers.as_path()));

    assert!(matches!(registry.discover("check_Broken"), Discovery::LoadFailed(_)));

    let unit = registry.load("check_MissingAct").unwrap();
    assert!(matches!(unit, PluginUnit::External(_)));
    assert!(!verify_contract(&unit));
    match unit.verify() {
        Err(GraderError::CheckerContract { name, problems }) => {
            assert_eq!(name, "check_MissingAct");
            assert!(problems.iter().any(|p| p.contains("act")));
        }
        Err(other) => panic!("expected a contract error, got {other:?}"),
        Ok(checker) => panic!("{} should not verify", checker.name()),
    }
}

#[test]
fn test_checker_usage_errors_name_the_checker() {
    let registry = CheckerRegistry::locate(Some(Path::new("does-not-exist")));
    match run(&registry, &["MatchFileFragment", "--file", "a", "--directory", "d", "--count", "5", "--fragmentWRONG", "x"]) {
        Err(GraderError::Usage(usage)) => {
            assert_eq!(usage.program, "MatchFileFragment");
            assert!(usage.message.contains("--fragmentWRONG"));
        }
        other => panic!("expected a usage error, got {other:?}"),
    }
}
