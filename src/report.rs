//! The result of a check and its rendering.
//!
//! Supports two output formats:
//! - Text: a check mark line, coloured for terminals
//! - JSON: a pretty-printed object for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;

const PASS_MARK: &str = "✔";
const FAIL_MARK: &str = "✘";
const DIAGNOSTIC_ARROW: &str = "➔";

/// Outcome of one check as shown to the person being graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// What was checked, e.g. "The file hello.md in docs has at least 2 paragraph(s)".
    pub check: String,
    pub outcome: bool,
    /// Why the check failed; empty when it passed.
    pub diagnostic: String,
}

impl CheckResult {
    /// Build a result, dropping the diagnostic of a passing check.
    pub fn new(check: impl Into<String>, outcome: bool, diagnostic: impl Into<String>) -> Self {
        let diagnostic = if outcome {
            String::new()
        } else {
            diagnostic.into()
        };
        Self {
            check: check.into(),
            outcome,
            diagnostic,
        }
    }

    pub fn passed(check: impl Into<String>) -> Self {
        Self::new(check, true, "")
    }

    pub fn failed(check: impl Into<String>, diagnostic: impl Into<String>) -> Self {
        Self::new(check, false, diagnostic)
    }

    /// Replace the check description with a user-provided one, if any.
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        if let Some(description) = description {
            self.check = description.to_string();
        }
        self
    }
}

/// How a check result is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render a result in the chosen format, without a trailing newline.
pub fn render(result: &CheckResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Render a result for a terminal.
pub fn render_text(result: &CheckResult) -> String {
    if result.outcome {
        format!("{}  {}", PASS_MARK.green().bold(), result.check)
    } else {
        format!(
            "{}  {}\n   {}  {}",
            FAIL_MARK.red().bold(),
            result.check,
            DIAGNOSTIC_ARROW.yellow(),
            result.diagnostic
        )
    }
}

/// Render a result as pretty-printed JSON.
pub fn render_json(result: &CheckResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_result_has_no_diagnostic() {
        let result = CheckResult::new("The file exists", true, "not used");
        assert!(result.outcome);
        assert_eq!(result.diagnostic, "");
    }

    #[test]
    fn test_text_rendering() {
        let passed = render_text(&CheckResult::passed("Has 3 lines"));
        assert!(passed.contains(PASS_MARK));
        assert!(passed.contains("Has 3 lines"));
        assert_eq!(passed.lines().count(), 1);

        let failed = render_text(&CheckResult::failed("Has 3 lines", "Found 1 line"));
        assert!(failed.contains(FAIL_MARK));
        assert!(failed.contains(DIAGNOSTIC_ARROW));
        assert_eq!(failed.lines().count(), 2);
        assert!(failed.lines().nth(1).unwrap_or_default().contains("Found 1 line"));
    }

    #[test]
    fn test_json_rendering() {
        let result = CheckResult::failed("Has a title", "No title found");
        let json = render(&result, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["check"], "Has a title");
        assert_eq!(value["outcome"], false);
        assert_eq!(value["diagnostic"], "No title found");

        let back: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn test_description_override() {
        let result = CheckResult::passed("default").with_description(Some("Custom wording"));
        assert_eq!(result.check, "Custom wording");

        let result = CheckResult::passed("default").with_description(None);
        assert_eq!(result.check, "default");
    }

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Text);
    }
}
