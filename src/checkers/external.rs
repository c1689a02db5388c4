//! Checkers defined by YAML documents in a checker directory.
//!
//! A document named `check_<Name>.yaml` declares the options of its parser
//! and the measurement its `act` section performs:
//!
//! ```yaml
//! description: Count TODO markers in a file
//! parser:
//!   options:
//!     - name: file
//!       required: true
//!     - name: directory
//!       required: true
//!     - name: count
//!       required: true
//!     - name: exact
//!       flag: true
//! act:
//!   measure: fragment
//!   fragment: TODO
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{evaluate_count, matches_from, CheckOutcome, Checker, Measure};
use crate::cli::ParsedArguments;
use crate::error::{usage_line, GraderError, Result, UsageError};
use crate::metrics::{CheckTarget, Summarizer};
use crate::report::CheckResult;
use crate::threshold::Threshold;

lazy_static! {
    static ref OPTION_NAME: Regex = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();
}

/// Top-level checker document.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CheckerDocument {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub parser: Option<ParserSection>,
    #[serde(default)]
    pub act: Option<ActSection>,
}

/// The options accepted by the checker's own parser.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct ParserSection {
    #[serde(default)]
    pub options: Vec<OptionDef>,
}

/// One long option, e.g. `--file`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct OptionDef {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    /// A switch that takes no value.
    #[serde(default)]
    pub flag: bool,
    #[serde(default)]
    pub help: Option<String>,
}

/// What the checker measures.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(tag = "measure", rename_all = "lowercase")]
pub enum ActSection {
    Exists,
    Lines,
    Paragraphs,
    Words {
        #[serde(default)]
        total: bool,
    },
    Fragment {
        #[serde(default)]
        fragment: Option<String>,
    },
    Regex {
        #[serde(default)]
        pattern: Option<String>,
    },
}

impl ActSection {
    fn counts(&self) -> bool {
        !matches!(self, ActSection::Exists)
    }

    /// Value options the measurement reads.
    fn needed_options(&self) -> Vec<&'static str> {
        let mut needed = vec!["file", "directory"];
        if self.counts() {
            needed.push("count");
        }
        match self {
            ActSection::Fragment { fragment: None } => needed.push("fragment"),
            ActSection::Regex { pattern: None } => needed.push("regex"),
            _ => {}
        }
        needed
    }
}

/// A checker document loaded from disk but not yet verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalUnit {
    pub name: String,
    pub path: PathBuf,
    pub document: CheckerDocument,
}

impl ExternalUnit {
    /// Parse a checker document from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(name: &str, path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GraderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document: CheckerDocument =
            serde_yaml::from_str(&content).map_err(|e| GraderError::CheckerLoad {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
            document,
        })
    }

    /// Command-line name: the unit name without its `check_` prefix.
    pub fn checker_name(&self) -> &str {
        self.name.strip_prefix("check_").unwrap_or(&self.name)
    }

    /// Everything that keeps this document from being a usable checker.
    pub fn contract_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let document = &self.document;

        if document.parser.is_none() {
            problems.push("missing parser section".to_string());
        }
        if document.act.is_none() {
            problems.push("missing act section".to_string());
        }
        let options = document
            .parser
            .as_ref()
            .map(|parser| parser.options.as_slice())
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for option in options {
            if !OPTION_NAME.is_match(&option.name) {
                problems.push(format!("option name {:?} is not a valid long option", option.name));
            }
            if option.name == "help" {
                problems.push("option name \"help\" is reserved".to_string());
            }
            if !seen.insert(option.name.as_str()) {
                problems.push(format!("option {:?} is declared twice", option.name));
            }
            if option.flag && option.required {
                problems.push(format!("switch {:?} cannot be required", option.name));
            }
            if option.name == "exact" && !option.flag {
                problems.push("option \"exact\" must be a switch".to_string());
            }
        }

        if let Some(act) = &document.act {
            for needed in act.needed_options() {
                match options.iter().find(|option| option.name == needed) {
                    None => problems.push(format!("act needs option {:?}", needed)),
                    Some(option) if option.flag => {
                        problems.push(format!("option {:?} must take a value", needed))
                    }
                    Some(_) => {}
                }
            }
        }

        problems
    }

    /// Turn the document into a checker if it satisfies the contract.
    pub fn verify(self) -> Result<ExternalChecker> {
        let problems = self.contract_problems();
        if !problems.is_empty() {
            tracing::warn!(unit = %self.name, ?problems, "checker document does not satisfy the contract");
            return Err(GraderError::CheckerContract {
                name: self.name,
                problems,
            });
        }
        let name = self.checker_name().to_string();
        let description = self
            .document
            .description
            .clone()
            .unwrap_or_else(|| format!("Checker defined in {}", self.path.display()));
        match (self.document.parser, self.document.act) {
            (Some(parser), Some(act)) => Ok(ExternalChecker {
                name,
                description,
                options: parser.options,
                act,
            }),
            _ => Err(GraderError::CheckerContract {
                name: self.name,
                problems: vec!["missing parser or act section".to_string()],
            }),
        }
    }
}

/// A verified checker document, ready to run.
#[derive(Debug, Clone)]
pub struct ExternalChecker {
    name: String,
    description: String,
    options: Vec<OptionDef>,
    act: ActSection,
}

impl ExternalChecker {
    fn value<'m>(matches: &'m ArgMatches, name: &str) -> Option<&'m String> {
        matches.try_get_one::<String>(name).ok().flatten()
    }

    fn switch(matches: &ArgMatches, name: &str) -> bool {
        matches
            .try_get_one::<bool>(name)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    fn usage_error(&self, message: String) -> GraderError {
        let mut command = self.command();
        GraderError::Usage(UsageError::new(
            self.name.clone(),
            usage_line(&mut command),
            message,
        ))
    }

    fn required_value<'m>(&self, matches: &'m ArgMatches, name: &str) -> Result<&'m String> {
        Self::value(matches, name)
            .ok_or_else(|| self.usage_error(format!("the argument --{} is required", name)))
    }

    fn measure(&self, matches: &ArgMatches) -> Result<Option<Measure>> {
        let measure = match &self.act {
            ActSection::Exists => return Ok(None),
            ActSection::Lines => Measure::Lines,
            ActSection::Paragraphs => Measure::Paragraphs,
            ActSection::Words { total: false } => Measure::Words(Summarizer::Minimum),
            ActSection::Words { total: true } => Measure::Words(Summarizer::Total),
            ActSection::Fragment { fragment: Some(fragment) } => Measure::Fragment(fragment.clone()),
            ActSection::Fragment { fragment: None } => {
                Measure::Fragment(self.required_value(matches, "fragment")?.clone())
            }
            ActSection::Regex { pattern: Some(pattern) } => Measure::Regex(pattern.clone()),
            ActSection::Regex { pattern: None } => {
                Measure::Regex(self.required_value(matches, "regex")?.clone())
            }
        };
        Ok(Some(measure))
    }
}

impl Checker for ExternalChecker {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.name.clone()).about(self.description.clone());
        for option in &self.options {
            let mut arg = Arg::new(option.name.clone()).long(option.name.clone());
            arg = if option.flag {
                arg.action(ArgAction::SetTrue)
            } else {
                arg.action(ArgAction::Set)
                    .required(option.required)
                    .allow_hyphen_values(true)
            };
            if let Some(help) = &option.help {
                arg = arg.help(help.clone());
            }
            command = command.arg(arg);
        }
        command
    }

    fn act(&self, _parsed: &ParsedArguments, remaining: &[String]) -> Result<CheckOutcome> {
        let matches = matches_from(self.command(), remaining)?;

        let file = self.required_value(&matches, "file")?;
        let directory = self.required_value(&matches, "directory")?;
        let target = CheckTarget::file(file, directory);

        let Some(measure) = self.measure(&matches)? else {
            let check = format!("The {} exists", target.describe());
            let result = if target.file_exists() {
                CheckResult::passed(check)
            } else {
                CheckResult::failed(check, format!("Did not find the {}", target.describe()))
            };
            return Ok(CheckOutcome::single(result));
        };

        let count = self.required_value(&matches, "count")?;
        let expected: usize = count.parse().map_err(|_| {
            self.usage_error(format!("invalid value '{}' for '--count': expected a number", count))
        })?;
        let threshold = Threshold::new(expected, Self::switch(&matches, "exact"));

        tracing::debug!(checker = %self.name, ?measure, %threshold, "running external checker");
        Ok(CheckOutcome::single(evaluate_count(&measure, &target, threshold)))
    }
}
