//! GatorGrader - automated checks for programmers and writers.
//!
//! A check runs one named checker against a file named on the command line
//! and reports whether the file meets the checker's requirement, such as
//! "README.md contains at least two paragraphs".
//!
//! # Architecture
//!
//! - `metrics`: pure counting of lines, paragraphs, words, fragments, and
//!   regex matches
//! - `threshold`: "at least" and "exactly" comparisons
//! - `cli`: global argument parsing and verification
//! - `checkers`: the `Checker` trait, the registry, built-in checkers, and
//!   checkers loaded from YAML documents
//! - `report` / `display`: result rendering and fixed messages
//! - `orchestrate`: the pipeline from tokens to exit code
//!
//! # Adding a Checker
//!
//! Implement `Checker` in `src/checkers/builtin/` and register it in the
//! catalog in `builtin/mod.rs`, or write a `check_<Name>.yaml` document and
//! pass its directory with `--checkerdir`.

pub mod checkers;
pub mod cli;
pub mod display;
pub mod error;
pub mod metrics;
pub mod orchestrate;
pub mod report;
pub mod threshold;

pub use checkers::{CheckOutcome, Checker, CheckerRegistry, Discovery, PluginUnit};
pub use cli::{parse, verify, ParsedArguments, EXIT_FAILED, EXIT_INCORRECT, EXIT_SUCCESS};
pub use error::{GraderError, Result, UsageError};
pub use metrics::CheckTarget;
pub use orchestrate::check;
pub use report::{CheckResult, OutputFormat};
pub use threshold::{at_least_or_exact, Threshold};

/// Environment variable holding the log filter, e.g. `debug`.
pub const LOG_ENV: &str = "GATORGRADER_LOG";

/// Install the log subscriber. Logging is off unless `GATORGRADER_LOG` is set.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logging: {}", e))
}
