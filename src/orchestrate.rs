//! Run one check from raw command-line tokens to an exit code.

use std::io::{self, Write};

use crate::checkers::{resolve_name, CheckOutcome, CheckerRegistry};
use crate::cli::{self, ParsedArguments, EXIT_FAILED, EXIT_INCORRECT, EXIT_SUCCESS};
use crate::display;
use crate::error::{GraderError, Result};
use crate::report::{self, OutputFormat};

/// Something to do before a checker runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Welcome,
    IncorrectMessage,
    HelpReminder,
    Exit(i32),
}

/// Decide what happens before a checker runs.
pub fn pre_check_actions(parsed: &ParsedArguments, verified: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    if !parsed.nowelcome {
        actions.push(Action::Welcome);
    }
    if !verified {
        actions.push(Action::IncorrectMessage);
        actions.push(Action::HelpReminder);
        actions.push(Action::Exit(EXIT_INCORRECT));
    }
    actions
}

/// Perform actions in order, stopping at the first exit.
///
/// Returns the exit code if an exit was reached.
pub fn perform(actions: &[Action], out: &mut dyn Write) -> io::Result<Option<i32>> {
    for action in actions {
        match action {
            Action::Welcome => display::welcome_message(out)?,
            Action::IncorrectMessage => display::incorrect_message(out)?,
            Action::HelpReminder => display::help_reminder(out)?,
            Action::Exit(code) => return Ok(Some(*code)),
        }
    }
    Ok(None)
}

/// Exit code for a set of verdicts: success only if every verdict holds.
pub fn exit_code(verdicts: &[bool]) -> i32 {
    if verdicts.iter().all(|verdict| *verdict) {
        EXIT_SUCCESS
    } else {
        EXIT_FAILED
    }
}

/// Find, verify, and run the named checker.
fn run_checker(
    registry: &CheckerRegistry,
    parsed: &ParsedArguments,
    remaining: &[String],
) -> Result<CheckOutcome> {
    let name = parsed.checker.as_deref().ok_or(GraderError::MissingChecker)?;
    let unit = resolve_name(name);
    if !registry.exists(&unit) {
        return Err(registry.not_found(&unit));
    }
    let checker = registry.load(&unit)?.verify()?;

    tracing::debug!(checker = checker.name(), ?remaining, "running checker");
    let outcome = checker.act(parsed, remaining)?;
    tracing::debug!(verdicts = ?outcome.verdicts, "checker finished");
    Ok(outcome)
}

/// Run a full check and return the process exit code.
///
/// Reports go to `out`; usage errors go to `err` as a three-line block.
pub fn check<I, S>(tokens: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    match run(tokens, out, err) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "could not write output");
            EXIT_INCORRECT
        }
    }
}

fn run<I, S>(tokens: I, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<i32>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (mut parsed, remaining) = match cli::parse(tokens) {
        Ok(parsed) => parsed,
        Err(e) => return report_error(e, out, err),
    };
    let verified = cli::verify(&parsed);
    let registry = CheckerRegistry::locate(parsed.checkerdir.as_deref());

    if let Some(code) = perform(&pre_check_actions(&parsed, verified), out)? {
        return Ok(code);
    }

    let outcome = match run_checker(&registry, &parsed, &remaining) {
        Ok(outcome) => outcome,
        Err(e @ (GraderError::Usage(_) | GraderError::Help(_))) => {
            return report_error(e, out, err);
        }
        Err(e) => {
            tracing::warn!(error = %e, "checker is not usable");
            writeln!(err, "gatorgrader: error: {}", e)?;
            parsed.nowelcome = true;
            let code = perform(&pre_check_actions(&parsed, false), out)?;
            return Ok(code.unwrap_or(EXIT_INCORRECT));
        }
    };

    let result = outcome
        .result
        .clone()
        .with_description(parsed.description.as_deref());
    match report::render(&result, OutputFormat::from_json_flag(parsed.json)) {
        Ok(rendered) => writeln!(out, "{}", rendered)?,
        Err(e) => {
            writeln!(err, "gatorgrader: error: {}", e)?;
            return Ok(EXIT_INCORRECT);
        }
    }

    Ok(exit_code(&outcome.verdicts))
}

fn report_error(e: GraderError, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<i32> {
    match e {
        GraderError::Usage(usage) => {
            err.write_all(usage.render().as_bytes())?;
            Ok(EXIT_INCORRECT)
        }
        GraderError::Help(text) => {
            write!(out, "{}", text)?;
            Ok(EXIT_SUCCESS)
        }
        other => {
            writeln!(err, "gatorgrader: error: {}", other)?;
            Ok(EXIT_INCORRECT)
        }
    }
}
