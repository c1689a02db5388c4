//! Fixed messages shown around a check.

use std::io::{self, Write};

use colored::*;

const WELCOME_TITLE: &str = "GatorGrader: Automatically Check the Files of Programmers and Writers";
const WELCOME_LINK: &str = "https://github.com/GatorEducator/gatorgrader";
const INCORRECT_ARGUMENTS: &str = "Incorrect command-line arguments.";
const HELP_REMINDER: &str = "Please run gatorgrader --help to see the accepted arguments.";

pub fn welcome_message(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", WELCOME_TITLE.bold())?;
    writeln!(out, "{}", WELCOME_LINK)?;
    writeln!(out)
}

pub fn incorrect_message(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", INCORRECT_ARGUMENTS.red())?;
    writeln!(out)
}

pub fn help_reminder(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", HELP_REMINDER)
}
