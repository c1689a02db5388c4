//! GatorGrader CLI entry point.

use std::io;

use gatorgrader::{orchestrate, EXIT_INCORRECT};

fn run() -> anyhow::Result<i32> {
    gatorgrader::init_logging()?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = orchestrate::check(
        std::env::args().skip(1),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    Ok(code)
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_INCORRECT
        }
    };

    std::process::exit(exit_code);
}
