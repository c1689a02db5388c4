//! Parsing a checker's own tokens.

use clap::{ArgMatches, Command, FromArgMatches, Parser};

use crate::error::{GraderError, Result};

/// Match tokens against a checker's parser.
pub fn matches_from(command: Command, tokens: &[String]) -> Result<ArgMatches> {
    let mut command = command.no_binary_name(true);
    command
        .try_get_matches_from_mut(tokens)
        .map_err(|e| GraderError::from_clap(&mut command, e))
}

/// Parse tokens with the derived parser of `T`.
pub fn parse_args<T: Parser>(tokens: &[String]) -> Result<T> {
    parse_args_with(T::command(), tokens)
}

/// Parse tokens with a supplied parser, e.g. one extended by the caller.
pub fn parse_args_with<T: FromArgMatches>(command: Command, tokens: &[String]) -> Result<T> {
    let mut command = command.no_binary_name(true);
    let matches = command
        .try_get_matches_from_mut(tokens)
        .map_err(|e| GraderError::from_clap(&mut command, e))?;
    T::from_arg_matches(&matches).map_err(|e| GraderError::from_clap(&mut command, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[derive(Parser, Debug)]
    #[command(name = "Demo")]
    struct DemoArgs {
        #[arg(long)]
        file: String,
        #[arg(long)]
        count: usize,
    }

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args: DemoArgs = parse_args(&tokens(&["--count", "3", "--file", "a.txt"])).unwrap();
        assert_eq!(args.file, "a.txt");
        assert_eq!(args.count, 3);
    }

    #[test]
    fn test_parse_args_with_supplied_command() {
        let command = DemoArgs::command().about("A demo checker");
        let args: DemoArgs =
            parse_args_with(command, &tokens(&["--file=a.txt", "--count=1"])).unwrap();
        assert_eq!(args.count, 1);
    }

    #[test]
    fn test_rejections_report_the_checker_usage() {
        for raw in [
            vec![],
            vec!["--file"],
            vec!["--fileWRONG", "a"],
            vec!["--file", "a", "--count"],
            vec!["--file", "a", "--count", "x"],
            vec!["--file", "a", "--count", "1", "--WRONG"],
        ] {
            match parse_args::<DemoArgs>(&tokens(&raw)) {
                Err(GraderError::Usage(usage)) => {
                    assert_eq!(usage.program, "Demo", "{raw:?}");
                    assert_eq!(usage.render().lines().count(), 3, "{raw:?}");
                }
                other => panic!("{raw:?} should be rejected, got {other:?}"),
            }
        }
    }
}
