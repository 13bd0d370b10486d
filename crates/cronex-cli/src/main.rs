//! Cronex CLI - expand cron schedule fields into concrete values
//!
//! Takes a five-field cron expression plus a command string and prints a
//! fixed-width table with each field's expanded values, or per-field error
//! messages when a field does not validate.

use clap::Parser;
use std::process::ExitCode;

use cronex_cli::commands;

/// Cronex - Cron Expression Expander
#[derive(Parser)]
#[command(name = "cronex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output machine-readable JSON instead of the table
    #[arg(long)]
    json: bool,

    /// The cron expression: five schedule fields followed by the command,
    /// quoted as one argument or given as separate tokens
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    expression: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::expand::run(&cli.expression, cli.json) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_quoted_expression() {
        let cli = Cli::try_parse_from(["cronex", "*/15 0 1,15 * 1-5 /usr/bin/find"]).unwrap();
        assert_eq!(cli.expression, vec!["*/15 0 1,15 * 1-5 /usr/bin/find"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parses_separate_tokens() {
        let cli =
            Cli::try_parse_from(["cronex", "*/15", "0", "1,15", "*", "1-5", "/usr/bin/find"])
                .unwrap();
        assert_eq!(cli.expression.len(), 6);
        assert_eq!(cli.expression[0], "*/15");
        assert_eq!(cli.expression[5], "/usr/bin/find");
    }

    #[test]
    fn test_cli_allows_hyphenated_command_arguments() {
        let cli = Cli::try_parse_from([
            "cronex", "*/5", "*", "1,15", "JAN-DEC", "MON", "/bin/bash", "-c", "./do-something",
        ])
        .unwrap();
        assert_eq!(cli.expression.len(), 8);
        assert_eq!(cli.expression[6], "-c");
    }

    #[test]
    fn test_cli_parses_json_flag() {
        let cli = Cli::try_parse_from(["cronex", "--json", "* * * * * cmd"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.expression, vec!["* * * * * cmd"]);
    }

    #[test]
    fn test_cli_requires_an_expression() {
        assert!(Cli::try_parse_from(["cronex"]).is_err());
        assert!(Cli::try_parse_from(["cronex", "--json"]).is_err());
    }
}
