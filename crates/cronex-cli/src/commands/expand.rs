//! Expand command implementation.
//!
//! Takes the raw expression tokens from the command line, builds a
//! [`CronExpression`], and prints either a fixed-width table or a JSON
//! envelope.

use anyhow::{bail, Result};
use colored::Colorize;
use std::process::ExitCode;

use cronex_expr::{CronExpression, Field};

use super::json_output::ExpandOutput;

/// Width of the field-name column in the human-readable table.
const NAME_COLUMN_WIDTH: usize = 14;

/// Run the expand command.
///
/// # Arguments
/// * `tokens` - Whitespace-split expression tokens from the command line
/// * `json_output` - Whether to print the machine-readable JSON envelope
///
/// # Returns
/// Exit code: 0 if every field expanded, 1 otherwise.
pub fn run(tokens: &[String], json_output: bool) -> Result<ExitCode> {
    if tokens.iter().all(|t| t.trim().is_empty()) {
        bail!("empty cron expression: expected 5 schedule fields and a command");
    }

    let expr = match CronExpression::from_tokens(tokens) {
        Ok(expr) => expr,
        Err(err) => {
            if json_output {
                let output = ExpandOutput::construction_failure(&err);
                println!("{}", to_json(&output));
            } else {
                eprintln!("{}: {}", "error".red().bold(), err);
            }
            return Ok(ExitCode::from(1));
        }
    };

    if json_output {
        let output = ExpandOutput::from_expression(&expr);
        println!("{}", to_json(&output));
    } else {
        print_errors(&expr);
        print_table(&expr);
    }

    if expr.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn to_json(output: &ExpandOutput) -> String {
    serde_json::to_string_pretty(output).expect("ExpandOutput serialization should not fail")
}

/// Print one line per failed field before the table.
fn print_errors(expr: &CronExpression) {
    if expr.is_valid() {
        return;
    }
    println!("{}", "Errors:".red().bold());
    for err in expr.errors().values() {
        println!("  {} {}", "x".red(), err);
    }
    println!();
}

/// Print the fixed-width table: five field rows, then the command row.
///
/// A field that failed to expand shows its raw value instead.
fn print_table(expr: &CronExpression) {
    for row in table_rows(expr) {
        println!("{}", row);
    }
}

/// Render the table rows; split out from printing for testability.
fn table_rows(expr: &CronExpression) -> Vec<String> {
    let mut rows: Vec<String> = Field::all()
        .iter()
        .map(|field| {
            let value = expr
                .expansion_text(*field)
                .unwrap_or_else(|| expr.raw(*field).to_string());
            format!("{:<width$}{}", field.as_str(), value, width = NAME_COLUMN_WIDTH)
        })
        .collect();
    rows.push(format!(
        "{:<width$}{}",
        "command",
        expr.command(),
        width = NAME_COLUMN_WIDTH
    ));
    rows
}
