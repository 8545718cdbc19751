use anyhow::{Context, Result};
use arithmetic_evaluator::interpreter::{evaluate, postfix, tokens_to_string};
use arithmetic_evaluator::session::{format_result, Key, Session, ERROR_DISPLAY, MAX_INPUT_LENGTH};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info, LevelFilter};
use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Evaluates arithmetic expressions made of numbers, + - * / and parentheses.
///
/// Without an expression, lines are read from stdin and evaluated one at a time.
/// A line starting with +, * or / continues from the previous result, and the
/// lines `clear` and `back` act like the calculator keys of the same name.
/// Pass `--` before an expression that starts with a minus sign.
#[derive(Parser, Debug)]
#[clap(author, version)]
struct Arguments {
    /// The expression to evaluate
    expression: Option<String>,

    /// Also print the expression in postfix order
    #[clap(long)]
    postfix: bool,

    /// Longest input accepted by the interactive calculator
    #[clap(long, default_value_t = MAX_INPUT_LENGTH)]
    max_length: usize,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<ExitCode> {
    let args = Arguments::parse();

    let level = args
        .verbose
        .log_level()
        .map_or(LevelFilter::Off, |level| level.to_level_filter());
    env_logger::Builder::new().filter_level(level).init();

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match args.expression {
        Some(ref expression) => {
            if evaluate_once(expression, args.postfix, &mut output)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
        None => {
            let stdin = io::stdin();
            run_interactive(stdin.lock(), &mut output, args.max_length, args.postfix)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints the result of `expression`, returning whether it could be evaluated.
fn evaluate_once(
    expression: &str,
    print_postfix: bool,
    output: &mut impl Write,
) -> Result<bool> {
    if print_postfix {
        writeln!(output, "{}", tokens_to_string(&postfix(expression))?)?;
    }
    match evaluate(expression) {
        Ok(value) => {
            writeln!(output, "{}", format_result(value))?;
            Ok(true)
        }
        Err(error) => {
            info!("{}", error);
            writeln!(output, "{}", ERROR_DISPLAY)?;
            Ok(false)
        }
    }
}

fn run_interactive(
    input: impl BufRead,
    output: &mut impl Write,
    max_length: usize,
    print_postfix: bool,
) -> Result<()> {
    let mut session = Session::with_max_length(max_length);

    for line in input.lines() {
        let line = line.context("Failed to read input line")?;
        let line = line.trim();
        match line {
            "" => continue,
            "clear" => session.press(Key::Clear),
            "back" => session.press(Key::Back),
            line => {
                if !continues_previous_result(line) {
                    session.press(Key::Clear);
                }
                line.chars()
                    .filter_map(Key::from_char)
                    .for_each(|key| session.press(key));
                debug!("buffer is {:?}", session.buffer());
                if print_postfix {
                    writeln!(output, "{}", tokens_to_string(&postfix(session.buffer()))?)?;
                }
                session.press(Key::Equals);
            }
        }
        writeln!(output, "{}", session.display())?;
        output.flush()?;
    }

    Ok(())
}

fn continues_previous_result(line: &str) -> bool {
    line.starts_with(&['+', '*', '/'][..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn lines_starting_with_operator_continue_previous_result() {
        assert!(continues_previous_result("+1"));
        assert!(continues_previous_result("*2"));
        assert!(continues_previous_result("/3"));
        assert!(!continues_previous_result("-4"));
        assert!(!continues_previous_result("5+5"));
    }

    #[test]
    fn arguments_parse_expression_and_flags() {
        let args = Arguments::parse_from(["arithmetic-evaluator-cli", "--postfix", "2+3"]);
        assert_eq!(args.expression.as_deref(), Some("2+3"));
        assert!(args.postfix);
        assert_eq!(args.max_length, MAX_INPUT_LENGTH);
    }

    #[test]
    fn arguments_without_expression_start_interactive_mode() {
        let args = Arguments::parse_from(["arithmetic-evaluator-cli", "--max-length", "50"]);
        assert_eq!(args.expression, None);
        assert_eq!(args.max_length, 50);
    }

    fn run_lines(input: &str, max_length: usize, print_postfix: bool) -> String {
        let mut output = Vec::new();
        run_interactive(Cursor::new(input), &mut output, max_length, print_postfix).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn interactive_lines_continue_go_back_and_clear() {
        let printed = run_lines("2+3\n*4\nback\nclear\n1+\n", MAX_INPUT_LENGTH, false);

        assert_eq!(printed, "5\n20\n2\n0\nError\n");
    }

    #[test]
    fn interactive_line_not_starting_with_operator_starts_over() {
        let printed = run_lines("2+3\n7\n-1+2\n", MAX_INPUT_LENGTH, false);

        assert_eq!(printed, "5\n7\n1\n");
    }

    #[test]
    fn interactive_lines_drop_characters_the_calculator_lacks() {
        let printed = run_lines("1 2\nx-1\n", MAX_INPUT_LENGTH, false);

        assert_eq!(printed, "12\n-1\n");
    }

    #[test]
    fn interactive_blank_lines_are_skipped() {
        let printed = run_lines("\n   \n6/4\n", MAX_INPUT_LENGTH, false);

        assert_eq!(printed, "1.5\n");
    }

    #[test]
    fn interactive_input_is_cut_at_max_length() {
        let printed = run_lines("1+2+3\n", 3, false);

        assert_eq!(printed, "3\n");
    }

    #[test]
    fn interactive_postfix_is_printed_before_result() {
        let printed = run_lines("2+3*4\n", MAX_INPUT_LENGTH, true);

        assert_eq!(printed, "2 3 4 * +\n14\n");
    }

    #[test]
    fn evaluate_once_reports_success() {
        let mut output = Vec::new();

        let evaluated = evaluate_once("(2+3)*4", true, &mut output).unwrap();

        assert!(evaluated);
        assert_eq!(String::from_utf8(output).unwrap(), "2 3 + 4 *\n20\n");
    }

    #[test]
    fn evaluate_once_reports_failure_without_exiting() {
        let mut output = Vec::new();

        let evaluated = evaluate_once("1 2", false, &mut output).unwrap();

        assert!(!evaluated);
        assert_eq!(String::from_utf8(output).unwrap(), "Error\n");
    }
}
