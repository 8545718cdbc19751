pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvalError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::{debug, trace};
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// The expression may contain numbers, `+ - * /` and parentheses. Unknown
/// characters and unmatched parentheses are ignored, and a division by zero
/// results in positive infinity rather than an error.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression, or why it could not be calculated.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluate;
///
/// let value = evaluate("2 + 3 * 4");
/// assert_eq!(value, Ok(14.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let tokens = lexer::tokenize(expression);
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }
    let postfix_tokens = parser::to_postfix(tokens);
    let value = evaluate_postfix(&postfix_tokens).map_err(|error| {
        debug!("could not evaluate {:?}: {}", expression, error);
        error
    })?;
    if value.is_nan() {
        debug!("{:?} evaluated to NaN", expression);
        return Err(EvalError::NotFinite);
    }
    trace!("{:?} = {}", expression, value);
    Ok(value)
}

/// Converts the given expression into postfix tokens, without evaluating it.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::{postfix, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = postfix("(2 + 3) * 4");
/// assert_eq!(tokens_to_string(&postfix_tokens)?, "2 3 + 4 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn postfix(expression: &str) -> Vec<Token> {
    parser::to_postfix(lexer::tokenize(expression))
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::tokens_to_string;
/// use arithmetic_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::new_number("1"),
///     Token::new_number("-2"),
///     "*".parse().unwrap(),
/// ];
/// let printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(printed_tokens, "1 -2 *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}
