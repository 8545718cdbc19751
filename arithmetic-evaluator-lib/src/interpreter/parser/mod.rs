mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (reverse polish) order,
/// resolving operator precedence and parentheses.
///
/// Parsing never fails. Unmatched parentheses are dropped and malformed
/// numbers are passed through untouched, leaving it to the evaluator to
/// reject whatever can not be computed.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators, in postfix format, without parentheses.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::parser::to_postfix;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::new_number("2"),
///     "+".parse().unwrap(),
///     Token::new_number("3"),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens);
/// assert_eq!(postfix_tokens[2], "+".parse::<Token>().unwrap());
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Vec<Token> {
    infix_to_postfix(infix_tokens)
}
