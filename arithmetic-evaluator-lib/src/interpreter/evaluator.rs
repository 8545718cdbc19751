use crate::interpreter::error::EvalError;
use crate::interpreter::token::{is_numeric_literal, Token};
use log::debug;

/// Reduces a postfix token sequence to a single value using a value stack.
///
/// Evaluation stops at the first problem: a malformed number, an operator
/// without two operands, or a stack that does not end with exactly one value.
/// Dividing by zero is not a problem, it yields positive infinity.
///
/// # Arguments
///
/// * `postfix_tokens`: Numbers and operators in postfix order.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::new_number("8"),
///     Token::new_number("3"),
///     "-".parse().unwrap(),
/// ];
/// assert_eq!(evaluate_postfix(&postfix_tokens), Ok(5.0));
/// ```
pub fn evaluate_postfix(postfix_tokens: &[Token]) -> Result<f64, EvalError> {
    let mut values: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Number(text) => values.push(parse_number(text)?),
            Token::Operator(operator) => {
                let (a, b) = match (values.pop(), values.pop()) {
                    (Some(b), Some(a)) => (a, b),
                    _ => return Err(EvalError::InsufficientOperands(operator.symbol())),
                };
                values.push(operator.evaluate(a, b));
            }
            Token::LeftParentheses | Token::RightParentheses => {
                return Err(EvalError::UnexpectedToken(token.to_string()))
            }
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        remaining => {
            debug!("evaluation left {} values: {:?}", remaining.len(), remaining);
            Err(EvalError::Incomplete(remaining.len()))
        }
    }
}

fn parse_number(text: &str) -> Result<f64, EvalError> {
    if !is_numeric_literal(text) {
        return Err(EvalError::MalformedNumber(text.to_string()));
    }
    text.parse::<f64>()
        .map_err(|_| EvalError::MalformedNumber(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> Token {
        Token::new_number(text)
    }

    fn operator(symbol: &str) -> Token {
        symbol.parse().unwrap()
    }

    #[test]
    fn single_number_evaluates_to_itself() {
        assert_eq!(evaluate_postfix(&[number("-2.5")]), Ok(-2.5));
    }

    #[test]
    fn trailing_decimal_point_is_a_valid_number() {
        assert_eq!(evaluate_postfix(&[number("5.")]), Ok(5.0));
    }

    #[test]
    fn operands_are_applied_in_push_order() {
        let postfix = [number("20"), number("4"), operator("/")];

        assert_eq!(evaluate_postfix(&postfix), Ok(5.0));
    }

    #[test]
    fn chained_operations_use_intermediate_results() {
        // (1 + 2) * 4 - 6
        let postfix = [
            number("1"),
            number("2"),
            operator("+"),
            number("4"),
            operator("*"),
            number("6"),
            operator("-"),
        ];

        assert_eq!(evaluate_postfix(&postfix), Ok(6.0));
    }

    #[test]
    fn division_by_zero_yields_infinity() {
        let postfix = [number("5"), number("0"), operator("/")];

        assert_eq!(evaluate_postfix(&postfix), Ok(f64::INFINITY));
    }

    #[test]
    fn malformed_number_fails() {
        let postfix = [number("1.2.3"), number("1"), operator("+")];

        assert_eq!(
            evaluate_postfix(&postfix),
            Err(EvalError::MalformedNumber("1.2.3".to_string()))
        );
    }

    #[test]
    fn number_without_leading_digit_is_malformed() {
        assert_eq!(
            evaluate_postfix(&[number(".5")]),
            Err(EvalError::MalformedNumber(".5".to_string()))
        );
    }

    #[test]
    fn operator_without_two_operands_fails() {
        assert_eq!(
            evaluate_postfix(&[operator("+")]),
            Err(EvalError::InsufficientOperands('+'))
        );
        assert_eq!(
            evaluate_postfix(&[number("1"), operator("*")]),
            Err(EvalError::InsufficientOperands('*'))
        );
    }

    #[test]
    fn leftover_values_fail() {
        assert_eq!(
            evaluate_postfix(&[number("1"), number("2")]),
            Err(EvalError::Incomplete(2))
        );
    }

    #[test]
    fn no_values_fail() {
        assert_eq!(evaluate_postfix(&[]), Err(EvalError::Incomplete(0)));
    }

    #[test]
    fn parenthesis_in_postfix_input_fails() {
        assert_eq!(
            evaluate_postfix(&[Token::LeftParentheses]),
            Err(EvalError::UnexpectedToken("(".to_string()))
        );
    }
}
