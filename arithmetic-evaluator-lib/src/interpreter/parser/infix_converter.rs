use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

pub(super) fn infix_to_postfix(tokens: Vec<Token>) -> Vec<Token> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Number(_) => {
                if !token.is_valid_number() {
                    trace!("forwarding malformed number {:?}", token);
                }
                output.push(token)
            }
            Token::LeftParentheses => operators.push(token),
            Token::Operator(operator) => parse_operator_token(&mut operators, &mut output, operator),
            Token::RightParentheses => parse_closing_parenthesis_token(&mut operators, &mut output),
        };
    }

    transfer_leftover_operators(&mut operators, &mut output);

    trace!("postfix order {:?}", output);
    output
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParentheses => trace!("discarding unclosed parenthesis"),
            operator => output.push(operator),
        }
    }
}

fn parse_closing_parenthesis_token(operators: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top_of_operator_stack) = operators.pop() {
        if top_of_operator_stack == Token::LeftParentheses {
            // Discard the open parenthesis.
            return;
        }
        output.push(top_of_operator_stack);
    }
    trace!("ignoring unopened closing parenthesis");
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    while let Some(Token::Operator(other_operator)) = operators.last() {
        if !yields_to(other_operator, &operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(operator.token());
}

/// Whether `stacked`, waiting on the operator stack, must be output before `incoming` is pushed.
/// Every operator is left-associative, so equal precedence is output first.
fn yields_to(stacked: &BinaryOperator, incoming: &BinaryOperator) -> bool {
    stacked.precedence_ge(incoming)
}
