use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::trace;
use std::iter::Peekable;
use std::str::Chars;

/// Characters that, when directly preceding a `-`, make that `-` the sign of a number.
const SIGN_CONTEXT: [char; 6] = ['(', ')', '+', '-', '*', '/'];

/// Splits the given expression into tokens, in input order.
///
/// Lexing never fails. Characters that can not start a token are dropped, and
/// number literals are not validated here, so `1.2.3` becomes a single number token.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The tokens of the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = tokenize("3*-2");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], Token::new_number("-2"));
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut characters = expression.chars().peekable();
    let mut previous: Option<char> = None;

    while let Some(character) = characters.next() {
        let starts_number = is_number_character(character)
            || (character == '-' && is_sign(previous, characters.peek()));
        let mut last_consumed = character;
        match character {
            character if character.is_whitespace() => {}
            character if starts_number => {
                let number = take_number(character, &mut characters);
                last_consumed = last_character(&number, character);
                tokens.push(Token::Number(number));
            }
            '(' => tokens.push(Token::LeftParentheses),
            ')' => tokens.push(Token::RightParentheses),
            character => {
                if let Some(operator) = BinaryOperator::from_symbol(character) {
                    tokens.push(Token::Operator(operator));
                }
            }
        }
        previous = Some(last_consumed);
    }

    trace!("tokenized {:?} into {:?}", expression, tokens);
    tokens
}

/// A `-` is a sign when it opens the input or directly follows an operator or
/// parenthesis, and a digit or decimal point comes right after it.
fn is_sign(previous: Option<char>, next: Option<&char>) -> bool {
    let in_sign_context = match previous {
        None => true,
        Some(previous) => SIGN_CONTEXT.contains(&previous),
    };
    in_sign_context && next.map_or(false, |next| is_number_character(*next))
}

fn is_number_character(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn take_number(first: char, characters: &mut Peekable<Chars>) -> String {
    let mut number = String::from(first);
    number.extend(characters.peeking_take_while(|character| is_number_character(*character)));
    number
}

fn last_character(text: &str, fallback: char) -> char {
    text.chars().last().unwrap_or(fallback)
}
