use crate::interpreter::operator::BinaryOperator;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::fmt::Formatter;
use std::str;

lazy_static! {
    /// An optionally negated run of digits with at most one decimal point after them.
    static ref NUMERIC_LITERAL: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]*)?$").unwrap();
}

/// A discrete part of an expression.
///
/// Numbers keep their source text; it is only parsed when the expression is evaluated.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Number(String),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
}

pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

impl Token {
    pub fn new_number(text: impl Into<String>) -> Token {
        Token::Number(text.into())
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    /// Whether this is a number whose text is a well-formed numeric literal.
    pub fn is_valid_number(&self) -> bool {
        match self {
            Token::Number(text) => is_numeric_literal(text),
            _ => false,
        }
    }
}

/// Checks `text` against the numeric literal pattern `-?[0-9]+(\.[0-9]*)?`.
pub fn is_numeric_literal(text: &str) -> bool {
    NUMERIC_LITERAL.is_match(text)
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = ();

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "" => Err(()),
            "+" => Ok(BinaryOperator::Add.token()),
            "-" => Ok(BinaryOperator::Subtract.token()),
            "*" => Ok(BinaryOperator::Multiply.token()),
            "/" => Ok(BinaryOperator::Divide.token()),
            "(" => Ok(Token::LeftParentheses),
            ")" => Ok(Token::RightParentheses),
            text => Ok(Token::new_number(text)),
        }
    }
}
