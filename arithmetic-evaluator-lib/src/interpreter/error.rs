use thiserror::Error;

/// Why an expression could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("the expression contains nothing to evaluate")]
    Empty,
    #[error("malformed number `{0}`")]
    MalformedNumber(String),
    #[error("operator `{0}` is missing an operand")]
    InsufficientOperands(char),
    #[error("expected a single result, but {0} values remained")]
    Incomplete(usize),
    #[error("the result is not a number")]
    NotFinite,
    /// Only parentheses can cause this, and the parser never emits them.
    #[error("unexpected token `{0}` in postfix expression")]
    UnexpectedToken(String),
}
