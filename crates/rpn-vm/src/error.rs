use thiserror::Error;

use crate::value::format_real;

/// Stack operation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum StackError {
    /// Stack underflow - tried to pop from empty stack.
    #[error("stack underflow")]
    Underflow,
    /// Stack overflow - already holding `capacity` values.
    #[error("stack overflow")]
    Overflow,
}

/// Error reported while evaluating a single token.
///
/// Every variant is recoverable. By the time one of these is returned the
/// stack is exactly as it was before the token was seen.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// An operator needed more operands than the stack held.
    #[error("not enough operands for '{op}' (needs {needed}, have {found})")]
    InsufficientOperands {
        op: &'static str,
        needed: usize,
        found: usize,
    },
    /// Divisor was exactly zero.
    #[error("division by zero")]
    DivisionByZero,
    /// `sqrt` of a negative number.
    #[error("square root of negative number {}", format_real(*.0))]
    NegativeSqrtOperand(f64),
    /// A literal (`result: false`) or a computed result (`result: true`)
    /// did not fit on the stack.
    #[error("{}", stack_full_message(*.value, *.result))]
    StackFull { value: f64, result: bool },
    /// Token is not a command, operator, function or number.
    #[error("invalid token '{0}'")]
    InvalidToken(String),
    /// An operator reached a library that does not implement it.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

fn stack_full_message(value: f64, result: bool) -> String {
    if result {
        format!("stack full (could not store result {})", format_real(value))
    } else {
        format!("stack full (could not push {})", format_real(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_full_names_what_was_lost() {
        let literal = EvalError::StackFull {
            value: 2.5,
            result: false,
        };
        let result = EvalError::StackFull {
            value: 7.0,
            result: true,
        };
        assert_eq!(literal.to_string(), "stack full (could not push 2.5)");
        assert_eq!(result.to_string(), "stack full (could not store result 7)");
    }
}
