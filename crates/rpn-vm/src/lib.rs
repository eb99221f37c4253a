//! RPN Virtual Machine
//!
//! The machine state of the calculator is a single bounded operand stack.
//! This crate owns that stack and the error taxonomy every evaluation step
//! reports through. Operator semantics live in `rpn-stdlib`; token routing
//! lives in `rpn-session`.

mod error;
mod stack;
mod value;

pub use error::{EvalError, StackError};
pub use stack::{DEFAULT_CAPACITY, Operands, Stack};
pub use value::{format_fixed, format_real};
