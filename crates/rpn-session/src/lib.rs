//! RPN Session - token dispatch and session state for the calculator.
//!
//! This crate provides the [`Session`] struct, which owns the operand stack
//! and routes each token to a command, an operator library, or the number
//! parser.
//!
//! # Quick Start
//!
//! ```
//! use rpn_session::{Outcome, Session};
//!
//! let mut session = Session::new();
//! let results = session.eval_line("3 4 +");
//! assert_eq!(results.last(), Some(&Ok(Outcome::Computed(7.0))));
//! ```

mod config;
mod dispatch;
mod render;
mod session;

pub use config::SessionConfig;
pub use dispatch::{Command, Token, classify, split_tokens};
pub use render::{HELP, render_error};
pub use rpn_vm::{EvalError, Stack, StackError};
pub use session::{Outcome, Session, SessionState};
