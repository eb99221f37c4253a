//! Text rendering of outcomes and errors.

use rpn_vm::{EvalError, format_fixed, format_real};

use crate::session::Outcome;

/// Usage text, printed at start-up and by `h`.
pub const HELP: &str = "\
RPN calculator (Reverse Polish Notation)
Usage: space-separated tokens. Example: 3 4 +
Operators: +  -  *  /
Functions: sqrt  sin  cos  tan  pow
  - sin/cos/tan take DEGREES
Commands:
  p  -> show top of stack
  s  -> show stack
  c  -> clear stack
  q  -> quit
  h  -> help";

impl Outcome {
    /// Text to print for this outcome, if any.
    ///
    /// Literal pushes are silent; everything else yields one or more lines
    /// without a trailing newline.
    pub fn render(&self) -> Option<String> {
        match self {
            Outcome::Pushed(_) | Outcome::Quit => None,
            Outcome::Computed(value) => Some(format!("= {}", format_real(*value))),
            Outcome::Help => Some(HELP.to_string()),
            Outcome::Cleared => Some("[stack cleared]".to_string()),
            Outcome::Top(Some(value)) => Some(format!("top: {}", format_real(*value))),
            Outcome::Top(None) => Some("[stack empty]".to_string()),
            Outcome::Window(slots) => {
                let mut out = String::from("Stack:");
                for (pos, value) in slots {
                    out.push_str(&format!("\n{pos}. {}", format_fixed(*value)));
                }
                Some(out)
            }
        }
    }
}

/// Text to print for an evaluation error.
pub fn render_error(error: &EvalError) -> String {
    format!("Error: {error}")
}
