//! RPN calculator - interactive read-eval-print loop.
//!
//! Reads whitespace-separated tokens from stdin, one line at a time, until
//! `q` or end of input.

use std::process::ExitCode;

fn main() -> ExitCode {
    rpn_repl::init_tracing();
    if let Err(e) = rpn_repl::run() {
        // A dead output stream ends the session like end of input does.
        tracing::error!(error = %e, "session ended on I/O error");
    }
    ExitCode::SUCCESS
}
