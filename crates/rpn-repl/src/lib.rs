//! RPN REPL - line-oriented read-eval-print loop.
//!
//! The loop prints the help banner, then repeatedly writes the prompt, reads
//! one line and evaluates its tokens, writing results and errors in token
//! order. It ends on `q` or end of input.

use std::{
    io::{self, BufRead, ErrorKind, Write},
    sync::Once,
};

use rpn_session::{Outcome, Session, render_error};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Logs go to stderr, and only when `RUST_LOG` is set
/// (e.g. `RUST_LOG=rpn_stdlib=debug`). Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Run the REPL on stdin/stdout.
pub fn run() -> io::Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock())
}

/// Drive `session` from `input` until it terminates, writing to `output`.
///
/// Lines are read as bytes; invalid UTF-8 is replaced with U+FFFD, so a stray
/// byte only spoils the token it sits in. Interrupted reads are retried.
/// Any other I/O error is returned.
pub fn run_loop<R, W>(session: &mut Session, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", rpn_session::HELP)?;

    let mut buf = Vec::new();
    while session.is_running() {
        write!(output, "{}", session.config().prompt)?;
        output.flush()?;

        buf.clear();
        if read_line_bytes(&mut input, &mut buf)? == 0 {
            tracing::debug!("end of input");
            session.terminate();
            continue;
        }
        let line = String::from_utf8_lossy(&buf);
        eval_and_print(session, &line, &mut output)?;
    }

    output.flush()
}

/// Read one line into `buf`, including the newline if present.
fn read_line_bytes<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<usize> {
    loop {
        match input.read_until(b'\n', buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                tracing::trace!("read interrupted, retrying");
            }
            other => return other,
        }
    }
}

fn eval_and_print<W: Write>(session: &mut Session, line: &str, output: &mut W) -> io::Result<()> {
    for result in session.eval_line(line) {
        match result {
            Ok(Outcome::Quit) => tracing::debug!("quit requested"),
            Ok(outcome) => {
                if let Some(text) = outcome.render() {
                    writeln!(output, "{text}")?;
                }
            }
            Err(e) => writeln!(output, "{}", render_error(&e))?,
        }
    }
    Ok(())
}
