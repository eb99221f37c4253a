//! Integration tests for the read-eval-print loop.
//!
//! Whole sessions run against in-memory input and output.

use std::io::{self, BufReader, Cursor, ErrorKind, Read};

use pretty_assertions::assert_eq;
use rpn_repl::run_loop;
use rpn_session::{HELP, Session};

const PROMPT: &str = "rpn> ";

/// Run a session over `input` and return everything written after the banner.
fn transcript(input: &str) -> (String, Session) {
    transcript_from(Cursor::new(input.as_bytes()))
}

fn transcript_from<R: io::BufRead>(input: R) -> (String, Session) {
    let mut session = Session::new();
    let mut output = Vec::new();
    run_loop(&mut session, input, &mut output).expect("writing to a Vec");
    let text = String::from_utf8(output).expect("output is UTF-8");
    let banner = format!("{HELP}\n");
    let rest = text
        .strip_prefix(&banner)
        .expect("banner comes first")
        .to_string();
    (rest, session)
}

#[test]
fn evaluates_and_prints_results() {
    let (out, session) = transcript("3 4 +\n");
    assert_eq!(out, format!("{PROMPT}= 7\n{PROMPT}"));
    assert!(!session.is_running());
}

#[test]
fn stack_persists_across_lines() {
    let (out, session) = transcript("2\n10\npow\np\n");
    assert_eq!(
        out,
        format!("{PROMPT}{PROMPT}{PROMPT}= 1024\n{PROMPT}top: 1024\n{PROMPT}")
    );
    assert_eq!(session.stack().as_slice(), &[1024.0]);
}

#[test]
fn quit_drops_rest_of_line_and_input() {
    let (out, session) = transcript("1 q 2\n3\n");
    assert_eq!(out, PROMPT);
    assert_eq!(session.stack().as_slice(), &[1.0]);
}

#[test]
fn empty_and_blank_lines_reprompt() {
    let (out, _) = transcript("\n   \t\n\r\n1 p\n");
    assert_eq!(out, format!("{PROMPT}{PROMPT}{PROMPT}{PROMPT}top: 1\n{PROMPT}"));
}

#[test]
fn crlf_line_endings() {
    let (out, _) = transcript("6 2 /\r\n");
    assert_eq!(out, format!("{PROMPT}= 3\n{PROMPT}"));
}

#[test]
fn errors_are_single_lines() {
    let (out, session) = transcript("5 0 / foo\n");
    assert_eq!(
        out,
        format!("{PROMPT}Error: division by zero\nError: invalid token 'foo'\n{PROMPT}")
    );
    assert_eq!(session.stack().as_slice(), &[5.0, 0.0]);
}

#[test]
fn commands_produce_feedback() {
    let (out, _) = transcript("1 2 3 s c p\n");
    let expected = format!(
        "{PROMPT}Stack:\n\
         8. 0.000000\n\
         7. 0.000000\n\
         6. 0.000000\n\
         5. 0.000000\n\
         4. 0.000000\n\
         3. 1.000000\n\
         2. 2.000000\n\
         1. 3.000000\n\
         [stack cleared]\n\
         [stack empty]\n\
         {PROMPT}"
    );
    assert_eq!(out, expected);
}

#[test]
fn help_reprints_banner() {
    let (out, _) = transcript("h\n");
    assert_eq!(out, format!("{PROMPT}{HELP}\n{PROMPT}"));
}

#[test]
fn end_of_input_without_newline() {
    let (out, session) = transcript("9 sqrt");
    assert_eq!(out, format!("{PROMPT}= 3\n{PROMPT}"));
    assert_eq!(session.stack().as_slice(), &[3.0]);
}

#[test]
fn invalid_utf8_only_spoils_its_token() {
    let (out, session) = transcript_from(Cursor::new(&b"1 \xff\n2 +\np\n"[..]));
    assert_eq!(
        out,
        format!(
            "{PROMPT}Error: invalid token '\u{FFFD}'\n\
             {PROMPT}= 3\n\
             {PROMPT}top: 3\n\
             {PROMPT}"
        )
    );
    assert_eq!(session.stack().as_slice(), &[3.0]);
}

/// Reader that is interrupted once before handing over its data.
struct InterruptedOnce {
    interrupted: bool,
    data: Cursor<&'static [u8]>,
}

impl Read for InterruptedOnce {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(ErrorKind::Interrupted.into());
        }
        self.data.read(buf)
    }
}

#[test]
fn interrupted_read_is_retried() {
    let reader = InterruptedOnce {
        interrupted: false,
        data: Cursor::new(&b"4 5 *\n"[..]),
    };
    let (out, session) = transcript_from(BufReader::new(reader));
    assert_eq!(out, format!("{PROMPT}= 20\n{PROMPT}"));
    assert_eq!(session.stack().as_slice(), &[20.0]);
}
