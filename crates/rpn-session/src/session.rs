use rpn_stdlib::{LibraryRegistry, register_standard_libs};
use rpn_vm::{EvalError, Stack};

use crate::config::SessionConfig;
use crate::dispatch::{Command, Token, classify, split_tokens};

/// Whether the session still accepts tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Running,
    /// Reached through `q` or end of input; nothing else is evaluated.
    Terminated,
}

/// Successful result of evaluating one token.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// A literal was pushed.
    Pushed(f64),
    /// An operator or function left this value on top.
    Computed(f64),
    /// Help was requested.
    Help,
    /// The stack was emptied.
    Cleared,
    /// Top of stack, or `None` when the stack is empty.
    Top(Option<f64>),
    /// `(position, value)` pairs from the highest position down to 1.
    Window(Vec<(usize, f64)>),
    /// The session ended.
    Quit,
}

/// A calculator session: one operand stack plus the operator libraries.
pub struct Session {
    config: SessionConfig,
    registry: LibraryRegistry,
    stack: Stack,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a new session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create a new session with custom configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        let mut registry = LibraryRegistry::new();
        register_standard_libs(&mut registry);

        Self {
            stack: Stack::with_capacity(config.stack_capacity),
            registry,
            state: SessionState::Running,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    /// Mark the session finished, as when input runs out.
    pub fn terminate(&mut self) {
        self.state = SessionState::Terminated;
    }

    /// Evaluate every token on a line, in order.
    ///
    /// Evaluation stops right after a quit; later tokens are never looked at.
    /// A terminated session evaluates nothing.
    pub fn eval_line(&mut self, line: &str) -> Vec<Result<Outcome, EvalError>> {
        let mut results = Vec::new();
        for token in split_tokens(line) {
            if !self.is_running() {
                break;
            }
            results.push(self.eval_token(token));
        }
        results
    }

    /// Evaluate a single token against the stack.
    ///
    /// On error the stack is left exactly as it was.
    pub fn eval_token(&mut self, token: &str) -> Result<Outcome, EvalError> {
        let kind = classify(&self.registry, token);
        tracing::debug!(token, ?kind, depth = self.stack.len(), "dispatch");

        match kind {
            Token::Command(cmd) => Ok(self.run_command(cmd)),
            Token::Operation(info) => self
                .registry
                .execute(&info, &mut self.stack)
                .map(Outcome::Computed),
            Token::Number(value) => match self.stack.push(value) {
                Ok(()) => Ok(Outcome::Pushed(value)),
                Err(_) => {
                    tracing::debug!(value, capacity = self.stack.capacity(), "stack full");
                    Err(EvalError::StackFull {
                        value,
                        result: false,
                    })
                }
            },
            Token::Invalid(text) => Err(EvalError::InvalidToken(text.to_string())),
        }
    }

    fn run_command(&mut self, cmd: Command) -> Outcome {
        match cmd {
            Command::Quit => {
                self.terminate();
                Outcome::Quit
            }
            Command::Help => Outcome::Help,
            Command::Clear => {
                self.stack.clear();
                Outcome::Cleared
            }
            Command::Peek => Outcome::Top(self.stack.top().ok()),
            Command::Show => Outcome::Window(self.stack.window(self.config.window_slots)),
        }
    }
}
