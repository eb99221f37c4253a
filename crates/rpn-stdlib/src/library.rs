//! Library infrastructure for operators and functions.
//!
//! Libraries provide:
//! - A command table (name, command ID, operand count)
//! - Runtime execution against the operand stack
//!
//! All execution goes through [`ExecuteContext::apply`], which owns the
//! rollback rule: operands are taken off the stack up front and put back, in
//! their original order, whenever the operation or the final push fails.

use std::collections::HashMap;

use rpn_vm::{EvalError, Operands, Stack};

/// Library identifier.
pub type LibId = u16;

/// Outcome of executing one command: the value left on top of the stack.
pub type ExecuteResult = Result<f64, EvalError>;

/// How a command is spelled and how many operands it takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    /// Named function of one operand (`sqrt`).
    UnaryFunction,
    /// Named function of two operands (`pow`).
    BinaryFunction,
    /// Single-character infix symbol of two operands (`+`).
    BinaryOperator,
}

impl CommandKind {
    /// Number of operands consumed.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::UnaryFunction => 1,
            CommandKind::BinaryFunction | CommandKind::BinaryOperator => 2,
        }
    }
}

/// Command metadata for registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command name (case-sensitive, exact match).
    pub name: &'static str,
    /// Library ID.
    pub lib_id: LibId,
    /// Command ID within the library.
    pub cmd_id: u16,
    /// Spelling category; fixes the operand count.
    pub kind: CommandKind,
}

impl CommandInfo {
    pub fn new(name: &'static str, lib_id: LibId, cmd_id: u16, kind: CommandKind) -> Self {
        Self {
            name,
            lib_id,
            cmd_id,
            kind,
        }
    }
}

/// A set of commands sharing an implementation.
pub trait Library {
    fn id(&self) -> LibId;

    fn name(&self) -> &'static str;

    /// Commands this library answers to.
    fn commands(&self) -> Vec<CommandInfo>;

    /// Execute `ctx.cmd` against the stack.
    fn execute(&self, ctx: &mut ExecuteContext) -> ExecuteResult;
}

/// Context handed to a library for one command.
pub struct ExecuteContext<'a> {
    /// The operand stack.
    pub stack: &'a mut Stack,
    /// The command being executed.
    pub cmd: &'a CommandInfo,
}

impl<'a> ExecuteContext<'a> {
    pub fn new(stack: &'a mut Stack, cmd: &'a CommandInfo) -> Self {
        Self { stack, cmd }
    }

    /// Run `op` over the command's operands and push its result.
    ///
    /// Operands are passed bottom first, so for `a b -` the slice is `[a, b]`.
    /// If the stack is short, nothing is touched. If `op` fails, or the
    /// result cannot be pushed, the operands go back exactly as they were.
    pub fn apply<F>(&mut self, op: F) -> ExecuteResult
    where
        F: FnOnce(&[f64]) -> ExecuteResult,
    {
        self.apply_n(self.cmd.kind.arity(), op)
    }

    /// [`ExecuteContext::apply`] with an explicit operand count.
    pub fn apply_n<F>(&mut self, arity: usize, op: F) -> ExecuteResult
    where
        F: FnOnce(&[f64]) -> ExecuteResult,
    {
        let name = self.cmd.name;
        let found = self.stack.len();
        let operands: Operands =
            self.stack
                .pop_many(arity)
                .map_err(|_| EvalError::InsufficientOperands {
                    op: name,
                    needed: arity,
                    found,
                })?;

        let result = match op(&operands) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(op = name, error = %e, "rolling back operands");
                self.stack.restore(operands);
                return Err(e);
            }
        };

        if self.stack.push(result).is_err() {
            tracing::debug!(op = name, result, "no room for result, rolling back");
            self.stack.restore(operands);
            return Err(EvalError::StackFull {
                value: result,
                result: true,
            });
        }

        tracing::trace!(op = name, result, depth = self.stack.len(), "applied");
        Ok(result)
    }

    /// The error for a command ID the library does not implement.
    pub fn unknown(&self) -> EvalError {
        EvalError::UnknownOperator(self.cmd.name.to_string())
    }
}

/// Registry of libraries and their commands.
pub struct LibraryRegistry {
    /// Command name → command metadata.
    commands: HashMap<&'static str, CommandInfo>,
    /// Registered libraries by ID.
    libraries: HashMap<LibId, Box<dyn Library>>,
}

impl Default for LibraryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            libraries: HashMap::new(),
        }
    }

    /// Register a library and all of its commands.
    pub fn add<T: Library + 'static>(&mut self, lib: T) {
        for cmd in lib.commands() {
            self.commands.insert(cmd.name, cmd);
        }
        self.libraries.insert(lib.id(), Box::new(lib));
    }

    /// Look up a command by its exact name.
    pub fn lookup(&self, name: &str) -> Option<&CommandInfo> {
        self.commands.get(name)
    }

    /// Get a library by ID.
    pub fn get(&self, lib_id: LibId) -> Option<&dyn Library> {
        self.libraries.get(&lib_id).map(|b| b.as_ref())
    }

    /// Execute a command against the stack.
    pub fn execute(&self, cmd: &CommandInfo, stack: &mut Stack) -> ExecuteResult {
        let mut ctx = ExecuteContext::new(stack, cmd);
        match self.get(cmd.lib_id) {
            Some(lib) => lib.execute(&mut ctx),
            // Still consume and restore, so a missing library behaves like any failed op.
            None => ctx.apply(|_| Err(EvalError::UnknownOperator(cmd.name.to_string()))),
        }
    }
}
