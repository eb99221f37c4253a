//! Arithmetic operations library.
//!
//! Provides:
//! - +, -, *, / (binary operators)
//! - pow (binary function)
//!
//! Operands are taken as `a b`, with `b` the most recently pushed, and the
//! result is `a OP b`.

use rpn_vm::EvalError;

use crate::library::{CommandInfo, CommandKind, ExecuteContext, ExecuteResult, LibId, Library};

/// Arithmetic library ID.
pub const ARITH_LIB: LibId = 64;

/// Arithmetic library command IDs.
pub mod cmd {
    pub const ADD: u16 = 0;
    pub const SUB: u16 = 1;
    pub const MUL: u16 = 2;
    pub const DIV: u16 = 3;
    pub const POW: u16 = 16;
}

/// Arithmetic operations library.
#[derive(Clone, Copy)]
pub struct ArithLib;

impl Library for ArithLib {
    fn id(&self) -> LibId {
        ARITH_LIB
    }

    fn name(&self) -> &'static str {
        "Arithmetic"
    }

    fn commands(&self) -> Vec<CommandInfo> {
        use CommandKind::{BinaryFunction, BinaryOperator};
        vec![
            CommandInfo::new("+", ARITH_LIB, cmd::ADD, BinaryOperator),
            CommandInfo::new("-", ARITH_LIB, cmd::SUB, BinaryOperator),
            CommandInfo::new("*", ARITH_LIB, cmd::MUL, BinaryOperator),
            CommandInfo::new("/", ARITH_LIB, cmd::DIV, BinaryOperator),
            CommandInfo::new("pow", ARITH_LIB, cmd::POW, BinaryFunction),
        ]
    }

    fn execute(&self, ctx: &mut ExecuteContext) -> ExecuteResult {
        match ctx.cmd.cmd_id {
            cmd::ADD => binary_real_op(ctx, |a, b| Ok(a + b)),
            cmd::SUB => binary_real_op(ctx, |a, b| Ok(a - b)),
            cmd::MUL => binary_real_op(ctx, |a, b| Ok(a * b)),
            cmd::DIV => binary_real_op(ctx, |a, b| {
                if b == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }),
            cmd::POW => binary_real_op(ctx, |base, exponent| Ok(base.powf(exponent))),
            _ => {
                let unknown = ctx.unknown();
                ctx.apply(|_| Err(unknown))
            }
        }
    }
}

fn binary_real_op<F>(ctx: &mut ExecuteContext, op: F) -> ExecuteResult
where
    F: FnOnce(f64, f64) -> ExecuteResult,
{
    ctx.apply_n(2, |operands| op(operands[0], operands[1]))
}
