//! Library for transcendental functions.
//!
//! This library provides:
//! - Trigonometric: SIN, COS, TAN (angles in degrees)
//! - Other: SQRT

use rpn_vm::EvalError;

use crate::library::{CommandInfo, CommandKind, ExecuteContext, ExecuteResult, LibId, Library};

/// Transcendentals library ID.
pub const TRANSCENDENTALS_LIB: LibId = 66;

/// Transcendentals library command IDs.
pub mod cmd {
    pub const SIN: u16 = 0;
    pub const COS: u16 = 1;
    pub const TAN: u16 = 2;
    pub const SQRT: u16 = 17;
}

#[derive(Clone, Copy)]
pub struct TranscendentalsLib;

impl Library for TranscendentalsLib {
    fn id(&self) -> LibId {
        TRANSCENDENTALS_LIB
    }

    fn name(&self) -> &'static str {
        "Transcendentals"
    }

    fn commands(&self) -> Vec<CommandInfo> {
        use CommandKind::UnaryFunction;
        vec![
            CommandInfo::new("sqrt", TRANSCENDENTALS_LIB, cmd::SQRT, UnaryFunction),
            CommandInfo::new("sin", TRANSCENDENTALS_LIB, cmd::SIN, UnaryFunction),
            CommandInfo::new("cos", TRANSCENDENTALS_LIB, cmd::COS, UnaryFunction),
            CommandInfo::new("tan", TRANSCENDENTALS_LIB, cmd::TAN, UnaryFunction),
        ]
    }

    fn execute(&self, ctx: &mut ExecuteContext) -> ExecuteResult {
        match ctx.cmd.cmd_id {
            cmd::SQRT => unary_real_op(ctx, |n| {
                if n < 0.0 {
                    Err(EvalError::NegativeSqrtOperand(n))
                } else {
                    Ok(n.sqrt())
                }
            }),
            cmd::SIN => unary_real_op(ctx, |deg| Ok(deg.to_radians().sin())),
            cmd::COS => unary_real_op(ctx, |deg| Ok(deg.to_radians().cos())),
            cmd::TAN => unary_real_op(ctx, |deg| Ok(deg.to_radians().tan())),
            _ => {
                let unknown = ctx.unknown();
                ctx.apply(|_| Err(unknown))
            }
        }
    }
}

/// Helper for unary operations on real numbers.
fn unary_real_op<F>(ctx: &mut ExecuteContext, op: F) -> ExecuteResult
where
    F: FnOnce(f64) -> ExecuteResult,
{
    ctx.apply_n(1, |operands| op(operands[0]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::LibraryRegistry;
    use pretty_assertions::assert_eq;
    use rpn_vm::Stack;

    const EPSILON: f64 = 1e-12;

    fn run(values: &[f64], name: &str) -> (ExecuteResult, Vec<f64>) {
        let mut registry = LibraryRegistry::new();
        registry.add(TranscendentalsLib);
        let mut stack = Stack::new();
        for &v in values {
            stack.push(v).unwrap();
        }
        let cmd = *registry.lookup(name).unwrap();
        let result = registry.execute(&cmd, &mut stack);
        (result, stack.as_slice().to_vec())
    }

    fn approx(result: ExecuteResult, expected: f64) {
        let value = result.unwrap();
        assert!(
            (value - expected).abs() < EPSILON,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn sqrt() {
        assert_eq!(run(&[4.0], "sqrt"), (Ok(2.0), vec![2.0]));
        assert_eq!(run(&[0.0], "sqrt"), (Ok(0.0), vec![0.0]));
    }

    #[test]
    fn sqrt_of_negative_restores_operand() {
        assert_eq!(
            run(&[-4.0], "sqrt"),
            (Err(EvalError::NegativeSqrtOperand(-4.0)), vec![-4.0])
        );
    }

    #[test]
    fn trig_uses_degrees() {
        approx(run(&[90.0], "sin").0, 1.0);
        approx(run(&[30.0], "sin").0, 0.5);
        approx(run(&[60.0], "cos").0, 0.5);
        approx(run(&[180.0], "cos").0, -1.0);
        approx(run(&[45.0], "tan").0, 1.0);
    }

    #[test]
    fn trig_of_zero() {
        assert_eq!(run(&[0.0], "sin").0, Ok(0.0));
        assert_eq!(run(&[0.0], "cos").0, Ok(1.0));
        assert_eq!(run(&[0.0], "tan").0, Ok(0.0));
    }

    #[test]
    fn empty_stack() {
        assert_eq!(
            run(&[], "cos"),
            (
                Err(EvalError::InsufficientOperands {
                    op: "cos",
                    needed: 1,
                    found: 0
                }),
                vec![]
            )
        );
    }

    #[test]
    fn only_top_is_consumed() {
        assert_eq!(run(&[7.0, 9.0], "sqrt"), (Ok(3.0), vec![7.0, 3.0]));
    }
}
