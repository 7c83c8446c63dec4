//! # Expression Evaluation
//!
//! Walks a parsed [`Expr`] against an [`Environment`]. Variables resolve
//! only from the environment; calls resolve only to [`Builtin`] entries.
//!
//! [`Builtin`]: super::functions::Builtin

use super::ast::{BinaryOp, Expr, UnaryOp};
use crate::env::Environment;
use crate::error::EvalError;

/// Evaluate an expression tree.
///
/// ## Example
///
/// ```rust
/// use gdl_script::expr::{eval::eval, parse};
/// use gdl_script::Environment;
///
/// let mut env = Environment::new();
/// env.set("A", 4.0);
/// let expr = parse("SQRT(a) * 3").unwrap();
/// assert_eq!(eval(&expr, &env).unwrap(), 6.0);
/// ```
pub fn eval(expr: &Expr, env: &Environment) -> Result<f64, EvalError> {
    match expr {
        Expr::Number(value) => Ok(*value),
        Expr::Variable(name) => env
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable(name.clone())),
        Expr::Unary { op, operand } => {
            let value = eval(operand, env)?;
            Ok(match op {
                UnaryOp::Plus => value,
                UnaryOp::Minus => -value,
            })
        }
        Expr::Binary { op, left, right } => {
            let lhs = eval(left, env)?;
            let rhs = eval(right, env)?;
            apply_binary(*op, lhs, rhs)
        }
        Expr::Call { function, args } => {
            let values = args
                .iter()
                .map(|arg| eval(arg, env))
                .collect::<Result<Vec<_>, _>>()?;
            function.apply(&values)
        }
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOp::Add => Ok(lhs + rhs),
        BinaryOp::Sub => Ok(lhs - rhs),
        BinaryOp::Mul => Ok(lhs * rhs),
        BinaryOp::Div => {
            nonzero(rhs)?;
            Ok(lhs / rhs)
        }
        BinaryOp::FloorDiv => {
            nonzero(rhs)?;
            Ok((lhs / rhs).floor())
        }
        BinaryOp::Mod => {
            nonzero(rhs)?;
            Ok(floored_mod(lhs, rhs))
        }
        BinaryOp::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            let value = lhs.powf(rhs);
            if value.is_nan() && !lhs.is_nan() && !rhs.is_nan() {
                return Err(EvalError::Domain(op.symbol().to_string()));
            }
            Ok(value)
        }
    }
}

fn nonzero(divisor: f64) -> Result<(), EvalError> {
    if divisor == 0.0 {
        Err(EvalError::DivisionByZero)
    } else {
        Ok(())
    }
}

/// Remainder carrying the sign of the divisor.
fn floored_mod(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        rem + rhs
    } else {
        rem
    }
}

// =============================================================================
// TESTS
// =============================================================================
