//! Numeric evaluation of computable form.
//!
//! Arithmetic follows IEEE-754: division by zero yields `inf`/`NaN` and
//! `sqrt` of a negative yields `NaN`. Only malformed input is an error.

use super::error::FormulaError;
use super::parser::{parse_computable, BinaryOperator, Expr, Function, UnaryOperator};

/// Evaluate a parsed expression
pub fn eval_expr(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,

        Expr::BinaryOp { op, left, right } => {
            let l = eval_expr(left);
            let r = eval_expr(right);

            match op {
                BinaryOperator::Add => l + r,
                BinaryOperator::Sub => l - r,
                BinaryOperator::Mul => l * r,
                BinaryOperator::Div => l / r,
                BinaryOperator::Pow => l.powf(r),
            }
        }

        Expr::UnaryOp { op, operand } => {
            let val = eval_expr(operand);
            match op {
                UnaryOperator::Neg => -val,
                UnaryOperator::Plus => val,
            }
        }

        Expr::FnCall { function, arg } => {
            let val = eval_expr(arg);
            match function {
                Function::Sqrt => val.sqrt(),
                Function::Abs => val.abs(),
            }
        }
    }
}

/// Parse and evaluate a computable-form string
pub fn evaluate_source(computable: &str) -> Result<f64, FormulaError> {
    let expr = parse_computable(computable)?;
    Ok(eval_expr(&expr))
}
