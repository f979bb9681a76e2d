//! Formula substitution and evaluation engine.
//!
//! An equation string is scanned once for its free variables. Evaluation
//! runs three stages over fresh strings:
//! - substitution of bound values (with implicit multiplication and sign folding)
//! - translation of `|..|` and `√` notation into `abs(..)` and `sqrt(..)`
//! - parsing and evaluation of the resulting computable form

pub mod config;
pub mod error;
pub mod expression;
pub mod substitution;
pub mod notation;
pub mod parser;
pub mod evaluator;

#[cfg(test)]
mod tests;

pub use config::{FormulaConfig, IdentifierMode, Notation};
pub use error::{FormulaError, SyntaxError};
pub use expression::{evaluate, rewrite, Expression};
pub use substitution::{bind, fold_signs, substitute, Bindings};
pub use notation::translate;
pub use parser::{parse_computable, Expr};
pub use evaluator::evaluate_source;
