//! Immutable equation template with its ordered free variables.

use super::config::FormulaConfig;
use super::error::FormulaError;
use super::substitution::{self, Bindings};
use super::{evaluator, notation};
use serde::{Deserialize, Serialize};

/// An equation such as `"|ax + by + c| / √((a)**2 + (b)**2)"`.
///
/// Variables are discovered once at construction and never change; the same
/// expression can be evaluated any number of times with different bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawExpression", into = "RawExpression")]
pub struct Expression {
    source: String,
    variables: Vec<String>,
    config: FormulaConfig,
}

/// Serialized form; variables are re-derived on load
#[derive(Serialize, Deserialize)]
struct RawExpression {
    source: String,
    #[serde(default)]
    config: FormulaConfig,
}

impl TryFrom<RawExpression> for Expression {
    type Error = FormulaError;

    fn try_from(raw: RawExpression) -> Result<Self, Self::Error> {
        Expression::with_config(&raw.source, &raw.config)
    }
}

impl From<Expression> for RawExpression {
    fn from(expr: Expression) -> Self {
        Self {
            source: expr.source,
            config: expr.config,
        }
    }
}

impl Expression {
    /// Create an expression with the default configuration
    pub fn new(source: &str) -> Result<Self, FormulaError> {
        Self::with_config(source, &FormulaConfig::default())
    }

    /// Create an expression with an explicit configuration
    pub fn with_config(source: &str, config: &FormulaConfig) -> Result<Self, FormulaError> {
        if source.trim().is_empty() {
            return Err(FormulaError::InvalidEquation("Empty equation".to_string()));
        }

        let variables = substitution::discover_variables(source, config.identifiers);
        tracing::debug!("Parsed equation '{}' with variables {:?}", source, variables);

        Ok(Self {
            source: source.to_string(),
            variables,
            config: config.clone(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Free variables, unique, in first-seen order
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn config(&self) -> &FormulaConfig {
        &self.config
    }

    /// Source with bound values plugged in
    pub fn substitute(&self, bindings: &Bindings) -> String {
        substitution::substitute(self, bindings)
    }

    /// Substituted and translated source, ready for evaluation
    pub fn rewrite(&self, bindings: &Bindings) -> Result<String, FormulaError> {
        let substituted = self.substitute(bindings);
        notation::translate(&substituted, &self.config)
    }

    /// Numeric value under `bindings`
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64, FormulaError> {
        let computable = self.rewrite(bindings)?;
        tracing::trace!("Evaluating '{}' as '{}'", self.source, computable);
        evaluator::evaluate_source(&computable)
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for Expression {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::new(s)
    }
}

/// Evaluate `expression` under `bindings`
pub fn evaluate(expression: &Expression, bindings: &Bindings) -> Result<f64, FormulaError> {
    expression.evaluate(bindings)
}

/// Plugged-in form of `expression`, without evaluating it
pub fn rewrite(expression: &Expression, bindings: &Bindings) -> Result<String, FormulaError> {
    expression.rewrite(bindings)
}
