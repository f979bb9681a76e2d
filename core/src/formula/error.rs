//! Error types for the formula engine.

use thiserror::Error;

/// Syntax error in computable form, with location info
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    /// Char offset into the string being parsed
    pub position: usize,
    /// Offending token text (empty at end of input)
    pub fragment: String,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, position: usize, fragment: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            position,
            fragment: fragment.into(),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.fragment.is_empty() {
            write!(f, "Syntax error at position {}: {}", self.position, self.message)
        } else {
            write!(
                f,
                "Syntax error at position {} near '{}': {}",
                self.position, self.fragment, self.message
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Engine error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Empty or otherwise unusable equation text
    #[error("Invalid equation: {0}")]
    InvalidEquation(String),
    /// Absolute-value bar without a matching close
    #[error("Unbalanced delimiter '{delimiter}' at position {position}")]
    UnbalancedDelimiter { delimiter: char, position: usize },
    /// Computable form does not match the grammar
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FormulaError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEquation(_) => "INVALID_EQUATION",
            Self::UnbalancedDelimiter { .. } => "UNBALANCED_DELIMITER",
            Self::Syntax(_) => "SYNTAX_ERROR",
        }
    }
}
