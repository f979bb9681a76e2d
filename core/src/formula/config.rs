//! Engine configuration: identifier scanning and enabled notations.

use serde::{Deserialize, Serialize};

/// How free variables are recognised in equation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierMode {
    /// Every ASCII letter is its own variable (`ab` is `a` times `b`)
    #[default]
    SingleLetter,
    /// A maximal run of non-digit, non-operator, non-whitespace characters
    Run,
}

impl IdentifierMode {
    /// Whether `c` can be part of an identifier in this mode
    pub fn is_identifier_char(&self, c: char) -> bool {
        match self {
            Self::SingleLetter => c.is_ascii_alphabetic(),
            Self::Run => {
                !c.is_ascii_digit()
                    && !c.is_whitespace()
                    && !matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '|' | '.' | ',' | '√' | '^')
            }
        }
    }
}

/// Supported mathematical notations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// `|expr|` becomes `abs(expr)`
    AbsoluteValue,
    /// `√term` becomes `sqrt(term)`
    Radical,
}

impl Notation {
    /// All notations in application order
    pub const ALL: [Notation; 2] = [Notation::AbsoluteValue, Notation::Radical];

    /// Character that introduces the notation in equation text
    pub const fn symbol(&self) -> char {
        match self {
            Self::AbsoluteValue => '|',
            Self::Radical => '√',
        }
    }

    /// Evaluator function the notation maps onto
    pub fn function(&self) -> &'static str {
        match self {
            Self::AbsoluteValue => "abs",
            Self::Radical => "sqrt",
        }
    }
}

/// Configuration carried by every expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormulaConfig {
    pub identifiers: IdentifierMode,
    pub notations: Vec<Notation>,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            identifiers: IdentifierMode::SingleLetter,
            notations: Notation::ALL.to_vec(),
        }
    }
}

impl FormulaConfig {
    /// Parse a JSON configuration document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_enabled(&self, notation: Notation) -> bool {
        self.notations.contains(&notation)
    }

    /// Enabled notations in the fixed application order
    pub fn enabled_notations(&self) -> impl Iterator<Item = Notation> + '_ {
        Notation::ALL.into_iter().filter(|n| self.is_enabled(*n))
    }
}
