//! Translation of mathematical notation into computable form.
//!
//! Supports:
//! - Absolute-value bars: `|expr|` → `abs(expr)` (shortest run between bars)
//! - Radical sign: `√term` → `sqrt(term)` where term is a parenthesised
//!   group, a (signed) literal, a function call or another radical
//!
//! Positions in errors refer to the substituted source.

use super::config::{FormulaConfig, Notation};
use super::error::{FormulaError, SyntaxError};

const BAR: char = Notation::AbsoluteValue.symbol();
const RADICAL: char = Notation::Radical.symbol();

/// Apply every enabled notation to `source`
pub fn translate(source: &str, config: &FormulaConfig) -> Result<String, FormulaError> {
    let mut out = source.to_string();
    for notation in config.enabled_notations() {
        out = match notation {
            Notation::AbsoluteValue => translate_bars(&out)?,
            Notation::Radical => translate_radicals(&out)?,
        };
    }
    Ok(out)
}

fn translate_bars(source: &str) -> Result<String, FormulaError> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != BAR {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let close = chars[i + 1..]
            .iter()
            .position(|&c| c == BAR)
            .map(|p| i + 1 + p)
            .ok_or(FormulaError::UnbalancedDelimiter { delimiter: BAR, position: i })?;

        let inner: String = chars[i + 1..close].iter().collect();
        if inner.trim().is_empty() {
            return Err(SyntaxError::new("Empty absolute-value bars", i, "||").into());
        }

        out.push_str(Notation::AbsoluteValue.function());
        out.push('(');
        out.push_str(&inner);
        out.push(')');
        i = close + 1;
    }

    Ok(out)
}

fn translate_radicals(source: &str) -> Result<String, FormulaError> {
    let chars: Vec<char> = source.chars().collect();
    translate_radical_range(&chars, 0, chars.len())
}

fn translate_radical_range(chars: &[char], start: usize, end: usize) -> Result<String, FormulaError> {
    let mut out = String::new();
    let mut i = start;

    while i < end {
        if chars[i] == RADICAL {
            let (term, next) = radical_term(chars, i, end)?;
            out.push_str(&term);
            i = next;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    Ok(out)
}

/// Translate the radical at `at`; returns `sqrt(..)` and the index after its operand
fn radical_term(chars: &[char], at: usize, end: usize) -> Result<(String, usize), FormulaError> {
    let sqrt = Notation::Radical.function();
    let mut i = at + 1;
    while i < end && chars[i].is_whitespace() {
        i += 1;
    }
    if i >= end {
        return Err(SyntaxError::new("Radical without operand", at, RADICAL.to_string()).into());
    }

    let c = chars[i];

    if c == '(' {
        let close = matching_paren(chars, i, end)
            .ok_or_else(|| SyntaxError::new("Unmatched '(' after radical", i, "("))?;
        let inner = translate_radical_range(chars, i + 1, close)?;
        return Ok((format!("{}({})", sqrt, inner), close + 1));
    }

    if c == RADICAL {
        let (inner, next) = radical_term(chars, i, end)?;
        return Ok((format!("{}({})", sqrt, inner), next));
    }

    // Optional sign, then a literal or a word; folded signs leave a space
    let sign = if c == '-' || c == '+' { Some(c) } else { None };
    let mut body = if sign.is_some() { i + 1 } else { i };
    while sign.is_some() && body < end && chars[body].is_whitespace() {
        body += 1;
    }
    if body >= end {
        return Err(SyntaxError::new("Radical without operand", i, c.to_string()).into());
    }
    let b = chars[body];
    let signed = |j: usize| -> String {
        sign.into_iter().chain(chars[body..j].iter().copied()).collect()
    };

    if b.is_ascii_digit() || b == '.' {
        let mut j = body + 1;
        while j < end && (chars[j].is_ascii_digit() || chars[j] == '.') {
            j += 1;
        }
        let literal = signed(j);
        return Ok((format!("{}({})", sqrt, literal), j));
    }

    if b.is_ascii_alphabetic() {
        let mut j = body;
        while j < end && chars[j].is_ascii_alphabetic() {
            j += 1;
        }
        if j < end && chars[j] == '(' {
            let close = matching_paren(chars, j, end)
                .ok_or_else(|| SyntaxError::new("Unmatched '(' after radical", j, "("))?;
            let head = signed(j);
            let inner = translate_radical_range(chars, j + 1, close)?;
            return Ok((format!("{}({}({}))", sqrt, head, inner), close + 1));
        }
        // inf / NaN
        let word = signed(j);
        return Ok((format!("{}({})", sqrt, word), j));
    }

    Err(SyntaxError::new("Radical without operand", i, c.to_string()).into())
}

fn matching_paren(chars: &[char], open: usize, end: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, &c) in chars.iter().enumerate().take(end).skip(open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
