//! Variable substitution.
//!
//! Rewrites equation text so every variable reference becomes its bound
//! numeric value:
//! - a `*` is inserted wherever a variable touches another variable or a
//!   word character (`2x` → `2*3`, `xy` → `2*3`, `xvy` → `1*2*3`)
//! - adjacent sign pairs left behind by negative values are folded
//!   (`+ -` → `- `, `- -` → `+ `)

use super::config::IdentifierMode;
use super::expression::Expression;
use std::collections::HashMap;

/// Variable name to value
pub type Bindings = HashMap<String, f64>;

/// Build a binding map from `(name, value)` pairs
pub fn bind<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Bindings {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// A piece of equation text: either one identifier or one literal char
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Segment<'a> {
    Var(&'a str),
    Text(char),
}

impl Segment<'_> {
    fn is_var(&self) -> bool {
        matches!(self, Segment::Var(_))
    }

    fn is_wordlike(&self) -> bool {
        match self {
            Segment::Var(_) => true,
            Segment::Text(c) => c.is_ascii_alphanumeric() || *c == '_',
        }
    }
}

/// Split equation text into identifier and literal segments
pub(crate) fn segments(source: &str, mode: IdentifierMode) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !mode.is_identifier_char(c) {
            out.push(Segment::Text(c));
            continue;
        }

        let mut end = start + c.len_utf8();
        if mode == IdentifierMode::Run {
            while let Some(&(i, next)) = chars.peek() {
                if !mode.is_identifier_char(next) {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
        }
        out.push(Segment::Var(&source[start..end]));
    }

    out
}

/// Unique identifiers in first-seen order
pub(crate) fn discover_variables(source: &str, mode: IdentifierMode) -> Vec<String> {
    let mut variables: Vec<String> = Vec::new();
    for segment in segments(source, mode) {
        if let Segment::Var(name) = segment {
            if !variables.iter().any(|v| v == name) {
                variables.push(name.to_string());
            }
        }
    }
    variables
}

/// Textual form of a bound value
pub(crate) fn format_value(value: f64) -> String {
    value.to_string()
}

fn needs_multiplication(left: &Segment<'_>, right: &Segment<'_>) -> bool {
    (left.is_var() || right.is_var()) && left.is_wordlike() && right.is_wordlike()
}

/// Replace every variable of `expression` with its bound value.
///
/// Unbound variables are replaced with `0`; bindings for names the
/// expression does not use are ignored.
pub fn substitute(expression: &Expression, bindings: &Bindings) -> String {
    let source = expression.source();
    let segments = segments(source, expression.config().identifiers);
    let mut out = String::with_capacity(source.len() * 2);

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 && needs_multiplication(&segments[i - 1], segment) {
            out.push('*');
        }
        match segment {
            Segment::Var(name) => {
                let value = bindings.get(*name).copied().unwrap_or(0.0);
                out.push_str(&format_value(value));
            }
            Segment::Text(c) => out.push(*c),
        }
    }

    fold_signs(&out)
}

/// Collapse `+ -` into `- ` and `- -` into `+ ` until none remain
pub fn fold_signs(source: &str) -> String {
    let mut current = source.to_string();
    loop {
        let (folded, changed) = fold_pass(&current);
        if !changed {
            return folded;
        }
        current = folded;
    }
}

fn fold_pass(source: &str) -> (String, bool) {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut changed = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '+' || c == '-' {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if j < chars.len() && chars[j] == '-' {
                out.push(if c == '+' { '-' } else { '+' });
                out.push(' ');
                changed = true;
                i = j + 1;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    (out, changed)
}
