//! Indent detection
//!
//!     Lawtext does not fix the width of one indentation level. Instead, every document uses a
//!     single repeating whitespace string, and that string is inferred from the document itself:
//!
//!         1. Collect the leading whitespace of every line that has content after it.
//!         2. If there is none, the unit is one full-width space (a law with no nesting).
//!         3. Otherwise the shortest candidate wins; among equally short ones, the first seen.
//!
//!     A line's level is its leading whitespace divided by the unit. The division must be exact:
//!     a prefix that is not a repetition of the unit is an indentation inconsistency and is
//!     reported with the whitespace classes involved, since a stray tab or half-width space is
//!     invisible in most editors.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Indent unit assumed when no line is indented
pub const DEFAULT_INDENT_UNIT: &str = "\u{3000}";

static INDENT_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([ \t\u{3000}]+)[^ \t\u{3000}]").unwrap());

/// Infer the indent unit of a document.
pub fn detect_indent(lines: &[&str]) -> String {
    let candidates: IndexSet<&str> = lines
        .iter()
        .filter_map(|line| INDENT_PREFIX.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    candidates
        .into_iter()
        .min_by_key(|prefix| prefix.chars().count())
        .unwrap_or(DEFAULT_INDENT_UNIT)
        .to_string()
}

/// Leading whitespace that is not a whole number of indent units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentError {
    pub prefix: String,
    pub unit: String,
}

impl fmt::Display for IndentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "leading whitespace ({}) is not a multiple of the indent unit ({})",
            describe_whitespace(&self.prefix),
            describe_whitespace(&self.unit)
        )
    }
}

impl std::error::Error for IndentError {}

/// Convert a whitespace prefix into an indentation level.
pub fn indent_level(prefix: &str, unit: &str) -> Result<usize, IndentError> {
    if unit.is_empty() {
        return if prefix.is_empty() {
            Ok(0)
        } else {
            Err(IndentError {
                prefix: prefix.to_string(),
                unit: unit.to_string(),
            })
        };
    }

    let mut level = 0;
    let mut rest = prefix;
    while let Some(stripped) = rest.strip_prefix(unit) {
        level += 1;
        rest = stripped;
    }

    if rest.is_empty() {
        Ok(level)
    } else {
        Err(IndentError {
            prefix: prefix.to_string(),
            unit: unit.to_string(),
        })
    }
}

fn whitespace_class(c: char) -> &'static str {
    match c {
        ' ' => "space",
        '\u{3000}' => "full-width space",
        '\t' => "tab",
        _ => "other whitespace",
    }
}

/// Describe a whitespace run as consecutive character classes, e.g. `full-width space x2, tab x1`.
pub fn describe_whitespace(s: &str) -> String {
    let mut runs: Vec<(&'static str, usize)> = Vec::new();
    for c in s.chars() {
        let class = whitespace_class(c);
        match runs.last_mut() {
            Some((last, count)) if *last == class => *count += 1,
            _ => runs.push((class, 1)),
        }
    }

    if runs.is_empty() {
        return "empty".to_string();
    }

    runs.iter()
        .map(|(class, count)| format!("{} x{}", class, count))
        .collect::<Vec<_>>()
        .join(", ")
}
