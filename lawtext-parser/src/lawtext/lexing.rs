//! Lexer
//!
//!     This module turns Lawtext source into one [LineToken](crate::lawtext::token::LineToken)
//!     per source line. Unlike formats with a fixed indentation width, Lawtext documents choose
//!     their own indent string (usually one full-width space), so lexing runs in two passes:
//!
//!         1. Indent detection. See [indentation](indentation). All lines are inspected once to
//!            find the shortest leading whitespace run, which becomes the indent unit.
//!
//!         2. Line classification. See [line_classification](line_classification). Each line is
//!            matched against the line patterns in priority order and its leading whitespace is
//!            converted into a level, in units of the detected indent string.
//!
//!     Table rows additionally have their `[name="value"]` cell prefixes stripped into an
//!     attribute map. See [table_cell](table_cell).
//!
//! Line Endings
//!
//!     Input may use CRLF or LF. The text is split on CRLF first; if that yields a single line
//!     it is split again on LF.

pub mod indentation;
pub mod line_classification;
pub mod table_cell;

pub use indentation::{detect_indent, indent_level, DEFAULT_INDENT_UNIT};
pub use line_classification::classify_line;
pub use table_cell::split_cell_attributes;

use crate::lawtext::error::LexError;
use crate::lawtext::token::LineToken;

/// Split source text into lines, honoring CRLF before LF.
pub fn split_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.split("\r\n").collect();
    if lines.len() > 1 {
        lines
    } else {
        text.split('\n').collect()
    }
}

/// Lex all source lines into line tokens.
///
/// Fails on the first line whose indentation is inconsistent with the detected unit or
/// that matches no line pattern.
pub fn lex(lines: &[&str]) -> Result<Vec<LineToken>, LexError> {
    let indent_unit = detect_indent(lines);
    log::debug!(
        "lexing {} lines with indent unit {:?}",
        lines.len(),
        indent_unit
    );

    lines
        .iter()
        .enumerate()
        .map(|(line_no, line)| classify_line(line, line_no, &indent_unit))
        .collect()
}
