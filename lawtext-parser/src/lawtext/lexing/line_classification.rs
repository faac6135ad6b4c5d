//! Line Classification
//!
//! Classification follows this specific order (important for correctness):
//! 1. Table first row (`* - `)
//! 2. Table continuation row (`  - `)
//! 3. Figure directive (`.. figure:: `)
//! 4. Default, any line with content
//! 5. Blank lines
//!
//! Blank lines always get level 0 regardless of their whitespace.

use super::indentation::indent_level;
use super::table_cell::split_cell_attributes;
use crate::lawtext::error::LexError;
use crate::lawtext::token::{LineKind, LineToken};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static TABLE_FIRST_ROW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indents>[ \t\u{3000}]*)\* - (?P<tcbody>.*)$").unwrap());

// Lazy indents: the two spaces of the marker must not be read as indentation.
static TABLE_CONTINUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indents>[ \t\u{3000}]*?)  - (?P<tcbody>.*)$").unwrap());

static FIGURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<indents>[ \t\u{3000}]*)\.\. figure:: (?P<body>.+)$").unwrap()
});

static DEFAULT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<indents>[ \t\u{3000}]*)(?P<body>[^ \t\u{3000}].*)$").unwrap());

static BLANK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t\u{3000}]*$").unwrap());

/// Classify one source line into a line token.
pub fn classify_line(line: &str, line_no: usize, indent_unit: &str) -> Result<LineToken, LexError> {
    if let Some(caps) = TABLE_FIRST_ROW.captures(line) {
        return table_row(LineKind::TableFirstRow, &caps, line_no, indent_unit);
    }

    if let Some(caps) = TABLE_CONTINUATION.captures(line) {
        return table_row(LineKind::TableContinuation, &caps, line_no, indent_unit);
    }

    if let Some(caps) = FIGURE.captures(line) {
        let indent = level(&caps, line_no, indent_unit)?;
        return Ok(LineToken::new(
            LineKind::Figure,
            indent,
            capture(&caps, "body"),
            line_no,
        ));
    }

    if let Some(caps) = DEFAULT_LINE.captures(line) {
        let indent = level(&caps, line_no, indent_unit)?;
        return Ok(LineToken::new(
            LineKind::Default,
            indent,
            capture(&caps, "body"),
            line_no,
        ));
    }

    if BLANK_LINE.is_match(line) {
        return Ok(LineToken::new(LineKind::Blank, 0, "", line_no));
    }

    Err(LexError::UnrecognizedLineStructure { line: line_no })
}

fn table_row(
    kind: LineKind,
    caps: &Captures<'_>,
    line_no: usize,
    indent_unit: &str,
) -> Result<LineToken, LexError> {
    let indent = level(caps, line_no, indent_unit)?;
    let (attributes, body) = split_cell_attributes(capture(caps, "tcbody"));
    Ok(LineToken::new(kind, indent, body, line_no).with_attributes(attributes))
}

fn level(caps: &Captures<'_>, line_no: usize, indent_unit: &str) -> Result<usize, LexError> {
    indent_level(capture(caps, "indents"), indent_unit).map_err(|e| {
        LexError::IndentInconsistency {
            line: line_no,
            description: e.to_string(),
        }
    })
}

fn capture<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}
