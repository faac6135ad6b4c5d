//! Line token types
//!
//!     Lawtext is line based: every construct of the grammar is recognized from whole source
//!     lines, their indentation and the blank lines between them. The lexer therefore emits
//!     exactly one token per source line and the parser never looks inside a line except to
//!     split a title from its body.
//!
//! Line Kinds
//!
//!     These are the line tokens, in the order the lexer tries them:
//!
//!         - TableFirstRow: `* - ` marker opening a table row (first column)
//!         - TableContinuation: `  - ` marker adding a column to the current row
//!         - Figure: `.. figure:: <path>` directive
//!         - Default: any other non-blank line
//!         - Blank: empty or whitespace only
//!
//!     See [classify_line](crate::lawtext::lexing::line_classification::classify_line) for the
//!     patterns and their priority.

use indexmap::IndexMap;
use std::fmt;

/// The classification of a source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineKind {
    /// `* - ` first column of a table row
    TableFirstRow,

    /// `  - ` further column of the current table row
    TableContinuation,

    /// `.. figure:: ` directive
    Figure,

    /// Any other line carrying text
    Default,

    /// Empty or whitespace only
    Blank,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::TableFirstRow => "TABLE_FIRST_ROW",
            LineKind::TableContinuation => "TABLE_CONTINUATION",
            LineKind::Figure => "FIGURE",
            LineKind::Default => "DEFAULT",
            LineKind::Blank => "BLANK",
        };
        write!(f, "{}", name)
    }
}

/// One lexed source line.
///
/// `indent` is measured in units of the detected indent string, never in characters.
/// `attributes` is only populated for table rows whose cell text carried `[name=value]`
/// prefixes; the prefixes are stripped from `body`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineToken {
    pub kind: LineKind,
    pub indent: usize,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IndexMap<String, String>>,
    /// 0-based source line number
    pub line: usize,
}

impl LineToken {
    pub fn new(kind: LineKind, indent: usize, body: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            indent,
            body: body.into(),
            attributes: None,
            line,
        }
    }

    pub fn with_attributes(mut self, attributes: IndexMap<String, String>) -> Self {
        if !attributes.is_empty() {
            self.attributes = Some(attributes);
        }
        self
    }

    pub fn is_blank(&self) -> bool {
        self.kind == LineKind::Blank
    }

    pub fn is_default(&self) -> bool {
        self.kind == LineKind::Default
    }

    /// A default line at exactly `indent`.
    pub fn is_default_at(&self, indent: usize) -> bool {
        self.kind == LineKind::Default && self.indent == indent
    }
}

impl fmt::Display for LineToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.kind, self.indent, self.body)
    }
}
