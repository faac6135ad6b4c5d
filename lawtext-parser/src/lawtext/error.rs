//! Error types for the Lawtext pipeline
//!
//!     Lexing and parsing each have their own error enum carrying the 0-based line the failure
//!     was detected at. Neither is meant to reach document authors directly: the pipeline entry
//!     point converts both into a single [`LawtextError`] that bundles the message with a window
//!     of the surrounding source lines, since line numbers are the primary debugging aid of a
//!     plain-text authoring format.
//!
//!     Parsing is all-or-nothing. No partial tree is ever returned next to an error.

use thiserror::Error;

/// Errors that can occur while lexing source lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Leading whitespace is not an exact repetition of the detected indent unit
    #[error("inconsistent indentation: {description}")]
    IndentInconsistency { line: usize, description: String },

    /// No line pattern matched
    #[error("unrecognized line structure")]
    UnrecognizedLineStructure { line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::IndentInconsistency { line, .. }
            | LexError::UnrecognizedLineStructure { line } => *line,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LexError::IndentInconsistency { .. } => ErrorKind::IndentInconsistency,
            LexError::UnrecognizedLineStructure { .. } => ErrorKind::UnrecognizedLineStructure,
        }
    }
}

/// Errors that can occur while building the tree from line tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// The line after the law title is not a parenthesized law number
    #[error("law number must be enclosed in parentheses: \"{text}\"")]
    MissingLawNumberParentheses { line: usize, text: String },

    /// Table of contents entries must nest one indentation level at a time
    #[error("table of contents indentation mismatch: expected level {expected}, found {found}")]
    TocIndentMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A construct the grammar requires at this point could not be recognized
    #[error("expected {expected}")]
    StructuralParseFailure { line: usize, expected: &'static str },

    /// The grammar finished before the end of the input
    #[error("trailing unparsed content")]
    TrailingUnparsedInput { line: usize },

    /// A grammar loop stopped making progress, or another invariant broke
    #[error("internal parse failure: {message}")]
    InternalParseFailure { line: usize, message: String },
}

impl ParserError {
    pub fn line(&self) -> usize {
        match self {
            ParserError::MissingLawNumberParentheses { line, .. }
            | ParserError::TocIndentMismatch { line, .. }
            | ParserError::StructuralParseFailure { line, .. }
            | ParserError::TrailingUnparsedInput { line }
            | ParserError::InternalParseFailure { line, .. } => *line,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParserError::MissingLawNumberParentheses { .. } => {
                ErrorKind::MissingLawNumberParentheses
            }
            ParserError::TocIndentMismatch { .. } => ErrorKind::TocIndentMismatch,
            ParserError::StructuralParseFailure { .. } => ErrorKind::StructuralParseFailure,
            ParserError::TrailingUnparsedInput { .. } => ErrorKind::TrailingUnparsedInput,
            ParserError::InternalParseFailure { .. } => ErrorKind::InternalParseFailure,
        }
    }
}

/// Type alias for parser results
pub type ParserResult<T> = Result<T, ParserError>;

/// Every failure the pipeline can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ErrorKind {
    IndentInconsistency,
    UnrecognizedLineStructure,
    MissingLawNumberParentheses,
    TocIndentMismatch,
    StructuralParseFailure,
    TrailingUnparsedInput,
    InternalParseFailure,
}

/// The single reportable error of the pipeline.
///
/// `line` is 0-based; `context` is the display window built by [`format_source_context`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (line {display_line})\n{context}", display_line = .line + 1)]
pub struct LawtextError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub context: String,
}

impl LawtextError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, line: usize, lines: &[&str]) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: format_source_context(lines, line),
        }
    }

    pub fn from_lex(err: LexError, lines: &[&str]) -> Self {
        Self::new(err.kind(), err.to_string(), err.line(), lines)
    }

    pub fn from_parser(err: ParserError, lines: &[&str]) -> Self {
        Self::new(err.kind(), err.to_string(), err.line(), lines)
    }
}

/// Format source context around an error line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(lines: &[&str], error_line: usize) -> String {
    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();

    for (line_num, line) in lines
        .iter()
        .enumerate()
        .take(end_line)
        .skip(start_line)
    {
        let marker = if line_num == error_line { ">>" } else { "  " };
        let display_line_num = line_num + 1; // 1-indexed for display
        context.push_str(&format!("{} {:3} | {}\n", marker, display_line_num, line));
    }

    context
}
