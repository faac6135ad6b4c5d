//! Parsing module for Lawtext
//!
//!     This module provides the complete processing pipeline from source text to the document
//!     tree:
//!         1. Lexing: one token per source line. See [lexing](crate::lawtext::lexing).
//!         2. Parsing: recursive descent over the tokens, building the raw tree.
//!         3. Decoration: numbering and structural attributes. See
//!            [decoration](crate::lawtext::decoration).
//!
//! Grammar Rules
//!
//!     Every rule has the shape
//!
//!         fn process_x(cursor: &mut Cursor, ...) -> ParserResult<Option<TreeNode>>
//!
//!     and follows the same discipline: skip blank lines, look at the current token and at
//!     most two more, then either commit (advance past everything consumed and return the
//!     node) or return `None` with the cursor untouched. Errors are reserved for input the
//!     grammar can positively tell is wrong; "this rule does not apply here" is never an
//!     error. Composite rules loop over their sub-rules until none matches, and every loop
//!     iteration must advance the cursor (see [ensure_progress](cursor::ensure_progress)).
//!
//!     Rules live next to the construct they build:
//!
//!         - [law](law): title, law number, enact statements, top-level sequence
//!         - [toc](toc): table of contents
//!         - [provisions](provisions): main provision, grouping units, articles,
//!           supplementary provisions
//!         - [paragraphs](paragraphs): paragraphs, items, subitems, figures, lists
//!         - [tables](tables): tables and remarks
//!         - [appendices](appendices): appendix tables, styles and figures
//!
//! Errors
//!
//!     Parsing is all-or-nothing. Lexer and parser errors, and tokens left over after the law
//!     is complete, are all reported as one [LawtextError] carrying the source window around
//!     the offending line.

pub mod appendices;
pub mod cursor;
pub mod law;
pub mod paragraphs;
pub mod provisions;
pub mod tables;
pub mod text;
pub mod toc;

pub use cursor::Cursor;

use crate::lawtext::ast::TreeNode;
use crate::lawtext::decoration::decorate;
use crate::lawtext::error::{LawtextError, ParserError, ParserResult};
use crate::lawtext::lexing::{lex, split_lines};
use crate::lawtext::token::LineToken;
use log::debug;

/// Parse a token stream into the raw (undecorated) tree.
///
/// Fails with [ParserError::TrailingUnparsedInput] when tokens remain after the law.
pub fn parse_tokens(tokens: &[LineToken]) -> ParserResult<TreeNode> {
    let mut cursor = Cursor::new(tokens);
    let law = law::process_law(&mut cursor)?;

    cursor.skip_blank_lines();
    if !cursor.is_end() {
        return Err(ParserError::TrailingUnparsedInput {
            line: cursor.line_number(),
        });
    }
    Ok(law)
}

/// Lex source text into line tokens.
pub fn lex_lawtext(text: &str) -> Result<Vec<LineToken>, LawtextError> {
    let lines = split_lines(text);
    lex(&lines).map_err(|err| LawtextError::from_lex(err, &lines))
}

/// Parse Lawtext source into the raw tree, without decoration.
pub fn parse_lawtext(text: &str) -> Result<TreeNode, LawtextError> {
    let lines = split_lines(text);
    debug!("parsing {} lines", lines.len());

    let tokens = lex(&lines).map_err(|err| LawtextError::from_lex(err, &lines))?;
    debug!("lexed {} tokens", tokens.len());

    parse_tokens(&tokens).map_err(|err| LawtextError::from_parser(err, &lines))
}

/// Parse and decorate Lawtext source: the full pipeline.
pub fn process(text: &str) -> Result<TreeNode, LawtextError> {
    let mut law = parse_lawtext(text)?;
    decorate(&mut law);
    Ok(law)
}
