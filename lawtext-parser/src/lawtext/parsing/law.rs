//! Law root
//!
//!     The document is read in a fixed order, every part optional:
//!
//!         title line + parenthesized law number
//!         enact statements
//!         table of contents
//!         main provision
//!         supplementary provisions and appendices, in any order, repeated
//!
//!     The law number becomes a child of Law itself; everything else lives under LawBody.

use super::appendices::{process_appdx_fig, process_appdx_style, process_appdx_table};
use super::cursor::{ensure_progress, Cursor};
use super::provisions::{process_main_provision, process_suppl_provision};
use super::text::{is_structural, parenthesized};
use super::toc::{is_toc_label, process_toc};
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::{ParserError, ParserResult};
use crate::lawtext::token::LineToken;
use log::trace;

/// Build the Law tree from the start of the token stream.
pub fn process_law(cursor: &mut Cursor<'_>) -> ParserResult<TreeNode> {
    let mut law = TreeNode::new(Tag::Law);
    let mut body = TreeNode::new(Tag::LawBody);

    if let Some((title, law_num)) = process_title(cursor)? {
        if let Some(law_num) = law_num {
            law.push(law_num);
        }
        body.push(title);
    }

    while let Some(statement) = process_enact_statement(cursor) {
        body.push(statement);
    }

    if let Some(toc) = process_toc(cursor)? {
        body.push(toc);
    }

    if let Some(main) = process_main_provision(cursor)? {
        body.push(main);
    }

    loop {
        let before = cursor.position();
        if let Some(suppl) = process_suppl_provision(cursor)? {
            body.push(suppl);
        } else if let Some(table) = process_appdx_table(cursor)? {
            body.push(table);
        } else if let Some(style) = process_appdx_style(cursor)? {
            body.push(style);
        } else if let Some(fig) = process_appdx_fig(cursor)? {
            body.push(fig);
        } else {
            break;
        }
        ensure_progress(before, cursor, "law body")?;
    }

    law.push(body);
    Ok(law)
}

/// LawTitle and the optional LawNum on the line below it.
fn process_title(cursor: &mut Cursor<'_>) -> ParserResult<Option<(TreeNode, Option<TreeNode>)>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default_at(0) || is_structural(&token.body) {
        return Ok(None);
    }
    let next = c.next();
    if !next.map_or(true, |next| next.is_blank() || next.indent == 0) {
        return Ok(None);
    }

    let title = TreeNode::leaf(Tag::LawTitle, token.body.as_str());
    c.advance();

    let law_num = match next.filter(|next| next.is_default()) {
        Some(next) => {
            let Some(num) = parenthesized(&next.body) else {
                return Err(ParserError::MissingLawNumberParentheses {
                    line: next.line,
                    text: next.body.clone(),
                });
            };
            c.advance();
            Some(TreeNode::leaf(Tag::LawNum, num))
        }
        None => None,
    };

    trace!("LawTitle at line {}", token.line);
    *cursor = c;
    Ok(Some((title, law_num)))
}

/// A free text line at indentation 0 between the title and the provisions.
fn process_enact_statement(cursor: &mut Cursor<'_>) -> Option<TreeNode> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let token: &LineToken = c.here()?;
    if !token.is_default_at(0) || is_structural(&token.body) || is_toc_label(&c) {
        return None;
    }
    c.advance();

    trace!("EnactStatement at line {}", token.line);
    *cursor = c;
    Some(TreeNode::leaf(Tag::EnactStatement, token.body.as_str()))
}
