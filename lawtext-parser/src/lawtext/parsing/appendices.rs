//! Appendices
//!
//!     Appendix tables (別表), styles (様式) and figures (別図) follow the provisions. Each opens
//!     with an indentation-0 title line whose trailing parenthesized part names the articles
//!     it relates to:
//!
//!         別表第一（第三条関係）
//!
//!     becomes AppdxTableTitle `別表第一` and RelatedArticleNum `（第三条関係）`. The content
//!     below runs until the next appendix or supplementary provision heading, or any other
//!     indentation-0 text line.

use super::cursor::{ensure_progress, Cursor};
use super::paragraphs::{fig, process_fig_struct, process_paragraph_item};
use super::tables::{process_remarks, process_table_struct};
use super::text::{appdx_kind, first_token, split_trailing_paren, suppl_label, AppdxKind};
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::ParserResult;
use crate::lawtext::token::{LineKind, LineToken};
use log::trace;

/// Lines that end appendix content.
fn ends_appendix(token: &LineToken) -> bool {
    if !token.is_default() {
        return false;
    }
    if appdx_kind(&token.body).is_some() || suppl_label(&token.body).is_some() {
        return true;
    }
    token.indent == 0 && !first_token(&token.body).starts_with("備考")
}

/// Consume an appendix title line of `kind` and build its title and related-article nodes.
fn process_appdx_title(
    c: &mut Cursor<'_>,
    kind: AppdxKind,
    title_tag: Tag,
) -> Option<Vec<TreeNode>> {
    c.skip_blank_lines();
    let token = c.here()?;
    if !token.is_default_at(0) || appdx_kind(&token.body) != Some(kind) {
        return None;
    }

    let (title, related) = split_trailing_paren(&token.body);
    let mut nodes = vec![TreeNode::leaf(title_tag, title)];
    if let Some(related) = related {
        nodes.push(TreeNode::leaf(Tag::RelatedArticleNum, related));
    }
    c.advance();

    trace!("{} at line {}", title_tag, token.line);
    Some(nodes)
}

/// Indentation of the next content line, or `None` when the appendix ends.
fn next_content_indent(c: &Cursor<'_>) -> Option<usize> {
    let mut probe = *c;
    probe.skip_blank_lines();
    let token = probe.here()?;
    if ends_appendix(token) {
        None
    } else {
        Some(token.indent)
    }
}

/// AppdxTable[AppdxTableTitle, RelatedArticleNum?, TableStruct | FigStruct | Remarks | Item...]
pub fn process_appdx_table(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let Some(title) = process_appdx_title(&mut c, AppdxKind::Table, Tag::AppdxTableTitle) else {
        return Ok(None);
    };
    let mut node = TreeNode::with_children(Tag::AppdxTable, title);

    while let Some(indent) = next_content_indent(&c) {
        let before = c.position();
        if let Some(table) = process_table_struct(&mut c, indent)? {
            node.push(table);
        } else if let Some(fig) = process_fig_struct(&mut c, indent) {
            node.push(fig);
        } else if let Some(remarks) = process_remarks(&mut c, indent)? {
            node.push(remarks);
        } else if let Some(item) = process_paragraph_item(&mut c, 1, false)? {
            node.push(item);
        } else {
            break;
        }
        ensure_progress(before, &c, "appendix table")?;
    }

    *cursor = c;
    Ok(Some(node))
}

/// AppdxStyle[AppdxStyleTitle, RelatedArticleNum?, StyleStruct[Style[...]]?]
pub fn process_appdx_style(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let Some(title) = process_appdx_title(&mut c, AppdxKind::Style, Tag::AppdxStyleTitle) else {
        return Ok(None);
    };
    let mut node = TreeNode::with_children(Tag::AppdxStyle, title);
    let mut style = TreeNode::new(Tag::Style);

    while let Some(indent) = next_content_indent(&c) {
        let before = c.position();
        if let Some(table) = process_table_struct(&mut c, indent)? {
            style.push(table);
        } else if let Some(figure) = process_style_fig(&mut c, indent) {
            style.push(figure);
        } else if let Some(remarks) = process_remarks(&mut c, indent)? {
            style.push(remarks);
        } else {
            break;
        }
        ensure_progress(before, &c, "appendix style")?;
    }

    if !style.is_empty() {
        node.push(TreeNode::with_children(Tag::StyleStruct, vec![style]));
    }

    *cursor = c;
    Ok(Some(node))
}

/// A figure line inside a style is a bare Fig.
fn process_style_fig(cursor: &mut Cursor<'_>, indent: usize) -> Option<TreeNode> {
    let mut c = *cursor;
    c.skip_blank_lines();
    let token = c.here()?;
    if token.kind != LineKind::Figure || token.indent != indent {
        return None;
    }
    c.advance();
    *cursor = c;
    Some(fig(&token.body))
}

/// AppdxFig[AppdxFigTitle, RelatedArticleNum?, FigStruct | Remarks...]
pub fn process_appdx_fig(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let Some(title) = process_appdx_title(&mut c, AppdxKind::Fig, Tag::AppdxFigTitle) else {
        return Ok(None);
    };
    let mut node = TreeNode::with_children(Tag::AppdxFig, title);

    while let Some(indent) = next_content_indent(&c) {
        let before = c.position();
        if let Some(fig) = process_fig_struct(&mut c, indent) {
            node.push(fig);
        } else if let Some(remarks) = process_remarks(&mut c, indent)? {
            node.push(remarks);
        } else {
            break;
        }
        ensure_progress(before, &c, "appendix figure")?;
    }

    *cursor = c;
    Ok(Some(node))
}
