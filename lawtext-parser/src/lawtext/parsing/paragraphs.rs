//! Paragraphs, items and subitems
//!
//!     Paragraph, Item and Subitem1 ... Subitem10 share one rule parameterized by nesting depth
//!     (0 = Paragraph, 11 = Subitem10). A line at indentation `depth` is split into a title
//!     token and a body:
//!
//!         １　本文。               Paragraph[ParagraphNum, ParagraphSentence]
//!         　一　本文。             Item[ItemTitle, ItemSentence]
//!         　　イ　本文。           Subitem1[Subitem1Title, Subitem1Sentence]
//!
//!     Paragraphs need a numeric title, except the first paragraph of an article, which may
//!     omit it. Below each line come, in order of preference: a table at depth + 1, a figure at
//!     depth + 1, a list line at depth + 2, or the next paragraph-item level.

use super::cursor::{ensure_progress, Cursor};
use super::tables::process_table_struct;
use super::text::{
    appdx_kind, group_rank, is_article_title, is_paragraph_num, is_parenthesized,
    sentence_children, split_title, suppl_label,
};
use crate::lawtext::ast::tag::MAX_PARAGRAPH_ITEM_DEPTH;
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::ParserResult;
use crate::lawtext::token::{LineKind, LineToken};
use log::trace;

/// Headings of enclosing constructs: supplementary provisions, appendices and grouping units.
fn is_outer_heading(c: &Cursor<'_>, token: &LineToken) -> bool {
    if suppl_label(&token.body).is_some() || appdx_kind(&token.body).is_some() {
        return true;
    }
    group_rank(&token.body).is_some() && c.next().map_or(true, LineToken::is_blank)
}

/// Lines that end a run of paragraph items at `depth`.
fn is_excluded(c: &Cursor<'_>, token: &LineToken, depth: usize) -> bool {
    is_outer_heading(c, token) || (depth == 0 && is_article_title(&token.body))
}

/// Recognize a paragraph (depth 0), item (depth 1) or subitem (depth 2..=11).
pub fn process_paragraph_item(
    cursor: &mut Cursor<'_>,
    depth: usize,
    first_in_article: bool,
) -> ParserResult<Option<TreeNode>> {
    let (Some(tag), Some(title_tag), Some(sentence_tag)) = (
        Tag::paragraph_item(depth),
        Tag::paragraph_item_title(depth),
        Tag::paragraph_item_sentence(depth),
    ) else {
        return Ok(None);
    };

    let mut c = *cursor;
    c.skip_blank_lines();

    let mut caption = None;
    if depth == 0 {
        if let (Some(here), Some(next)) = (c.here(), c.next()) {
            if here.is_default_at(0)
                && is_parenthesized(&here.body)
                && next.is_default_at(0)
                && !is_article_title(&next.body)
                && !is_parenthesized(&next.body)
            {
                caption = Some(TreeNode::leaf(Tag::ParagraphCaption, here.body.as_str()));
                c.advance();
            }
        }
    }

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default_at(depth) || is_excluded(&c, token, depth) {
        return Ok(None);
    }

    let (title, body) = match split_title(&token.body) {
        (title, body) if depth > 0 || is_paragraph_num(title) => (title, body),
        _ if first_in_article && caption.is_none() => ("", token.body.as_str()),
        _ => return Ok(None),
    };

    let mut node = TreeNode::new(tag);
    if let Some(caption) = caption {
        node.push(caption);
    }
    node.push(TreeNode::leaf(title_tag, title));
    node.push(TreeNode::with_children(sentence_tag, sentence_children(body)));
    c.advance();

    process_paragraph_item_children(&mut c, depth, &mut node)?;

    trace!("{} at line {}", tag, token.line);
    *cursor = c;
    Ok(Some(node))
}

/// Parse what may follow a paragraph-item line at `depth` and append it to `node`.
pub fn process_paragraph_item_children(
    c: &mut Cursor<'_>,
    depth: usize,
    node: &mut TreeNode,
) -> ParserResult<()> {
    loop {
        let before = c.position();

        if let Some(table) = process_table_struct(c, depth + 1)? {
            node.push(table);
        } else if let Some(fig) = process_fig_struct(c, depth + 1) {
            node.push(fig);
        } else if let Some(list) = process_list(c, depth + 2) {
            node.push(list);
        } else if depth < MAX_PARAGRAPH_ITEM_DEPTH {
            match process_paragraph_item(c, depth + 1, false)? {
                Some(child) => node.push(child),
                None => break,
            }
        } else {
            break;
        }

        ensure_progress(before, c, "paragraph item children")?;
    }
    Ok(())
}

/// `.. figure:: path` at `indent` -> FigStruct[Fig{src}]
pub fn process_fig_struct(cursor: &mut Cursor<'_>, indent: usize) -> Option<TreeNode> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let token = c.here()?;
    if token.kind != LineKind::Figure || token.indent != indent {
        return None;
    }
    c.advance();

    trace!("FigStruct at line {}", token.line);
    *cursor = c;
    Some(TreeNode::with_children(
        Tag::FigStruct,
        vec![fig(&token.body)],
    ))
}

pub fn fig(src: &str) -> TreeNode {
    TreeNode::new(Tag::Fig).with_attribute("src", src)
}

/// A free text line at `indent` -> List[ListSentence[...]]
pub fn process_list(cursor: &mut Cursor<'_>, indent: usize) -> Option<TreeNode> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let token = c.here()?;
    if !token.is_default_at(indent) || is_outer_heading(&c, token) {
        return None;
    }
    c.advance();

    *cursor = c;
    Some(TreeNode::with_children(
        Tag::List,
        vec![TreeNode::with_children(
            Tag::ListSentence,
            sentence_children(&token.body),
        )],
    ))
}
