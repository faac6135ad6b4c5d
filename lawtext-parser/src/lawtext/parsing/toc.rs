//! Table of contents
//!
//!     The table of contents is the one construct whose label is not a fixed word: any single
//!     token line at indentation 0 that is followed immediately (no blank line) by an indented
//!     line opens it. Entries then nest exactly one level per grouping rank:
//!
//!         目次
//!         　第一章　総則（第一条―第三条）
//!         　第二章　雑則
//!         　　第一節　通則（第四条）
//!         　附則
//!
//!     Any other step in indentation is a TocIndentMismatch.

use super::cursor::{ensure_progress, Cursor};
use super::text::{
    appdx_kind, group_rank, is_article_title, is_structural, split_title, split_trailing_paren,
    strip_spaces, suppl_label, AppdxKind,
};
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::{ParserError, ParserResult};
use crate::lawtext::token::LineToken;
use log::trace;

fn toc_group_tag(rank: usize) -> Option<Tag> {
    match rank {
        1 => Some(Tag::TOCPart),
        2 => Some(Tag::TOCChapter),
        3 => Some(Tag::TOCSection),
        4 => Some(Tag::TOCSubsection),
        5 => Some(Tag::TOCDivision),
        _ => None,
    }
}

/// Whether the cursor stands on a table of contents label.
pub fn is_toc_label(c: &Cursor<'_>) -> bool {
    let (Some(here), Some(next)) = (c.here(), c.next()) else {
        return false;
    };
    here.is_default_at(0)
        && !is_structural(&here.body)
        && split_title(&here.body).1.is_empty()
        && next.is_default()
        && next.indent > 0
}

/// TOC[TOCLabel, entries...]
pub fn process_toc(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    if !is_toc_label(&c) {
        return Ok(None);
    }
    let Some(label) = c.here() else {
        return Ok(None);
    };

    let mut toc = TreeNode::new(Tag::TOC);
    toc.push(TreeNode::leaf(Tag::TOCLabel, label.body.as_str()));
    c.advance();

    process_toc_entries(&mut c, 1, &mut toc)?;

    trace!("TOC at line {}", label.line);
    *cursor = c;
    Ok(Some(toc))
}

/// Entries at `indent` and below, until a line at a shallower indentation or a blank line.
fn process_toc_entries(
    c: &mut Cursor<'_>,
    indent: usize,
    parent: &mut TreeNode,
) -> ParserResult<()> {
    loop {
        let before = c.position();
        let Some(token) = c.here() else { break };
        if !token.is_default() || token.indent < indent {
            break;
        }
        if token.indent != indent {
            return Err(ParserError::TocIndentMismatch {
                line: token.line,
                expected: indent,
                found: token.indent,
            });
        }

        let entry = process_toc_entry(c, token)?;
        parent.push(entry);
        ensure_progress(before, c, "table of contents")?;
    }
    Ok(())
}

fn process_toc_entry(c: &mut Cursor<'_>, token: &LineToken) -> ParserResult<TreeNode> {
    let body = token.body.as_str();

    if let Some(tag) = group_rank(body).and_then(toc_group_tag) {
        let (title, range) = split_trailing_paren(body);
        let mut entry = TreeNode::new(tag);
        if let Some(title_tag) = tag.group_title() {
            entry.push(TreeNode::leaf(title_tag, title));
        }
        if let Some(range) = range {
            entry.push(TreeNode::leaf(Tag::ArticleRange, range));
        }
        c.advance();
        process_toc_entries(c, token.indent + 1, &mut entry)?;
        return Ok(entry);
    }

    let entry = if suppl_label(body).is_some() {
        let (label, range) = split_trailing_paren(body);
        let mut entry = TreeNode::new(Tag::TOCSupplProvision);
        entry.push(TreeNode::leaf(Tag::SupplProvisionLabel, label));
        if let Some(range) = range {
            entry.push(TreeNode::leaf(Tag::ArticleRange, range));
        }
        entry
    } else if strip_spaces(body) == "前文" {
        TreeNode::leaf(Tag::TOCPreambleLabel, body)
    } else if appdx_kind(body) == Some(AppdxKind::Table) {
        TreeNode::leaf(Tag::TOCAppdxTableLabel, body)
    } else if is_article_title(body) {
        let (title, caption) = split_title(body);
        let mut entry = TreeNode::new(Tag::TOCArticle);
        entry.push(TreeNode::leaf(Tag::ArticleTitle, title));
        if !caption.is_empty() {
            entry.push(TreeNode::leaf(Tag::ArticleCaption, caption));
        }
        entry
    } else {
        return Err(ParserError::StructuralParseFailure {
            line: token.line,
            expected: "table of contents entry",
        });
    };

    c.advance();
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawtext::lexing::lex;
    use crate::lawtext::testing::assert_tree;

    fn parse(source: &str) -> (ParserResult<Option<TreeNode>>, usize) {
        let lines: Vec<&str> = source.lines().collect();
        let tokens = lex(&lines).expect("lex failed");
        let mut cursor = Cursor::new(&tokens);
        let result = process_toc(&mut cursor);
        (result, cursor.position())
    }

    #[test]
    fn test_nested_entries() {
        let source = "目次\n\u{3000}第一章\u{3000}総則（第一条―第三条）\n\u{3000}第二章\u{3000}雑則\n\u{3000}\u{3000}第一節\u{3000}通則（第四条）\n\u{3000}附則\n\n第一条\u{3000}本文。";
        let (result, consumed) = parse(source);
        let toc = result.unwrap().expect("toc");
        assert_eq!(consumed, 5);

        assert_tree(&toc)
            .child_tags(&[
                Tag::TOCLabel,
                Tag::TOCChapter,
                Tag::TOCChapter,
                Tag::TOCSupplProvision,
            ])
            .child(1, |chapter| {
                chapter
                    .child_tags(&[Tag::ChapterTitle, Tag::ArticleRange])
                    .child(0, |title| title.text("第一章\u{3000}総則"))
                    .child(1, |range| range.text("（第一条―第三条）"))
            })
            .child(2, |chapter| {
                chapter
                    .child_tags(&[Tag::ChapterTitle, Tag::TOCSection])
                    .child(1, |section| section.child_tags(&[Tag::SectionTitle, Tag::ArticleRange]))
            });
    }

    #[test]
    fn test_indent_jump_is_mismatch() {
        let source = "目次\n\u{3000}第一章\u{3000}総則\n\u{3000}\u{3000}\u{3000}第一節\u{3000}通則";
        let (result, consumed) = parse(source);
        assert_eq!(
            result.unwrap_err(),
            ParserError::TocIndentMismatch {
                line: 2,
                expected: 2,
                found: 3
            }
        );
        assert_eq!(consumed, 0);
    }

    #[test]
    fn test_unknown_entry() {
        let (result, _) = parse("目次\n\u{3000}雑多な行");
        assert!(matches!(
            result,
            Err(ParserError::StructuralParseFailure { line: 1, .. })
        ));
    }

    #[test]
    fn test_label_needs_indented_follower() {
        let (result, _) = parse("目次\n\n\u{3000}第一章");
        assert!(result.unwrap().is_none());
        let (result, _) = parse("第一条\n\u{3000}一\u{3000}号");
        assert!(result.unwrap().is_none());
    }
}
