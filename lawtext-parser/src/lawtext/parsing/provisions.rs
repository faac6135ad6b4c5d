//! Main provision, grouping units, articles and supplementary provisions
//!
//! Grouping Units
//!
//!     Part (編), Chapter (章), Section (節), Subsection (款) and Division (目) headings are
//!     indented lines followed by a blank line. A unit may only contain units of a deeper rank,
//!     so a Section never swallows the next Chapter: its child loop stops and the Chapter is
//!     picked up by whichever ancestor is allowed to hold it.
//!
//! Articles
//!
//!     An article starts at an indentation-0 line whose first token is `第X条`, optionally
//!     preceded by a parenthesized caption line:
//!
//!         （目的）
//!         第一条　この法律は、...
//!
//!     When the title line carries text, that text is the article's first paragraph, which has
//!     an empty ParagraphNum. A title line standing alone must be followed directly by a
//!     paragraph line, which may omit its number.

use super::cursor::{ensure_progress, Cursor};
use super::paragraphs::{process_paragraph_item, process_paragraph_item_children};
use super::text::{
    group_rank, is_article_title, is_parenthesized, sentence_children, split_title, suppl_label,
};
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::{ParserError, ParserResult};
use crate::lawtext::token::LineToken;
use log::trace;

/// Rank of the provision root; every grouping unit is deeper.
pub const MAIN_PROVISION_RANK: usize = 0;

fn group_tag(rank: usize) -> Option<Tag> {
    match rank {
        1 => Some(Tag::Part),
        2 => Some(Tag::Chapter),
        3 => Some(Tag::Section),
        4 => Some(Tag::Subsection),
        5 => Some(Tag::Division),
        _ => None,
    }
}

/// Grouping units, articles and paragraphs under a provision root or unit, until none match.
fn process_provision_children(
    c: &mut Cursor<'_>,
    rank: usize,
    node: &mut TreeNode,
    allow_unnumbered_paragraph: bool,
) -> ParserResult<()> {
    let mut paragraphs = 0usize;
    loop {
        let before = c.position();

        if let Some(group) = process_group(c, rank)? {
            node.push(group);
        } else if let Some(article) = process_article(c)? {
            node.push(article);
        } else {
            let first = allow_unnumbered_paragraph && paragraphs == 0;
            match process_paragraph_item(c, 0, first)? {
                Some(paragraph) => {
                    paragraphs += 1;
                    node.push(paragraph);
                }
                None => break,
            }
        }

        ensure_progress(before, c, "provision")?;
    }
    Ok(())
}

/// MainProvision, or nothing when no provision content is present.
pub fn process_main_provision(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let mut node = TreeNode::new(Tag::MainProvision);
    process_provision_children(&mut c, MAIN_PROVISION_RANK, &mut node, false)?;

    if node.is_empty() {
        return Ok(None);
    }
    *cursor = c;
    Ok(Some(node))
}

/// A grouping unit deeper than `parent_rank`.
pub fn process_group(
    cursor: &mut Cursor<'_>,
    parent_rank: usize,
) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default() || token.indent == 0 {
        return Ok(None);
    }
    let Some(rank) = group_rank(&token.body).filter(|rank| *rank > parent_rank) else {
        return Ok(None);
    };
    if !c.next().map_or(true, LineToken::is_blank) {
        return Ok(None);
    }
    let Some(tag) = group_tag(rank) else {
        return Ok(None);
    };
    let Some(title_tag) = tag.group_title() else {
        return Ok(None);
    };

    let mut node = TreeNode::new(tag);
    node.push(TreeNode::leaf(title_tag, token.body.as_str()));
    c.advance();

    process_provision_children(&mut c, rank, &mut node, false)?;

    trace!("{} at line {}", tag, token.line);
    *cursor = c;
    Ok(Some(node))
}

/// Article[ArticleCaption?, ArticleTitle, Paragraph...]
pub fn process_article(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let Some(first) = c.here() else {
        return Ok(None);
    };

    let mut caption = None;
    if first.is_default_at(0)
        && is_parenthesized(&first.body)
        && c.next().is_some_and(|next| next.is_default_at(0) && is_article_title(&next.body))
    {
        caption = Some(TreeNode::leaf(Tag::ArticleCaption, first.body.as_str()));
        c.advance();
    }

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default_at(0) || !is_article_title(&token.body) {
        return Ok(None);
    }

    let (title, body) = split_title(&token.body);
    let mut article = TreeNode::new(Tag::Article);
    if let Some(caption) = caption {
        article.push(caption);
    }
    article.push(TreeNode::leaf(Tag::ArticleTitle, title));

    if body.is_empty() {
        if !c.next().is_some_and(|next| next.is_default_at(0)) {
            return Ok(None);
        }
        c.advance();
        match process_paragraph_item(&mut c, 0, true)? {
            Some(paragraph) => article.push(paragraph),
            None => {
                return Err(ParserError::StructuralParseFailure {
                    line: c.line_number(),
                    expected: "paragraph",
                })
            }
        }
    } else {
        let mut paragraph = TreeNode::new(Tag::Paragraph);
        paragraph.push(TreeNode::new(Tag::ParagraphNum));
        paragraph.push(TreeNode::with_children(
            Tag::ParagraphSentence,
            sentence_children(body),
        ));
        c.advance();
        process_paragraph_item_children(&mut c, 0, &mut paragraph)?;
        article.push(paragraph);
    }

    loop {
        let before = c.position();
        match process_paragraph_item(&mut c, 0, false)? {
            Some(paragraph) => article.push(paragraph),
            None => break,
        }
        ensure_progress(before, &c, "article")?;
    }

    trace!("Article {} at line {}", title, token.line);
    *cursor = c;
    Ok(Some(article))
}

/// SupplProvision{AmendLawNum?, Extract?}[SupplProvisionLabel, ...]
pub fn process_suppl_provision(cursor: &mut Cursor<'_>) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default() {
        return Ok(None);
    }
    let Some(label) = suppl_label(&token.body) else {
        return Ok(None);
    };
    if !c.next().map_or(true, LineToken::is_blank) {
        return Ok(None);
    }

    let mut node = TreeNode::new(Tag::SupplProvision);
    if let Some(amend_law_num) = &label.amend_law_num {
        node.set_attribute("AmendLawNum", amend_law_num.as_str());
    }
    if label.extract {
        node.set_attribute("Extract", "true");
    }
    node.push(TreeNode::leaf(Tag::SupplProvisionLabel, label.label.as_str()));
    c.advance();

    process_provision_children(&mut c, MAIN_PROVISION_RANK, &mut node, true)?;

    trace!("SupplProvision at line {}", token.line);
    *cursor = c;
    Ok(Some(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawtext::lexing::lex;
    use crate::lawtext::testing::assert_tree;

    fn tokens(source: &str) -> Vec<LineToken> {
        let lines: Vec<&str> = source.lines().collect();
        lex(&lines).expect("lex failed")
    }

    #[test]
    fn test_article_with_caption_and_paragraphs() {
        let tokens = tokens("（目的）\n第一条　この法律は、目的とする。\n２　前項の規定。\n");
        let mut cursor = Cursor::new(&tokens);
        let article = process_article(&mut cursor).unwrap().expect("article");

        assert!(cursor.is_end());
        assert_tree(&article)
            .child_tags(&[
                Tag::ArticleCaption,
                Tag::ArticleTitle,
                Tag::Paragraph,
                Tag::Paragraph,
            ])
            .child(0, |caption| caption.text("（目的）"))
            .child(1, |title| title.text("第一条"))
            .child(2, |p| {
                p.child(0, |num| num.tag(Tag::ParagraphNum).child_count(0))
                    .child(1, |s| s.text("この法律は、目的とする。"))
            })
            .child(3, |p| p.child(0, |num| num.text("２")));
    }

    #[test]
    fn test_lone_article_title() {
        let tokens = tokens("第二条\nこの法律は、施行する。\n");
        let mut cursor = Cursor::new(&tokens);
        let article = process_article(&mut cursor).unwrap().expect("article");
        assert_tree(&article)
            .child_tags(&[Tag::ArticleTitle, Tag::Paragraph])
            .child(1, |p| p.text("この法律は、施行する。"));
    }

    #[test]
    fn test_lone_article_title_requires_paragraph() {
        let tokens = tokens("第二条\n第三条　本文。\n");
        let mut cursor = Cursor::new(&tokens);
        let err = process_article(&mut cursor).unwrap_err();
        assert_eq!(
            err,
            ParserError::StructuralParseFailure {
                line: 1,
                expected: "paragraph"
            }
        );
    }

    #[test]
    fn test_group_ranks_nest() {
        let source = "\u{3000}第一章\u{3000}総則\n\n\u{3000}\u{3000}第一節\u{3000}通則\n\n第一条　甲。\n\n\u{3000}第二章\u{3000}雑則\n\n第二条　乙。\n";
        let tokens = tokens(source);
        let mut cursor = Cursor::new(&tokens);
        let main = process_main_provision(&mut cursor).unwrap().expect("main provision");

        assert!(cursor.is_end());
        assert_tree(&main)
            .child_tags(&[Tag::Chapter, Tag::Chapter])
            .child(0, |chapter| {
                chapter
                    .child_tags(&[Tag::ChapterTitle, Tag::Section])
                    .child(1, |section| {
                        section.child_tags(&[Tag::SectionTitle, Tag::Article])
                    })
            })
            .child(1, |chapter| chapter.child_tags(&[Tag::ChapterTitle, Tag::Article]));
    }

    #[test]
    fn test_suppl_provision_label_attributes() {
        let tokens = tokens("\u{3000}\u{3000}\u{3000}附\u{3000}則\u{3000}（平成十年法律第一号）\u{3000}抄\n\nこの法律は、公布の日から施行する。\n");
        let mut cursor = Cursor::new(&tokens);
        let suppl = process_suppl_provision(&mut cursor).unwrap().expect("suppl provision");

        assert!(cursor.is_end());
        assert_tree(&suppl)
            .attribute("AmendLawNum", "平成十年法律第一号")
            .attribute("Extract", "true")
            .child_tags(&[Tag::SupplProvisionLabel, Tag::Paragraph])
            .child(0, |label| label.text("附則"));
    }

    #[test]
    fn test_empty_input_has_no_main_provision() {
        let tokens = tokens("\n\n");
        let mut cursor = Cursor::new(&tokens);
        assert!(process_main_provision(&mut cursor).unwrap().is_none());
        assert_eq!(cursor.position(), 0);
    }
}
