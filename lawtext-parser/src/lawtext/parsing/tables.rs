//! Tables and remarks
//!
//!     A table is a run of rows at one indentation. A row opens with a `* - ` line (its first
//!     column); each `  - ` line at the same indentation adds a column. Lines two levels deeper
//!     than the row belong to the column above them:
//!
//!         * - 区分
//!           - 金額
//!             （一件につき）
//!         * - 甲
//!           - 千円
//!
//!     Cell attributes stripped by the lexer (`[rowspan="2"]`) are copied onto the TableColumn.
//!
//!     A `備考` block may stand before and after the table; its deeper lines are its sentences.

use super::cursor::{ensure_progress, Cursor};
use super::paragraphs::fig;
use super::text::{first_token, sentence_children, sentences_of, split_title};
use crate::lawtext::ast::{Tag, TreeNode};
use crate::lawtext::error::ParserResult;
use crate::lawtext::token::{LineKind, LineToken};
use log::trace;

/// TableStruct[Remarks?, Table, Remarks?] at `indent`
pub fn process_table_struct(
    cursor: &mut Cursor<'_>,
    indent: usize,
) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let remarks_before = process_remarks(&mut c, indent)?;
    let Some(table) = process_table(&mut c, indent)? else {
        return Ok(None);
    };
    let remarks_after = process_remarks(&mut c, indent)?;

    let mut node = TreeNode::new(Tag::TableStruct);
    if let Some(remarks) = remarks_before {
        node.push(remarks);
    }
    node.push(table);
    if let Some(remarks) = remarks_after {
        node.push(remarks);
    }

    *cursor = c;
    Ok(Some(node))
}

pub fn process_table(cursor: &mut Cursor<'_>, indent: usize) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    let mut table = TreeNode::new(Tag::Table);

    loop {
        let before = c.position();
        match process_table_row(&mut c, indent) {
            Some(row) => table.push(row),
            None => break,
        }
        ensure_progress(before, &c, "table")?;
    }

    if table.is_empty() {
        return Ok(None);
    }

    trace!("Table with {} rows", table.children.len());
    *cursor = c;
    Ok(Some(table))
}

fn process_table_row(cursor: &mut Cursor<'_>, indent: usize) -> Option<TreeNode> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let first = c.here()?;
    if first.kind != LineKind::TableFirstRow || first.indent != indent {
        return None;
    }

    let mut row = TreeNode::new(Tag::TableRow);
    row.push(process_table_column(&mut c, first));

    while let Some(token) = c.here() {
        if token.kind != LineKind::TableContinuation || token.indent != indent {
            break;
        }
        row.push(process_table_column(&mut c, token));
    }

    *cursor = c;
    Some(row)
}

/// Build a column from its marker line and the deeper lines directly below it.
fn process_table_column(c: &mut Cursor<'_>, token: &LineToken) -> TreeNode {
    let mut column = TreeNode::new(Tag::TableColumn);
    if let Some(attributes) = &token.attributes {
        for (name, value) in attributes {
            column.set_attribute(name.as_str(), value.as_str());
        }
    }
    if !token.body.is_empty() {
        for sentence in sentences_of(&token.body) {
            column.push(sentence);
        }
    }
    c.advance();

    let content_indent = token.indent + 2;
    while let Some(line) = c.here() {
        if line.indent != content_indent {
            break;
        }
        match line.kind {
            LineKind::Default => {
                for sentence in sentences_of(&line.body) {
                    column.push(sentence);
                }
            }
            LineKind::Figure => column.push(fig(&line.body)),
            _ => break,
        }
        c.advance();
    }

    column
}

/// Remarks[RemarksLabel, Sentence...] from a `備考` line at `indent`
pub fn process_remarks(cursor: &mut Cursor<'_>, indent: usize) -> ParserResult<Option<TreeNode>> {
    let mut c = *cursor;
    c.skip_blank_lines();

    let Some(token) = c.here() else {
        return Ok(None);
    };
    if !token.is_default_at(indent) || !first_token(&token.body).starts_with("備考") {
        return Ok(None);
    }

    let (label, rest) = split_title(&token.body);
    let mut remarks = TreeNode::new(Tag::Remarks);
    remarks.push(TreeNode::leaf(Tag::RemarksLabel, label));
    if !rest.is_empty() {
        for child in sentence_children(rest) {
            remarks.push(child);
        }
    }
    c.advance();

    loop {
        let before = c.position();
        let Some(line) = c.here() else { break };
        if !line.is_default() || line.indent <= indent {
            break;
        }
        for child in sentence_children(&line.body) {
            remarks.push(child);
        }
        c.advance();
        ensure_progress(before, &c, "remarks")?;
    }

    trace!("Remarks at line {}", token.line);
    *cursor = c;
    Ok(Some(remarks))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawtext::lexing::lex;
    use crate::lawtext::testing::assert_tree;

    fn parse_table_struct(lines: &[&str], indent: usize) -> (Option<TreeNode>, usize) {
        let tokens = lex(lines).expect("lex failed");
        let mut cursor = Cursor::new(&tokens);
        let node = process_table_struct(&mut cursor, indent).expect("parse failed");
        (node, cursor.position())
    }

    #[test]
    fn test_rows_and_columns() {
        let lines = [
            "* - [rowspan=\"2\"]区分",
            "  - 金額",
            "    （一件につき）",
            "* - 甲",
            "  - 千円",
        ];
        let (node, consumed) = parse_table_struct(&lines, 0);
        let node = node.expect("table struct");
        assert_eq!(consumed, 5);

        assert_tree(&node).child_tags(&[Tag::Table]).child(0, |table| {
            table
                .child_count(2)
                .child(0, |row| {
                    row.child_tags(&[Tag::TableColumn, Tag::TableColumn])
                        .child(0, |col| col.attribute("rowspan", "2").text("区分"))
                        .child(1, |col| {
                            col.child_tags(&[Tag::Sentence, Tag::Sentence])
                                .text("金額（一件につき）")
                        })
                })
                .child(1, |row| row.child(1, |col| col.no_attribute("rowspan")))
        });
    }

    #[test]
    fn test_remarks_around_table() {
        let lines = [
            "備考",
            "\u{3000}\u{3000}前の注記。",
            "* - 甲",
            "備考",
            "\u{3000}後の注記。",
        ];
        let (node, consumed) = parse_table_struct(&lines, 0);
        assert_eq!(consumed, 5);
        assert_tree(&node.expect("table struct"))
            .child_tags(&[Tag::Remarks, Tag::Table, Tag::Remarks])
            .child(0, |remarks| {
                remarks
                    .child_tags(&[Tag::RemarksLabel, Tag::Sentence])
                    .text("備考前の注記。")
            });
    }

    #[test]
    fn test_remarks_without_table_do_not_match() {
        let lines = ["備考", "\u{3000}注記。"];
        let (node, consumed) = parse_table_struct(&lines, 0);
        assert!(node.is_none());
        assert_eq!(consumed, 0);
    }

    #[test]
    fn test_figure_in_column() {
        let lines = ["* - 図", "  - 説明", "    .. figure:: ./b.png"];
        let (node, consumed) = parse_table_struct(&lines, 0);
        assert_eq!(consumed, 3);
        assert_tree(&node.expect("table struct")).child(0, |table| {
            table.child(0, |row| {
                row.child(1, |col| {
                    col.child_tags(&[Tag::Sentence, Tag::Fig])
                        .child(1, |f| f.attribute("src", "./b.png"))
                })
            })
        });
    }
}
