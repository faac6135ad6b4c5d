//! Treeviz formatter for document trees
//!
//! Treeviz is a visual representation of the tree, one line per node, which makes it quick to
//! scan even for large statutes. Nesting is drawn with box-drawing connectors.
//!
//! So the format is :
//! <prefix><connector> <icon> <tag> [<attributes>] <text> (text truncated to label_width)
//!
//! Example:
//!
//!     ⧉ Law [Lang=ja]
//!     └─ ➔ LawBody
//!       ├─ ⊤ LawTitle テスト法
//!       └─ ➔ MainProvision
//!         └─ § Article [Num=1]
//!
//! Icons
//!     Structure:
//!         Law: ⧉
//!         LawBody, MainProvision, SupplProvision: ➔
//!         Part ... Division: Ψ
//!         Article: §
//!         Paragraph: ¶
//!         Item, Subitem1 ... Subitem10: •
//!     Text:
//!         Titles, labels and numbers: ⊤
//!         Sentence: ↵
//!         Column: ◦
//!     Blocks:
//!         TOC: ☰
//!         Table: ▦
//!         Fig: ⊡
//!         Appendices: ⧈
//!     Everything else: ○

use crate::lawtext::ast::{Child, Tag, TreeNode};

/// Rendering options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreevizOptions {
    /// Maximum number of text characters shown per node
    pub label_width: usize,
    pub show_attributes: bool,
}

impl Default for TreevizOptions {
    fn default() -> Self {
        Self {
            label_width: 30,
            show_attributes: true,
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn icon(tag: Tag) -> &'static str {
    match tag {
        Tag::Law => "⧉",
        Tag::LawBody | Tag::MainProvision | Tag::SupplProvision => "➔",
        Tag::Part | Tag::Chapter | Tag::Section | Tag::Subsection | Tag::Division => "Ψ",
        Tag::Article => "§",
        Tag::Paragraph => "¶",
        Tag::Sentence => "↵",
        Tag::Column => "◦",
        Tag::TOC => "☰",
        Tag::Table => "▦",
        Tag::Fig => "⊡",
        Tag::AppdxTable | Tag::AppdxStyle | Tag::AppdxFig => "⧈",
        Tag::LawNum
        | Tag::LawTitle
        | Tag::TOCLabel
        | Tag::ArticleTitle
        | Tag::ArticleCaption
        | Tag::ParagraphNum
        | Tag::ParagraphCaption
        | Tag::SupplProvisionLabel
        | Tag::RemarksLabel
        | Tag::AppdxTableTitle
        | Tag::AppdxStyleTitle
        | Tag::AppdxFigTitle
        | Tag::PartTitle
        | Tag::ChapterTitle
        | Tag::SectionTitle
        | Tag::SubsectionTitle
        | Tag::DivisionTitle => "⊤",
        tag if Tag::item_titles().contains(&tag) => "⊤",
        tag if is_item(tag) => "•",
        _ => "○",
    }
}

fn is_item(tag: Tag) -> bool {
    (1..12).any(|depth| Tag::paragraph_item(depth) == Some(tag))
}

fn label(node: &TreeNode, options: &TreevizOptions) -> String {
    let mut label = node.tag.to_string();

    if options.show_attributes && !node.attributes.is_empty() {
        let attributes = node
            .attributes
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        label.push_str(&format!(" [{}]", attributes));
    }

    let text: String = node.children.iter().filter_map(Child::as_text).collect();
    if !text.is_empty() {
        label.push(' ');
        label.push_str(&truncate(&text, options.label_width));
    }
    label
}

fn format_node(
    node: &TreeNode,
    prefix: &str,
    child_index: usize,
    child_count: usize,
    options: &TreevizOptions,
) -> String {
    let is_last = child_index + 1 == child_count;
    let connector = if is_last { "└─" } else { "├─" };

    let mut output = format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        icon(node.tag),
        label(node, options)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    output.push_str(&format_children(node, &child_prefix, options));
    output
}

fn format_children(node: &TreeNode, prefix: &str, options: &TreevizOptions) -> String {
    let children: Vec<&TreeNode> = node.child_nodes().collect();
    let child_count = children.len();
    children
        .iter()
        .enumerate()
        .map(|(i, child)| format_node(child, prefix, i, child_count, options))
        .collect()
}

/// Render a tree, root first.
pub fn to_treeviz_str(root: &TreeNode, options: &TreevizOptions) -> String {
    let mut output = format!("{} {}\n", icon(root.tag), label(root, options));
    output.push_str(&format_children(root, "", options));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TreeNode {
        let article = TreeNode::with_children(
            Tag::Article,
            vec![TreeNode::leaf(Tag::ArticleTitle, "第一条")],
        )
        .with_attribute("Num", "1");
        let main = TreeNode::with_children(Tag::MainProvision, vec![article]);
        let body = TreeNode::with_children(
            Tag::LawBody,
            vec![TreeNode::leaf(Tag::LawTitle, "テスト法"), main],
        );
        TreeNode::with_children(Tag::Law, vec![body]).with_attribute("Lang", "ja")
    }

    #[test]
    fn test_treeviz_layout() {
        let output = to_treeviz_str(&sample(), &TreevizOptions::default());
        insta::assert_snapshot!(output, @r"
        ⧉ Law [Lang=ja]
        └─ ➔ LawBody
          ├─ ⊤ LawTitle テスト法
          └─ ➔ MainProvision
            └─ § Article [Num=1]
              └─ ⊤ ArticleTitle 第一条
        ");
    }

    #[test]
    fn test_hidden_attributes_and_truncation() {
        let options = TreevizOptions {
            label_width: 3,
            show_attributes: false,
        };
        let node = TreeNode::leaf(Tag::Sentence, "この法律は、").with_attribute("Num", "1");
        assert_eq!(to_treeviz_str(&node, &options), "↵ Sentence この法...\n");
    }

    #[test]
    fn test_icons() {
        assert_eq!(icon(Tag::ChapterTitle), "⊤");
        assert_eq!(icon(Tag::Subitem3Title), "⊤");
        assert_eq!(icon(Tag::Subitem3), "•");
        assert_eq!(icon(Tag::TableRow), "○");
    }
}
