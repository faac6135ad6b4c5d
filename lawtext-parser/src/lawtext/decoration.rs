//! Decoration
//!
//!     The parser records only what is written. Decoration walks the finished tree once,
//!     pre-order, and fills in the attributes renderers expect: numbering keys (`Num`),
//!     boilerplate flags (`Delete`, `Hide`, `OldStyle`), law number metadata on the root,
//!     sentence roles (`Function`) and layout hints (`WritingMode`, `LineBreak`, borders).
//!
//!     Decoration only sets fixed keys and never touches children, so decorating a tree twice
//!     gives the same tree as decorating it once.

use crate::lawtext::ast::{Child, Tag, TreeNode};
use crate::lawtext::numerals::{parse_kanji_num, parse_named_num};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static LAW_NUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<era>明治|大正|昭和|平成)(?P<year>[一二三四五六七八九十百千]+|元)年(?P<type>\S+?)(?:第(?P<num>[一二三四五六七八九十百千]+)号)?$",
    )
    .unwrap()
});

static ERAS: &[(&str, &str)] = &[
    ("明治", "Meiji"),
    ("大正", "Taisho"),
    ("昭和", "Showa"),
    ("平成", "Heisei"),
];

static LAW_TYPES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"^法律$", "Act"),
        (r"^政令$", "CabinetOrder"),
        (r"^勅令$", "ImperialOrder"),
        (r"^\S*[^政勅]令$", "MinisterialOrdinance"),
        (r"^\S*規則$", "Rule"),
    ]
    .into_iter()
    .map(|(pattern, law_type)| (Regex::new(pattern).unwrap(), law_type))
    .collect()
});

const PROVISO_MARKERS: [&str; 2] = ["ただし、", "但し、"];

const BORDERS: [&str; 4] = ["BorderTop", "BorderBottom", "BorderLeft", "BorderRight"];

/// Decorate a tree in place.
pub fn decorate(root: &mut TreeNode) {
    debug!("decorating {} tree", root.tag);
    decorate_node(root);
}

fn decorate_node(node: &mut TreeNode) {
    match node.tag {
        Tag::Law => decorate_law(node),

        Tag::TOCPart
        | Tag::TOCChapter
        | Tag::TOCSection
        | Tag::TOCSubsection
        | Tag::TOCDivision => {
            node.set_attribute("Delete", "false");
            let title_tag = node.tag.group_title();
            set_num_from_title(node, title_tag);
        }
        Tag::TOCArticle => {
            node.set_attribute("Delete", "false");
            set_num_from_title(node, Some(Tag::ArticleTitle));
        }

        Tag::Part | Tag::Chapter | Tag::Section | Tag::Subsection | Tag::Division => {
            node.set_attribute("Delete", "false");
            node.set_attribute("Hide", "false");
            let title_tag = node.tag.group_title();
            set_num_from_title(node, title_tag);
        }
        Tag::Article => {
            node.set_attribute("Delete", "false");
            node.set_attribute("Hide", "false");
            set_num_from_title(node, Some(Tag::ArticleTitle));
        }

        Tag::Paragraph => decorate_paragraph(node),

        Tag::Item
        | Tag::Subitem1
        | Tag::Subitem2
        | Tag::Subitem3
        | Tag::Subitem4
        | Tag::Subitem5
        | Tag::Subitem6
        | Tag::Subitem7
        | Tag::Subitem8
        | Tag::Subitem9
        | Tag::Subitem10 => {
            node.set_attribute("Delete", "false");
            node.set_attribute("Hide", "false");
            let title = node
                .child_nodes()
                .find(|child| Tag::item_titles().contains(&child.tag))
                .map(TreeNode::text);
            if let Some(num) = title.map(|title| parse_named_num(&title)) {
                if !num.is_empty() {
                    node.set_attribute("Num", num);
                }
            }
        }

        Tag::ParagraphSentence
        | Tag::ItemSentence
        | Tag::Subitem1Sentence
        | Tag::Subitem2Sentence
        | Tag::Subitem3Sentence
        | Tag::Subitem4Sentence
        | Tag::Subitem5Sentence
        | Tag::Subitem6Sentence
        | Tag::Subitem7Sentence
        | Tag::Subitem8Sentence
        | Tag::Subitem9Sentence
        | Tag::Subitem10Sentence
        | Tag::Column => decorate_sentence_group(node),

        Tag::Sentence | Tag::Table | Tag::AppdxTableTitle => {
            node.set_attribute("WritingMode", "vertical");
        }

        Tag::TableColumn => {
            for border in BORDERS {
                node.set_attribute(border, "solid");
            }
        }

        Tag::LawNum
        | Tag::LawBody
        | Tag::LawTitle
        | Tag::EnactStatement
        | Tag::TOC
        | Tag::TOCLabel
        | Tag::TOCPreambleLabel
        | Tag::TOCSupplProvision
        | Tag::TOCAppdxTableLabel
        | Tag::ArticleRange
        | Tag::MainProvision
        | Tag::PartTitle
        | Tag::ChapterTitle
        | Tag::SectionTitle
        | Tag::SubsectionTitle
        | Tag::DivisionTitle
        | Tag::ArticleCaption
        | Tag::ArticleTitle
        | Tag::ParagraphCaption
        | Tag::ParagraphNum
        | Tag::ItemTitle
        | Tag::Subitem1Title
        | Tag::Subitem2Title
        | Tag::Subitem3Title
        | Tag::Subitem4Title
        | Tag::Subitem5Title
        | Tag::Subitem6Title
        | Tag::Subitem7Title
        | Tag::Subitem8Title
        | Tag::Subitem9Title
        | Tag::Subitem10Title
        | Tag::TableStruct
        | Tag::TableRow
        | Tag::FigStruct
        | Tag::Fig
        | Tag::List
        | Tag::ListSentence
        | Tag::Remarks
        | Tag::RemarksLabel
        | Tag::SupplProvision
        | Tag::SupplProvisionLabel
        | Tag::AppdxTable
        | Tag::AppdxStyle
        | Tag::AppdxStyleTitle
        | Tag::StyleStruct
        | Tag::Style
        | Tag::AppdxFig
        | Tag::AppdxFigTitle
        | Tag::RelatedArticleNum => {}
    }

    for child in node.child_nodes_mut() {
        decorate_node(child);
    }
}

fn decorate_law(node: &mut TreeNode) {
    node.set_attribute("Lang", "ja");

    let Some(law_num) = node.first_child(Tag::LawNum).map(TreeNode::text) else {
        return;
    };
    let Some(caps) = LAW_NUM.captures(&law_num) else {
        return;
    };

    if let Some(era) = caps
        .name("era")
        .and_then(|era| ERAS.iter().find(|(name, _)| *name == era.as_str()))
    {
        node.set_attribute("Era", era.1);
    }

    let year = caps.name("year").and_then(|year| match year.as_str() {
        "元" => Some(1),
        year => parse_kanji_num(year),
    });
    if let Some(year) = year {
        node.set_attribute("Year", year.to_string());
    }

    if let Some(law_type) = caps.name("type").and_then(|law_type| {
        LAW_TYPES
            .iter()
            .find(|(pattern, _)| pattern.is_match(law_type.as_str()))
    }) {
        node.set_attribute("LawType", law_type.1);
    }

    if let Some(num) = caps.name("num").and_then(|num| parse_kanji_num(num.as_str())) {
        node.set_attribute("Num", num.to_string());
    }
}

fn decorate_paragraph(node: &mut TreeNode) {
    node.set_attribute("Hide", "false");
    node.set_attribute("OldStyle", "false");

    let Some(num) = node.first_child(Tag::ParagraphNum).map(TreeNode::text) else {
        return;
    };
    if num.is_empty() {
        node.set_attribute("Num", "1");
        return;
    }
    let num = parse_named_num(&num);
    if !num.is_empty() {
        node.set_attribute("Num", num);
    }
}

/// Set `Num` from the first whitespace-delimited token of the `title_tag` child.
fn set_num_from_title(node: &mut TreeNode, title_tag: Option<Tag>) {
    let Some(title) = title_tag.and_then(|tag| node.first_child(tag)).map(TreeNode::text) else {
        return;
    };
    let num = parse_named_num(&title);
    if !num.is_empty() {
        node.set_attribute("Num", num);
    }
}

fn is_proviso(sentence: &TreeNode) -> bool {
    let text = sentence.text();
    PROVISO_MARKERS.iter().any(|marker| text.starts_with(marker))
}

fn decorate_sentence_group(node: &mut TreeNode) {
    let mut members: Vec<&mut TreeNode> = node
        .children
        .iter_mut()
        .filter_map(|child| match child {
            Child::Node(child) if matches!(child.tag, Tag::Column | Tag::Sentence) => Some(child),
            _ => None,
        })
        .collect();

    let provisos: Vec<bool> = members
        .iter()
        .map(|member| member.tag == Tag::Sentence && is_proviso(member))
        .collect();
    let has_proviso = provisos.iter().any(|proviso| *proviso);
    let numbered = members.len() > 1;

    for (index, member) in members.iter_mut().enumerate() {
        if numbered {
            member.set_attribute("Num", (index + 1).to_string());
        }
        if member.tag == Tag::Column {
            member.set_attribute("LineBreak", "false");
        }
        if has_proviso && numbered {
            let function = if provisos[index] { "proviso" } else { "main" };
            member.set_attribute("Function", function);
        }
    }
}
