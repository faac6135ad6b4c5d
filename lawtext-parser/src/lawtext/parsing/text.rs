//! Line text helpers shared by the grammar rules
//!
//!     Rules never look inside a line beyond what is here: splitting a heading token from its
//!     body, recognizing the fixed heading shapes, and splitting a body into columns and
//!     sentences.

use crate::lawtext::ast::{Tag, TreeNode};
use once_cell::sync::Lazy;
use regex::Regex;

static ARTICLE_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^○?第[一二三四五六七八九十百千]+条(?:の[一二三四五六七八九十百千]+)*$").unwrap()
});

static PART_OR_APPDX_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:第[一二三四五六七八九十百千]+編|別表)").unwrap());

static PARENTHESIZED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[(（](?P<inner>.*)[)）]$").unwrap());

static PARAGRAPH_NUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^○?[0-9０-９]+$").unwrap());

static GROUP_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^○?第[一二三四五六七八九十百千]+(?P<marker>[編章節款目])(?:の[一二三四五六七八九十百千]+)*$",
    )
    .unwrap()
});

static SUPPL_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<label>[附付]則)(?:[(（](?P<amend>[^)）]*)[)）])?(?P<extract>抄)?$").unwrap()
});

static TRAILING_PAREN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<title>\S.*?)\s*(?P<paren>[(（][^()（）]*[)）])$").unwrap()
});

/// Heading token and body of a line: `第一条　目的` -> (`第一条`, `目的`).
pub fn split_title(body: &str) -> (&str, &str) {
    match body.find(char::is_whitespace) {
        Some(at) => (&body[..at], body[at..].trim_start()),
        None => (body, ""),
    }
}

pub fn first_token(body: &str) -> &str {
    split_title(body).0
}

pub fn strip_spaces(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn is_article_title(body: &str) -> bool {
    let title = first_token(body);
    ARTICLE_TITLE.is_match(title) && !PART_OR_APPDX_TABLE.is_match(title)
}

/// Inner text of a fully parenthesized line
pub fn parenthesized(body: &str) -> Option<&str> {
    PARENTHESIZED
        .captures(body)
        .and_then(|caps| caps.name("inner"))
        .map(|m| m.as_str())
}

pub fn is_parenthesized(body: &str) -> bool {
    PARENTHESIZED.is_match(body)
}

pub fn is_paragraph_num(title: &str) -> bool {
    PARAGRAPH_NUM.is_match(title)
}

/// Grouping rank of a heading line: Part 1, Chapter 2, Section 3, Subsection 4, Division 5.
pub fn group_rank(body: &str) -> Option<usize> {
    let caps = GROUP_HEADING.captures(first_token(body))?;
    match caps.name("marker")?.as_str() {
        "編" => Some(1),
        "章" => Some(2),
        "節" => Some(3),
        "款" => Some(4),
        "目" => Some(5),
        _ => None,
    }
}

/// Parsed supplementary provision label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplLabel {
    pub label: String,
    pub amend_law_num: Option<String>,
    pub extract: bool,
}

/// Match a supplementary provision label such as `附　則（平成十年法律第一号）　抄`.
pub fn suppl_label(body: &str) -> Option<SupplLabel> {
    let stripped = strip_spaces(body);
    let caps = SUPPL_LABEL.captures(&stripped)?;
    Some(SupplLabel {
        label: caps.name("label")?.as_str().to_string(),
        amend_law_num: caps.name("amend").map(|m| m.as_str().to_string()),
        extract: caps.name("extract").is_some(),
    })
}

/// Appendix kinds by label prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppdxKind {
    Table,
    Style,
    Fig,
}

pub fn appdx_kind(body: &str) -> Option<AppdxKind> {
    let title = first_token(body);
    if title.starts_with("別表") {
        Some(AppdxKind::Table)
    } else if title.starts_with("様式") {
        Some(AppdxKind::Style)
    } else if title.starts_with("別図") {
        Some(AppdxKind::Fig)
    } else {
        None
    }
}

/// Lines that open a construct of their own and so can never be free text.
pub fn is_structural(body: &str) -> bool {
    let title = first_token(body);
    is_article_title(body)
        || is_parenthesized(body)
        || is_paragraph_num(title)
        || suppl_label(body).is_some()
        || appdx_kind(body).is_some()
}

/// Split a trailing parenthesized part off a title:
/// `別表第一（第三条関係）` -> (`別表第一`, `（第三条関係）`).
pub fn split_trailing_paren(title: &str) -> (&str, Option<&str>) {
    match TRAILING_PAREN.captures(title) {
        Some(caps) => match (caps.name("title"), caps.name("paren")) {
            (Some(head), Some(paren)) => (head.as_str(), Some(paren.as_str())),
            _ => (title, None),
        },
        None => (title, None),
    }
}

/// Split text into sentences after each `。` outside brackets.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for c in text.chars() {
        current.push(c);
        match c {
            '（' | '「' | '(' => depth += 1,
            '）' | '」' | ')' => depth = depth.saturating_sub(1),
            '。' if depth == 0 => sentences.push(std::mem::take(&mut current)),
            _ => {}
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }
    sentences
}

/// Sentence leaves of one column. Empty text yields a single empty Sentence.
pub fn sentences_of(text: &str) -> Vec<TreeNode> {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return vec![TreeNode::new(Tag::Sentence)];
    }
    sentences
        .into_iter()
        .map(|sentence| TreeNode::leaf(Tag::Sentence, sentence))
        .collect()
}

/// Children of a sentence container: Sentences, or Columns of Sentences when the body has
/// full-width-space separated columns.
pub fn sentence_children(body: &str) -> Vec<TreeNode> {
    let columns: Vec<&str> = body.split('\u{3000}').filter(|c| !c.is_empty()).collect();
    if columns.len() <= 1 {
        return sentences_of(columns.first().copied().unwrap_or(""));
    }
    columns
        .into_iter()
        .map(|column| TreeNode::with_children(Tag::Column, sentences_of(column)))
        .collect()
}
