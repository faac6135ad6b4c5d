//! Element vocabulary
//!
//! The closed set of element names a tree may contain. Names follow the statute XML schema
//! that renderers target, so `Tag::as_str` is also the element name they emit.

use std::fmt;

macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        /// Element name of a [TreeNode](super::TreeNode)
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum Tag {
            $($name),*
        }

        impl Tag {
            /// Every tag, in declaration order
            pub const ALL: &'static [Tag] = &[$(Tag::$name),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Tag::$name => stringify!($name)),*
                }
            }
        }
    };
}

tags! {
    Law,
    LawNum,
    LawBody,
    LawTitle,
    EnactStatement,
    TOC,
    TOCLabel,
    TOCPreambleLabel,
    TOCPart,
    TOCChapter,
    TOCSection,
    TOCSubsection,
    TOCDivision,
    TOCArticle,
    TOCSupplProvision,
    TOCAppdxTableLabel,
    ArticleRange,
    MainProvision,
    Part,
    PartTitle,
    Chapter,
    ChapterTitle,
    Section,
    SectionTitle,
    Subsection,
    SubsectionTitle,
    Division,
    DivisionTitle,
    Article,
    ArticleCaption,
    ArticleTitle,
    Paragraph,
    ParagraphCaption,
    ParagraphNum,
    ParagraphSentence,
    Item,
    ItemTitle,
    ItemSentence,
    Subitem1,
    Subitem1Title,
    Subitem1Sentence,
    Subitem2,
    Subitem2Title,
    Subitem2Sentence,
    Subitem3,
    Subitem3Title,
    Subitem3Sentence,
    Subitem4,
    Subitem4Title,
    Subitem4Sentence,
    Subitem5,
    Subitem5Title,
    Subitem5Sentence,
    Subitem6,
    Subitem6Title,
    Subitem6Sentence,
    Subitem7,
    Subitem7Title,
    Subitem7Sentence,
    Subitem8,
    Subitem8Title,
    Subitem8Sentence,
    Subitem9,
    Subitem9Title,
    Subitem9Sentence,
    Subitem10,
    Subitem10Title,
    Subitem10Sentence,
    Column,
    Sentence,
    TableStruct,
    Table,
    TableRow,
    TableColumn,
    FigStruct,
    Fig,
    List,
    ListSentence,
    Remarks,
    RemarksLabel,
    SupplProvision,
    SupplProvisionLabel,
    AppdxTable,
    AppdxTableTitle,
    AppdxStyle,
    AppdxStyleTitle,
    StyleStruct,
    Style,
    AppdxFig,
    AppdxFigTitle,
    RelatedArticleNum,
}

/// Paragraph, Item, Subitem1 ... Subitem10 by nesting depth
const PARAGRAPH_ITEMS: [Tag; 12] = [
    Tag::Paragraph,
    Tag::Item,
    Tag::Subitem1,
    Tag::Subitem2,
    Tag::Subitem3,
    Tag::Subitem4,
    Tag::Subitem5,
    Tag::Subitem6,
    Tag::Subitem7,
    Tag::Subitem8,
    Tag::Subitem9,
    Tag::Subitem10,
];

const PARAGRAPH_ITEM_TITLES: [Tag; 12] = [
    Tag::ParagraphNum,
    Tag::ItemTitle,
    Tag::Subitem1Title,
    Tag::Subitem2Title,
    Tag::Subitem3Title,
    Tag::Subitem4Title,
    Tag::Subitem5Title,
    Tag::Subitem6Title,
    Tag::Subitem7Title,
    Tag::Subitem8Title,
    Tag::Subitem9Title,
    Tag::Subitem10Title,
];

const PARAGRAPH_ITEM_SENTENCES: [Tag; 12] = [
    Tag::ParagraphSentence,
    Tag::ItemSentence,
    Tag::Subitem1Sentence,
    Tag::Subitem2Sentence,
    Tag::Subitem3Sentence,
    Tag::Subitem4Sentence,
    Tag::Subitem5Sentence,
    Tag::Subitem6Sentence,
    Tag::Subitem7Sentence,
    Tag::Subitem8Sentence,
    Tag::Subitem9Sentence,
    Tag::Subitem10Sentence,
];

/// Deepest paragraph/item nesting depth (Subitem10)
pub const MAX_PARAGRAPH_ITEM_DEPTH: usize = PARAGRAPH_ITEMS.len() - 1;

impl Tag {
    /// Paragraph (0), Item (1), Subitem1 (2) ... Subitem10 (11)
    pub fn paragraph_item(depth: usize) -> Option<Tag> {
        PARAGRAPH_ITEMS.get(depth).copied()
    }

    /// Title tag of the paragraph/item at `depth`
    pub fn paragraph_item_title(depth: usize) -> Option<Tag> {
        PARAGRAPH_ITEM_TITLES.get(depth).copied()
    }

    /// Sentence container tag of the paragraph/item at `depth`
    pub fn paragraph_item_sentence(depth: usize) -> Option<Tag> {
        PARAGRAPH_ITEM_SENTENCES.get(depth).copied()
    }

    /// Title tags of Item and Subitem1 ... Subitem10
    pub fn item_titles() -> &'static [Tag] {
        &PARAGRAPH_ITEM_TITLES[1..]
    }

    /// Title tag of a grouping unit (Part ... Division) or its table-of-contents entry
    pub fn group_title(&self) -> Option<Tag> {
        match self {
            Tag::Part | Tag::TOCPart => Some(Tag::PartTitle),
            Tag::Chapter | Tag::TOCChapter => Some(Tag::ChapterTitle),
            Tag::Section | Tag::TOCSection => Some(Tag::SectionTitle),
            Tag::Subsection | Tag::TOCSubsection => Some(Tag::SubsectionTitle),
            Tag::Division | Tag::TOCDivision => Some(Tag::DivisionTitle),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_item_tables_line_up() {
        assert_eq!(Tag::paragraph_item(0), Some(Tag::Paragraph));
        assert_eq!(Tag::paragraph_item_title(0), Some(Tag::ParagraphNum));
        assert_eq!(Tag::paragraph_item(1), Some(Tag::Item));
        assert_eq!(Tag::paragraph_item_sentence(1), Some(Tag::ItemSentence));
        assert_eq!(Tag::paragraph_item(11), Some(Tag::Subitem10));
        assert_eq!(Tag::paragraph_item_title(11), Some(Tag::Subitem10Title));
        assert_eq!(Tag::paragraph_item(12), None);

        for depth in 1..=MAX_PARAGRAPH_ITEM_DEPTH {
            let item = Tag::paragraph_item(depth).unwrap().as_str();
            let title = Tag::paragraph_item_title(depth).unwrap().as_str();
            let sentence = Tag::paragraph_item_sentence(depth).unwrap().as_str();
            assert_eq!(title, format!("{}Title", item));
            assert_eq!(sentence, format!("{}Sentence", item));
        }
    }

    #[test]
    fn test_as_str_matches_variant_name() {
        assert_eq!(Tag::TOCChapter.as_str(), "TOCChapter");
        assert_eq!(Tag::Subitem10Sentence.to_string(), "Subitem10Sentence");
        assert_eq!(Tag::ALL.first(), Some(&Tag::Law));
        assert_eq!(Tag::ALL.last(), Some(&Tag::RelatedArticleNum));
    }
}
