//! End-to-end tests: source text through lexing, parsing and decoration.

use lawtext_parser::lawtext::testing::assert_tree;
use lawtext_parser::{parse_lawtext, process, ErrorKind, Tag};
use rstest::rstest;

const SAMPLE_LAW: &str = "\
テスト法
（平成十年法律第三十四号）

目次
\u{3000}第一章\u{3000}総則（第一条・第二条）
\u{3000}第二章\u{3000}雑則（第三条）
\u{3000}附則

\u{3000}\u{3000}\u{3000}第一章\u{3000}総則

（目的）
第一条\u{3000}この法律は、試験のために定める。
２\u{3000}前項の規定は、別に定める場合には、適用しない。ただし、政令で定める場合は、この限りでない。

第二条\u{3000}次に掲げる者は、届け出なければならない。
\u{3000}一\u{3000}事業者
\u{3000}二\u{3000}団体
\u{3000}\u{3000}イ\u{3000}法人
\u{3000}\u{3000}ロ\u{3000}法人でない団体

\u{3000}\u{3000}\u{3000}第二章\u{3000}雑則

第三条\u{3000}この法律の施行に関し必要な事項は、政令で定める。

\u{3000}\u{3000}\u{3000}附\u{3000}則

この法律は、公布の日から施行する。

別表第一（第二条関係）
\u{3000}* - 区分
\u{3000}  - 金額
";

#[test]
fn test_law_number_round_trip() {
    let law = process("テスト法\n（平成十年法律第三十四号）\n\n第一条\u{3000}本文。\n").unwrap();

    assert_tree(&law)
        .tag(Tag::Law)
        .attributes(&[
            ("Lang", "ja"),
            ("Era", "Heisei"),
            ("Year", "10"),
            ("LawType", "Act"),
            ("Num", "34"),
        ])
        .child(0, |num| num.tag(Tag::LawNum).text("平成十年法律第三十四号"));
}

#[test]
fn test_raw_tree_has_no_decoration() {
    let law = parse_lawtext("テスト法\n（平成十年法律第三十四号）\n").unwrap();
    assert!(law.attributes.is_empty());
}

#[test]
fn test_sample_law_structure() {
    let law = process(SAMPLE_LAW).unwrap();

    assert_tree(&law).child(1, |body| {
        body.child_tags(&[
            Tag::LawTitle,
            Tag::TOC,
            Tag::MainProvision,
            Tag::SupplProvision,
            Tag::AppdxTable,
        ])
        .child(1, |toc| {
            toc.child_tags(&[
                Tag::TOCLabel,
                Tag::TOCChapter,
                Tag::TOCChapter,
                Tag::TOCSupplProvision,
            ])
            .child(1, |chapter| {
                chapter
                    .attributes(&[("Delete", "false"), ("Num", "1")])
                    .child(1, |range| range.tag(Tag::ArticleRange).text("（第一条・第二条）"))
            })
        })
        .child(2, |main| {
            main.child_tags(&[Tag::Chapter, Tag::Chapter])
                .child(0, |chapter| {
                    chapter
                        .attributes(&[("Delete", "false"), ("Hide", "false"), ("Num", "1")])
                        .child_tags(&[Tag::ChapterTitle, Tag::Article, Tag::Article])
                })
                .child(1, |chapter| {
                    chapter
                        .attribute("Num", "2")
                        .child_tags(&[Tag::ChapterTitle, Tag::Article])
                })
        })
        .child(3, |suppl| {
            suppl
                .child_tags(&[Tag::SupplProvisionLabel, Tag::Paragraph])
                .child(0, |label| label.text("附則"))
                .child(1, |paragraph| paragraph.attribute("Num", "1"))
        })
        .child(4, |appendix| {
            appendix
                .child_tags(&[Tag::AppdxTableTitle, Tag::RelatedArticleNum, Tag::TableStruct])
                .child(0, |title| title.attribute("WritingMode", "vertical"))
        })
    });
}

#[test]
fn test_sample_law_articles() {
    let law = process(SAMPLE_LAW).unwrap();

    assert_tree(&law).child(1, |body| {
        body.first(Tag::MainProvision, |main| {
            main.child(0, |chapter| {
                chapter
                    .child(1, |article| {
                        article
                            .attribute("Num", "1")
                            .child_tags(&[
                                Tag::ArticleCaption,
                                Tag::ArticleTitle,
                                Tag::Paragraph,
                                Tag::Paragraph,
                            ])
                            .child(0, |caption| caption.text("（目的）"))
                            .child(3, |paragraph| {
                                paragraph.attribute("Num", "2").first(
                                    Tag::ParagraphSentence,
                                    |sentences| {
                                        sentences
                                            .child_count(2)
                                            .child(0, |s| {
                                                s.attributes(&[
                                                    ("Num", "1"),
                                                    ("Function", "main"),
                                                    ("WritingMode", "vertical"),
                                                ])
                                            })
                                            .child(1, |s| s.attribute("Function", "proviso"))
                                    },
                                )
                            })
                    })
                    .child(2, |article| {
                        article.attribute("Num", "2").child(1, |paragraph| {
                            paragraph
                                .child_tags(&[
                                    Tag::ParagraphNum,
                                    Tag::ParagraphSentence,
                                    Tag::Item,
                                    Tag::Item,
                                ])
                                .child(3, |item| {
                                    item.attribute("Num", "2")
                                        .child_tags(&[
                                            Tag::ItemTitle,
                                            Tag::ItemSentence,
                                            Tag::Subitem1,
                                            Tag::Subitem1,
                                        ])
                                        .child(3, |subitem| {
                                            subitem
                                                .attribute("Num", "2")
                                                .first(Tag::Subitem1Title, |t| t.text("ロ"))
                                        })
                                })
                        })
                    })
            })
        })
    });
}

#[test]
fn test_empty_input() {
    for source in ["", "\n\n", "\u{3000}\n \n"] {
        let law = process(source).unwrap();
        assert_tree(&law)
            .attributes(&[("Lang", "ja")])
            .child_tags(&[Tag::LawBody])
            .child(0, |body| body.child_count(0));
    }
}

#[rstest]
#[case::missing_parentheses("テスト法\n平成十年法律第三十四号\n", ErrorKind::MissingLawNumberParentheses, 1)]
#[case::toc_jump(
    "目次\n\u{3000}第一章\u{3000}総則\n\u{3000}\u{3000}\u{3000}第一節\u{3000}通則\n",
    ErrorKind::TocIndentMismatch,
    2
)]
#[case::trailing_input("第一条\u{3000}本文。\n\n余り\n", ErrorKind::TrailingUnparsedInput, 2)]
#[case::indent_inconsistency("テスト法\n\u{3000}甲\n  乙\n", ErrorKind::IndentInconsistency, 2)]
#[case::lone_article_title("第一条\n\u{3000}一\u{3000}号\n", ErrorKind::TrailingUnparsedInput, 0)]
#[case::lone_article_title_before_article(
    "第一条\n第二条\u{3000}本文。\n",
    ErrorKind::StructuralParseFailure,
    1
)]
#[case::unrecognized_line("題\r\n甲\n乙\r\n", ErrorKind::UnrecognizedLineStructure, 1)]
fn test_error_kinds(#[case] source: &str, #[case] kind: ErrorKind, #[case] line: usize) {
    let err = process(source).unwrap_err();
    assert_eq!(err.kind, kind, "{}", err);
    assert_eq!(err.line, line);
    assert!(err.context.contains(&format!(">> {:3} |", line + 1)));
}

#[test]
fn test_suppl_provision_attributes() {
    let source = "第一条\u{3000}本文。\n\n\u{3000}\u{3000}\u{3000}附\u{3000}則（平成十一年法律第五号）\u{3000}抄\n\n第一条\u{3000}施行する。\n";
    let law = process(source).unwrap();

    assert_tree(&law).child(0, |body| {
        body.child_tags(&[Tag::MainProvision, Tag::SupplProvision])
            .child(1, |suppl| {
                suppl
                    .attributes(&[("AmendLawNum", "平成十一年法律第五号"), ("Extract", "true")])
                    .child_tags(&[Tag::SupplProvisionLabel, Tag::Article])
            })
    });
}

#[test]
fn test_table_cells_and_borders() {
    let source = "別表第一\n\u{3000}* - [rowspan=\"2\"][BorderTop=none]区分\n\u{3000}  - 金額\n\u{3000}* - 手数料\n";
    let law = process(source).unwrap();

    assert_tree(&law).child(0, |body| {
        body.child(0, |appendix| {
            appendix.first(Tag::TableStruct, |table_struct| {
                table_struct.child(0, |table| {
                    table
                        .tag(Tag::Table)
                        .attribute("WritingMode", "vertical")
                        .child_count(2)
                        .child(0, |row| {
                            row.child_count(2).child(0, |column| {
                                column
                                    .attributes(&[
                                        ("rowspan", "2"),
                                        ("BorderTop", "solid"),
                                        ("BorderBottom", "solid"),
                                        ("BorderLeft", "solid"),
                                        ("BorderRight", "solid"),
                                    ])
                                    .text("区分")
                            })
                        })
                })
            })
        })
    });
}

#[test]
fn test_appendix_style_and_figure() {
    let source = "様式第一（第五条関係）\n\u{3000}.. figure:: ./style1.pdf\n\n別図第一\n\u{3000}.. figure:: ./fig1.png\n";
    let law = process(source).unwrap();

    assert_tree(&law).child(0, |body| {
        body.child_tags(&[Tag::AppdxStyle, Tag::AppdxFig])
            .child(1, |appendix| {
                appendix.first(Tag::FigStruct, |fig_struct| {
                    fig_struct.child(0, |fig| fig.attribute("src", "./fig1.png"))
                })
            })
    });
}

#[test]
fn test_lone_proviso_sentence_has_no_function() {
    let law = process("第一条\u{3000}ただし、この限りでない。\n").unwrap();

    assert_tree(&law).child(0, |body| {
        body.first(Tag::MainProvision, |main| {
            main.child(0, |article| {
                article.first(Tag::Paragraph, |paragraph| {
                    paragraph.first(Tag::ParagraphSentence, |sentences| {
                        sentences
                            .child_count(1)
                            .child(0, |s| s.attributes(&[("WritingMode", "vertical")]))
                    })
                })
            })
        })
    });
}

#[test]
fn test_decoration_is_idempotent() {
    let mut law = process(SAMPLE_LAW).unwrap();
    let once = law.clone();
    lawtext_parser::decorate(&mut law);
    assert_eq!(law, once);
}
