//! Named-number decoding
//!
//!     A named number is the normalized key of a heading. Only the first whitespace-delimited
//!     token of the heading is read. It is split on connector phrases (`及び`, `から`, `、`,
//!     `・`, `～`; a closing `まで` is dropped) and each piece is decoded by the first rule that
//!     accepts it:
//!
//!         1. Kanji numeral with optional `の` branches: `第十二条の三` -> `12_3`
//!         2. A lone ordering-alphabet letter: `ロ` -> `2`
//!         3. Digits after wide-digit normalization: `（１）` -> `1`
//!         4. Restricted roman numeral: `ii` -> `2`
//!
//!     Decoded pieces are joined with `:`, so `第三条から第五条まで` becomes `3:5`. Pieces no rule
//!     accepts contribute nothing.

use super::iroha::iroha_index;
use super::kanji::parse_kanji_num;
use super::roman::parse_roman_num;
use super::wide::replace_wide_num;
use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

/// Connector tokenization of a heading token
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Piece {
    #[token("及び")]
    #[token("から")]
    #[token("、")]
    #[token("・")]
    #[token("～")]
    #[token("~")]
    Connector,

    #[token("まで")]
    Until,

    #[regex(".", priority = 1)]
    Char,
}

static NAMED_NUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^○?第?(?P<num>[一二三四五六七八九十百千]+)\S*?(?P<branches>(?:の[一二三四五六七八九十百千]+)*)$",
    )
    .unwrap()
});

static ITEM_NUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^0-9]*(?P<num>[0-9]+)[^0-9]*$").unwrap());

/// Split the first token of `text` on connector phrases.
fn split_pieces(text: &str) -> Vec<String> {
    let head = text.split_whitespace().next().unwrap_or("");

    let mut pieces = vec![String::new()];
    let mut lexer = Piece::lexer(head);
    while let Some(piece) = lexer.next() {
        match piece {
            Ok(Piece::Connector) => pieces.push(String::new()),
            Ok(Piece::Until) => {}
            Ok(Piece::Char) | Err(()) => {
                if let Some(last) = pieces.last_mut() {
                    last.push_str(lexer.slice());
                }
            }
        }
    }

    pieces.retain(|piece| !piece.is_empty());
    pieces
}

fn decode_kanji_with_branches(piece: &str) -> Option<String> {
    let caps = NAMED_NUM.captures(piece)?;
    let num = parse_kanji_num(caps.name("num")?.as_str())?;

    let mut nums = vec![num.to_string()];
    if let Some(branches) = caps.name("branches") {
        nums.extend(
            branches
                .as_str()
                .split('の')
                .filter(|branch| !branch.is_empty())
                .filter_map(parse_kanji_num)
                .map(|branch| branch.to_string()),
        );
    }
    Some(nums.join("_"))
}

fn decode_piece(piece: &str) -> Option<String> {
    if let Some(num) = decode_kanji_with_branches(piece) {
        return Some(num);
    }

    if let Some(index) = iroha_index(piece) {
        return Some(index.to_string());
    }

    let normalized = replace_wide_num(piece);
    if let Some(caps) = ITEM_NUM.captures(&normalized) {
        let digits = caps.name("num").map_or("", |m| m.as_str());
        return Some(
            digits
                .parse::<u64>()
                .map_or_else(|_| digits.to_string(), |n| n.to_string()),
        );
    }

    parse_roman_num(&normalized).map(|n| n.to_string())
}

/// Decode the named number of a heading, e.g. `第十二条の三　見出し` -> `12_3`.
///
/// Returns an empty string when nothing in the heading decodes.
pub fn parse_named_num(text: &str) -> String {
    split_pieces(text)
        .iter()
        .filter_map(|piece| decode_piece(piece))
        .collect::<Vec<_>>()
        .join(":")
}
