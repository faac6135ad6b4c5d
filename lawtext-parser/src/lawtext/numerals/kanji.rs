//! Kanji numeral decoding
//!
//!     Grammar: `(d? 千)? (d? 百)? (d? 十)? d?` where `d` is one of the nine CJK digits.
//!     A multiplier without a digit in front of it counts once (`千` is 1000, `十二` is 12).
//!     Anything else, including the empty string, is not a kanji numeral.

use once_cell::sync::Lazy;
use regex::Regex;

static KANJI_NUM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<g1000>(?P<d1000>[一二三四五六七八九]?)千)?(?P<g100>(?P<d100>[一二三四五六七八九]?)百)?(?P<g10>(?P<d10>[一二三四五六七八九]?)十)?(?P<d1>[一二三四五六七八九])?$",
    )
    .unwrap()
});

/// Value of a single CJK digit character.
pub fn kanji_digit(c: char) -> Option<u32> {
    let value = match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    };
    Some(value)
}

/// Decode a kanji numeral, or `None` if `text` is not one.
pub fn parse_kanji_num(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }
    let caps = KANJI_NUM.captures(text)?;

    let group = |name: &str, digit: &str, multiplier: u32| -> u32 {
        if caps.name(name).is_none() {
            return 0;
        }
        let digit = caps
            .name(digit)
            .and_then(|m| m.as_str().chars().next())
            .and_then(kanji_digit)
            .unwrap_or(1);
        digit * multiplier
    };

    let ones = caps
        .name("d1")
        .and_then(|m| m.as_str().chars().next())
        .and_then(kanji_digit)
        .unwrap_or(0);

    Some(group("g1000", "d1000", 1000) + group("g100", "d100", 100) + group("g10", "d10", 10) + ones)
}
