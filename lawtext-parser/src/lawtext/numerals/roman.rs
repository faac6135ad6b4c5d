//! Restricted roman numerals
//!
//!     Only the `i` and `x` letters are understood, in any case and width, which covers the
//!     ordinal suffixes used for items (`i` to `xxxix`). Scanning left to right, an `i` directly
//!     followed by an `x` subtracts one, any other `i` adds one, and every `x` adds ten.
//!     Other characters are skipped.

fn is_i(c: char) -> bool {
    matches!(c, 'i' | 'I' | 'ｉ' | 'Ｉ')
}

fn is_x(c: char) -> bool {
    matches!(c, 'x' | 'X' | 'ｘ' | 'Ｘ')
}

/// Decode a restricted roman numeral, or `None` when nothing positive was read.
pub fn parse_roman_num(text: &str) -> Option<u32> {
    let chars: Vec<char> = text.chars().collect();
    let mut num: i64 = 0;

    for (i, &c) in chars.iter().enumerate() {
        if is_i(c) {
            if chars.get(i + 1).is_some_and(|&next| is_x(next)) {
                num -= 1;
            } else {
                num += 1;
            }
        }
        if is_x(c) {
            num += 10;
        }
    }

    u32::try_from(num).ok().filter(|n| *n > 0)
}
