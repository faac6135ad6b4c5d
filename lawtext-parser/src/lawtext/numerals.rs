//! Numeral parsers
//!
//!     Lawtext headings number their units in several notations, often mixed in one document:
//!
//!         - Kanji numerals: `第十二条`, `二千三十四`. See [kanji](kanji).
//!         - Wide (full-width) digits: `２`, `（１）`. See [wide](wide).
//!         - Restricted roman numerals in `i`/`x`: `（ii）`, `ｉｘ`. See [roman](roman).
//!         - The 47-character ordering alphabet: `イ`, `ロ`, `ハ`. See [iroha](iroha).
//!
//!     [named](named) combines them to turn a heading such as `第十二条の三` or
//!     `第三条から第五条まで` into the normalized key stored in `Num` attributes.
//!
//!     All functions here are pure and allocation-light; the regex and alphabet tables are
//!     process-wide constants initialized on first use.

pub mod iroha;
pub mod kanji;
pub mod named;
pub mod roman;
pub mod wide;

pub use iroha::{iroha_index, IROHA};
pub use kanji::{kanji_digit, parse_kanji_num};
pub use named::parse_named_num;
pub use roman::parse_roman_num;
pub use wide::replace_wide_num;
