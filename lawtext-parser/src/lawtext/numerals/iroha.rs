//! Ordering alphabet
//!
//!     The traditional 47-character ordering (iroha) is used in place of numerals for
//!     sub-item labels: `イ`, `ロ`, `ハ`, ...

/// The 47-character ordering sequence
pub const IROHA: &str =
    "イロハニホヘトチリヌルヲワカヨタレソツネナラムウヰノオクヤマケフコエテアサキユメミシヱヒモセス";

/// 1-based position of `text` in the sequence. Only a single letter qualifies.
pub fn iroha_index(text: &str) -> Option<usize> {
    let mut chars = text.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    IROHA
        .chars()
        .position(|letter| letter == c)
        .map(|position| position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_47_letters() {
        assert_eq!(IROHA.chars().count(), 47);
    }

    #[test]
    fn test_iroha_index() {
        assert_eq!(iroha_index("イ"), Some(1));
        assert_eq!(iroha_index("ロ"), Some(2));
        assert_eq!(iroha_index("ス"), Some(47));
        assert_eq!(iroha_index("一"), None);
        assert_eq!(iroha_index(""), None);
    }

    #[test]
    fn test_longer_text_is_not_a_letter() {
        assert_eq!(iroha_index("（ハ）"), None);
        assert_eq!(iroha_index("テスト"), None);
        assert_eq!(iroha_index("イロ"), None);
    }
}
