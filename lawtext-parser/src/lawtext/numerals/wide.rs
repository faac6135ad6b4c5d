//! Wide-digit normalization

const WIDE_DIGITS: [(char, char); 10] = [
    ('０', '0'),
    ('１', '1'),
    ('２', '2'),
    ('３', '3'),
    ('４', '4'),
    ('５', '5'),
    ('６', '6'),
    ('７', '7'),
    ('８', '8'),
    ('９', '9'),
];

/// Replace full-width digits with their ASCII equivalents. Other characters are untouched.
pub fn replace_wide_num(text: &str) -> String {
    text.chars()
        .map(|c| {
            WIDE_DIGITS
                .iter()
                .find(|(wide, _)| *wide == c)
                .map_or(c, |(_, ascii)| *ascii)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_wide_num() {
        assert_eq!(replace_wide_num("（１２）"), "（12）");
        assert_eq!(replace_wide_num("０９"), "09");
    }

    #[test]
    fn test_replace_wide_num_is_idempotent() {
        let once = replace_wide_num("第１０項 7");
        assert_eq!(replace_wide_num(&once), once);
        assert_eq!(once, "第10項 7");
    }
}
