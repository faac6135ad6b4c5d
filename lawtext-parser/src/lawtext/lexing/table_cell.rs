//! Table cell attribute prefixes
//!
//!     A table cell body may start with any number of `[name="value"]` or `[name=value]`
//!     tokens, e.g. `[rowspan="2"][BorderTop=none]項目`. They are stripped one at a time from
//!     the front of the cell text. A repeated name keeps its first position and takes the
//!     last value.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static CELL_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\[(?P<name>[^=\]]+)=(?:"(?P<quoted>[^"]*)"|(?P<plain>[^\]]*))\]"#).unwrap()
});

/// Split leading attribute tokens from a cell body.
pub fn split_cell_attributes(tcbody: &str) -> (IndexMap<String, String>, &str) {
    let mut attributes = IndexMap::new();
    let mut rest = tcbody;

    while let Some(caps) = CELL_ATTRIBUTE.captures(rest) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        let value = caps
            .name("quoted")
            .or_else(|| caps.name("plain"))
            .map_or("", |m| m.as_str());
        attributes.insert(name.to_string(), value.to_string());

        let consumed = caps.get(0).map_or(0, |m| m.end());
        if consumed == 0 {
            break;
        }
        rest = &rest[consumed..];
    }

    (attributes, rest)
}
