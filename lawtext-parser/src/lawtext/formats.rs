//! Output formats for the document tree
//!
//!     - treeviz: one line per node with box-drawing connectors, for humans. See [treeviz].
//!     - JSON and YAML: the serde form of [TreeNode], for other tools. Attribute order is kept.

pub mod treeviz;

pub use treeviz::{to_treeviz_str, TreevizOptions};

use crate::lawtext::ast::TreeNode;

/// Serialize a tree as JSON.
pub fn to_json_str(node: &TreeNode, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(node)
    } else {
        serde_json::to_string(node)
    }
}

/// Serialize a tree as YAML.
pub fn to_yaml_str(node: &TreeNode) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lawtext::ast::Tag;

    #[test]
    fn test_json_keeps_attribute_order() {
        let node = TreeNode::new(Tag::Law)
            .with_attribute("Lang", "ja")
            .with_attribute("Era", "Heisei")
            .with_attribute("Year", "10");
        let json = to_json_str(&node, false).unwrap();
        assert_eq!(
            json,
            r#"{"tag":"Law","attributes":{"Lang":"ja","Era":"Heisei","Year":"10"},"children":[]}"#
        );
    }

    #[test]
    fn test_yaml_output() {
        let node = TreeNode::leaf(Tag::LawTitle, "テスト法");
        let yaml = to_yaml_str(&node).unwrap();
        assert!(yaml.contains("tag: LawTitle"));
        assert!(yaml.contains("テスト法"));
    }
}
