//! Tree nodes
//!
//!     A node is a tag, an ordered attribute map and an ordered list of children. Children are
//!     either nodes or raw text. In practice a node is one of two shapes:
//!
//!         - container: every child is a node
//!         - leaf: exactly one text child, or no children at all
//!
//!     Attribute order is part of the output contract, so the map is an [IndexMap] and setting
//!     an existing key replaces its value in place.

use super::tag::Tag;
use indexmap::IndexMap;

/// Ordered attribute map of a node
pub type Attributes = IndexMap<String, String>;

/// A child of a [TreeNode]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Child {
    Node(TreeNode),
    Text(String),
}

impl Child {
    pub fn as_node(&self) -> Option<&TreeNode> {
        match self {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Node(_) => None,
            Child::Text(text) => Some(text),
        }
    }
}

impl From<TreeNode> for Child {
    fn from(node: TreeNode) -> Self {
        Child::Node(node)
    }
}

/// One element of the document tree
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TreeNode {
    pub tag: Tag,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub children: Vec<Child>,
}

impl TreeNode {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// A leaf holding `text`. Empty text yields a leaf with no children.
    pub fn leaf(tag: Tag, text: impl Into<String>) -> Self {
        let mut node = Self::new(tag);
        node.push_text(text);
        node
    }

    pub fn with_children(tag: Tag, children: Vec<TreeNode>) -> Self {
        let mut node = Self::new(tag);
        node.children = children.into_iter().map(Child::Node).collect();
        node
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set `name`, replacing any previous value without moving the key.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(Child::Node(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(Child::Text(text));
        }
    }

    /// Node children in order, skipping text
    pub fn child_nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().filter_map(Child::as_node)
    }

    pub fn child_nodes_mut(&mut self) -> impl Iterator<Item = &mut TreeNode> {
        self.children.iter_mut().filter_map(|child| match child {
            Child::Node(node) => Some(node),
            Child::Text(_) => None,
        })
    }

    /// First direct child with `tag`
    pub fn first_child(&self, tag: Tag) -> Option<&TreeNode> {
        self.child_nodes().find(|child| child.tag == tag)
    }

    /// Concatenated text of the whole subtree, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Child::Node(node) => node.collect_text(out),
                Child::Text(text) => out.push_str(text),
            }
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.iter().all(|child| matches!(child, Child::Text(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_with_empty_text_has_no_children() {
        let node = TreeNode::leaf(Tag::ParagraphNum, "");
        assert!(node.is_empty());
        assert!(node.is_leaf());
        assert_eq!(node.text(), "");
    }

    #[test]
    fn test_set_attribute_keeps_position() {
        let mut node = TreeNode::new(Tag::Article)
            .with_attribute("Delete", "false")
            .with_attribute("Hide", "false");
        node.set_attribute("Delete", "true");

        let keys: Vec<&str> = node.attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Delete", "Hide"]);
        assert_eq!(node.attribute("Delete"), Some("true"));
        assert_eq!(node.attribute("Num"), None);
    }

    #[test]
    fn test_text_concatenates_subtree() {
        let mut sentence = TreeNode::new(Tag::ParagraphSentence);
        sentence.push(TreeNode::leaf(Tag::Sentence, "前段。"));
        sentence.push(TreeNode::leaf(Tag::Sentence, "後段。"));

        assert_eq!(sentence.text(), "前段。後段。");
        assert!(!sentence.is_leaf());
        assert_eq!(sentence.child_nodes().count(), 2);
        assert_eq!(
            sentence.first_child(Tag::Sentence).map(TreeNode::text),
            Some("前段。".to_string())
        );
    }

    #[test]
    fn test_serializes_untagged_children_in_order() {
        let node = TreeNode::with_children(Tag::LawBody, vec![TreeNode::leaf(Tag::LawTitle, "テスト法")])
            .with_attribute("Lang", "ja");
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"tag":"LawBody","attributes":{"Lang":"ja"},"children":[{"tag":"LawTitle","children":["テスト法"]}]}"#
        );
    }
}
