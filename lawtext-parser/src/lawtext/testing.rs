//! Testing utilities for tree assertions
//!
//!     Lawtext trees are deep and uniform: every node is a tag, an ordered attribute map and a
//!     list of children. Comparing whole trees with `assert_eq!` makes for unreadable failures
//!     once a statute grows past a handful of nodes, and matching on `children[1]` by hand
//!     hides which branch went wrong.
//!
//!     Use the fluent API instead. Each step checks one property and carries a context path,
//!     so a failure reads like `Law[1][0]: Expected tag LawTitle, found EnactStatement`.
//!
//!     ```rust,ignore
//!     use crate::lawtext::testing::assert_tree;
//!
//!     let law = process(source).unwrap();
//!     assert_tree(&law)
//!         .tag(Tag::Law)
//!         .attribute("Era", "Heisei")
//!         .child_tags(&[Tag::LawNum, Tag::LawBody])
//!         .child(1, |body| {
//!             body.child(0, |title| title.tag(Tag::LawTitle).text("テスト法"))
//!         });
//!     ```
//!
//! Indices
//!
//!     `child(index, ..)` and `child_count` see element children only. Text children are
//!     reached through `text`, which compares the concatenated text of the whole subtree.

use crate::lawtext::ast::{Tag, TreeNode};

/// Create an assertion builder for a tree
pub fn assert_tree(node: &TreeNode) -> NodeAssertion<'_> {
    NodeAssertion {
        node,
        context: node.tag.to_string(),
    }
}

pub struct NodeAssertion<'a> {
    node: &'a TreeNode,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn tag(self, expected: Tag) -> Self {
        assert_eq!(
            self.node.tag, expected,
            "{}: Expected tag {}, found {}",
            self.context, expected, self.node.tag
        );
        self
    }

    /// Assert the concatenated text of the subtree
    pub fn text(self, expected: &str) -> Self {
        let actual = self.node.text();
        assert_eq!(
            actual, expected,
            "{}: Expected text '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn attribute(self, name: &str, expected: &str) -> Self {
        match self.node.attribute(name) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected attribute '{}' to be '{}', but got '{}'",
                self.context, name, expected, actual
            ),
            None => panic!(
                "{}: Expected attribute '{}', but found attributes: [{}]",
                self.context,
                name,
                summarize_attributes(self.node)
            ),
        }
        self
    }

    pub fn no_attribute(self, name: &str) -> Self {
        assert!(
            self.node.attribute(name).is_none(),
            "{}: Expected no attribute '{}', but found attributes: [{}]",
            self.context,
            name,
            summarize_attributes(self.node)
        );
        self
    }

    /// Assert the exact attribute list, order included
    pub fn attributes(self, expected: &[(&str, &str)]) -> Self {
        let actual: Vec<(&str, &str)> = self
            .node
            .attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(
            actual, expected,
            "{}: Attribute list mismatch",
            self.context
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.node.child_nodes().count();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} children, found {} children: [{}]",
            self.context,
            expected,
            actual,
            summarize_children(self.node)
        );
        self
    }

    /// Assert the tags of all element children, in order
    pub fn child_tags(self, expected: &[Tag]) -> Self {
        let actual: Vec<Tag> = self.node.child_nodes().map(|child| child.tag).collect();
        assert_eq!(
            actual, expected,
            "{}: Child tags mismatch",
            self.context
        );
        self
    }

    pub fn child<F, R>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let node: &'a TreeNode = self.node;
        let Some(child) = node.child_nodes().nth(index) else {
            panic!(
                "{}: Child index {} out of bounds ({} children)",
                self.context,
                index,
                node.child_nodes().count()
            );
        };
        assertion(NodeAssertion {
            node: child,
            context: format!("{}[{}]", self.context, index),
        });
        self
    }

    /// Descend into the first child with `tag`
    pub fn first<F, R>(self, tag: Tag, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>) -> R,
    {
        let node: &'a TreeNode = self.node;
        let Some(child) = node.first_child(tag) else {
            panic!(
                "{}: Expected a {} child, found children: [{}]",
                self.context,
                tag,
                summarize_children(node)
            );
        };
        assertion(NodeAssertion {
            node: child,
            context: format!("{}/{}", self.context, tag),
        });
        self
    }
}

fn summarize_attributes(node: &TreeNode) -> String {
    node.attributes
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_children(node: &TreeNode) -> String {
    node.child_nodes()
        .map(|child| child.tag.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
