//! Document tree
//!
//!     The parser builds, and the decorator annotates, a single tree of [TreeNode]s. A node is a
//!     closed [Tag] from the statute vocabulary, an insertion-ordered attribute map, and an
//!     ordered list of children that are either nodes or raw strings.
//!
//!     A node is either a container (its children are nodes) or a leaf text node (exactly one
//!     string child, or none). Trees are built bottom-up: a child is complete before it is
//!     attached, and decoration only ever adds or overwrites attributes.
//!
//!     Attribute order is part of the output contract with renderers, which is why attributes
//!     are kept in an [IndexMap](indexmap::IndexMap) rather than a hash map.

pub mod node;
pub mod tag;

pub use node::{Attributes, Child, TreeNode};
pub use tag::Tag;
