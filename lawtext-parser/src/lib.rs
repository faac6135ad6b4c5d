//! # lawtext
//!
//! A parser for Lawtext, the plain-text convention used to author Japanese statutes.
//!
//! Layout
//!
//!     The pipeline is strictly linear and every stage lives in its own module:
//!
//!         raw text -> lexing (indent detection, line classification) -> LineTokens
//!                  -> parsing (cursor + recursive-descent rules)     -> raw tree
//!                  -> decoration (numbering and structural metadata) -> annotated tree
//!
//!     The annotated tree is handed to renderers outside this crate. See
//!     [parsing](lawtext::parsing) for the entry points.
//!
//! For testing guidelines, see the [testing module](lawtext::testing).

#![allow(rustdoc::invalid_html_tags)]

pub mod lawtext;

pub use lawtext::ast::{Attributes, Child, Tag, TreeNode};
pub use lawtext::decoration::decorate;
pub use lawtext::error::{ErrorKind, LawtextError};
pub use lawtext::parsing::{parse_lawtext, process};
