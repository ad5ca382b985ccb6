//! The tree interface handed over by the external WHILE parser.

use serde::{Deserialize, Serialize};

/// One node of the parser's generic tree.
///
/// The grammar, lexer, and parser live outside this crate; lowering assumes
/// only this shape. A zero-argument call `(name)` arrives as
/// `Node("name", [])`, which is distinct from the bare identifier
/// `Leaf("name")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseTree {
    /// An identifier or the keyword `nil`.
    Leaf(String),
    /// A parenthesized application `(head arg*)`.
    Node(String, Vec<ParseTree>),
}

impl ParseTree {
    pub fn leaf(text: &str) -> Self {
        ParseTree::Leaf(text.to_string())
    }

    pub fn node(head: &str, children: Vec<ParseTree>) -> Self {
        ParseTree::Node(head.to_string(), children)
    }
}
