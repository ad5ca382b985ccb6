//! AST for `let` statement right-hand sides.
//! One constructor per expression kind, each holding exactly its required
//! children; produced from the parser's generic tree by `classify`.

use crate::compiler::tree::ParseTree;
use serde::{Deserialize, Serialize};

/// A classified right-hand-side expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Variable reference
    Var(String),
    /// The constant `nil`
    Nil,
    /// `(cons e*)` — pair/tree construction, any number of children
    Cons(Vec<Expr>),
    /// `(list e*)` — nil-terminated chain construction
    List(Vec<Expr>),
    /// `(hd e)`
    Hd(Box<Expr>),
    /// `(tl e)`
    Tl(Box<Expr>),
    /// `(name e*)` — call of a user function, zero or more arguments
    Call(String, Vec<Expr>),
}

/// One `target := rhs` pair of a (multi-)assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub target: String,
    pub value: ParseTree,
}

impl Binding {
    pub fn new(target: &str, value: ParseTree) -> Self {
        Self {
            target: target.to_string(),
            value,
        }
    }
}

/// A `let` statement: `V1, V2, … := E1, E2, …`, pairs in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetStmt {
    pub bindings: Vec<Binding>,
}

impl LetStmt {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }
}
