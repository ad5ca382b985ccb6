//! Expression classifier: turns the parser's generic tree into the closed
//! `Expr` AST, rejecting shapes that fit no recognized variant.

use crate::compiler::ast::Expr;
use crate::compiler::tree::ParseTree;
use std::str::FromStr;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Builtin operator heads recognized in application position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Builtin {
    Cons,
    List,
    Hd,
    Tl,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("`{0}` is not a valid variable name")]
    BadVariable(String),
    #[error("`{0}` is not a valid call head")]
    BadCallHead(String),
    #[error("`{op}` takes exactly one argument, got {found}")]
    WrongArity { op: Builtin, found: usize },
}

const NIL: &str = "nil";

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Classify one tree node, recursing into its children.
///
/// Purely inspective apart from building the owned AST: no registers are
/// allocated and no instructions are emitted here.
pub fn classify(tree: &ParseTree) -> Result<Expr, ClassifyError> {
    match tree {
        ParseTree::Leaf(text) if text == NIL => Ok(Expr::Nil),
        ParseTree::Leaf(text) => {
            // Builtin operator names are not variables.
            if !is_identifier(text) || Builtin::from_str(text).is_ok() {
                return Err(ClassifyError::BadVariable(text.clone()));
            }
            Ok(Expr::Var(text.clone()))
        }
        ParseTree::Node(head, children) => match Builtin::from_str(head) {
            Ok(Builtin::Cons) => Ok(Expr::Cons(classify_all(children)?)),
            Ok(Builtin::List) => Ok(Expr::List(classify_all(children)?)),
            Ok(op @ (Builtin::Hd | Builtin::Tl)) => match children.as_slice() {
                [arg] => {
                    let arg = Box::new(classify(arg)?);
                    Ok(match op {
                        Builtin::Hd => Expr::Hd(arg),
                        _ => Expr::Tl(arg),
                    })
                }
                _ => Err(ClassifyError::WrongArity {
                    op,
                    found: children.len(),
                }),
            },
            Err(_) => {
                if head == NIL || !is_identifier(head) {
                    return Err(ClassifyError::BadCallHead(head.clone()));
                }
                Ok(Expr::Call(head.clone(), classify_all(children)?))
            }
        },
    }
}

fn classify_all(children: &[ParseTree]) -> Result<Vec<Expr>, ClassifyError> {
    children.iter().map(classify).collect()
}
