//! While Compiler
//!
//! Front-end lowering for the WHILE toy language. The external parser hands
//! over a generic tree for each `let` (multi-assignment) statement; this
//! crate classifies the right-hand sides and lowers them to a linear
//! sequence of three-operand instructions over fresh two-slot registers.

pub mod compiler;

use compiler::ast::LetStmt;
use compiler::classify::ClassifyError;
use compiler::ir::Instruction;
use compiler::lower;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("malformed expression: {0}")]
    Malformed(#[from] ClassifyError),
}

/// Lower one `let` statement to its instruction sequence.
///
/// Every call works against a fresh register pool and output buffer;
/// registers are never shared across statements. If any right-hand side
/// fails classification the whole statement is rejected and no instructions
/// are returned.
pub fn lower_let(stmt: &LetStmt) -> Result<Vec<Instruction>, CompileError> {
    Ok(lower::lower_let(stmt)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ast::Binding;
    use crate::compiler::emit;
    use crate::compiler::tree::ParseTree;

    #[test]
    fn test_lower_multi_target() {
        let stmt = LetStmt::new(vec![
            Binding::new("A", ParseTree::leaf("D")),
            Binding::new("B", ParseTree::leaf("E")),
            Binding::new("C", ParseTree::leaf("F")),
        ]);
        let code = lower_let(&stmt).unwrap();
        assert_eq!(emit::render(&code), &["A = D", "B = E", "C = F"][..]);
    }

    #[test]
    fn test_malformed_rhs_rejects_whole_statement() {
        let stmt = LetStmt::new(vec![
            Binding::new("A", ParseTree::leaf("B")),
            Binding::new("B", ParseTree::node("hd", vec![])),
        ]);
        let err = lower_let(&stmt).expect_err("expected a classification error");
        assert!(err.to_string().starts_with("malformed expression:"));
    }
}
