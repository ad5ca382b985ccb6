//! Compiler pipeline modules: the parse-tree interface, the classified AST,
//! the IR model, register allocation, lowering, and emission.

pub mod ast;
pub mod classify;
pub mod emit;
pub mod ir;
pub mod lower;
pub mod regalloc;
pub mod tree;
