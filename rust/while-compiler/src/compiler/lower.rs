//! AST → IR lowering for `let` statements.
//!
//! Each right-hand side reduces to either a directly usable value (variable,
//! `nil`, or an already-populated register) with nothing emitted, or a fresh
//! register plus the instructions that populate it. All right-hand sides of
//! one statement share a single register pool and output buffer.

use crate::compiler::ast::{Expr, LetStmt};
use crate::compiler::classify::{self, ClassifyError};
use crate::compiler::ir::{Instruction, Slot, Value};
use crate::compiler::regalloc::RegAlloc;

/// Lower one `let` statement to its complete instruction sequence.
///
/// Targets are processed in source order: each right-hand side is classified
/// and lowered, then bound to its target. A classification failure rejects
/// the whole statement; partial instruction sequences are never returned.
pub fn lower_let(stmt: &LetStmt) -> Result<Vec<Instruction>, ClassifyError> {
    let mut lowerer = Lowerer::new();
    for binding in &stmt.bindings {
        let expr = classify::classify(&binding.value)?;
        let value = lowerer.lower_expr(&expr);
        lowerer.emit(Instruction::AssignVar {
            target: binding.target.clone(),
            value,
        });
    }
    Ok(lowerer.code)
}

/// Per-statement lowering context: the register pool and the output buffer.
/// One instance lowers exactly one statement; callers lowering statements
/// concurrently use independent instances.
pub struct Lowerer {
    regs: RegAlloc,
    code: Vec<Instruction>,
}

impl Default for Lowerer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lowerer {
    pub fn new() -> Self {
        Self {
            regs: RegAlloc::new(),
            code: Vec::new(),
        }
    }

    /// Hand the accumulated instruction sequence to the caller.
    pub fn into_code(self) -> Vec<Instruction> {
        self.code
    }

    fn emit(&mut self, instr: Instruction) {
        self.code.push(instr);
    }

    /// Lower one expression to the value naming its result, appending the
    /// instructions that compute it. Classified expressions cannot fail to
    /// lower.
    pub fn lower_expr(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::Var(name) => Value::Var(name.clone()),
            Expr::Nil => Value::Nil,
            Expr::Cons(args) => self.lower_cons(args),
            Expr::List(args) => self.lower_list(args),
            // `hd`/`tl` are transparent at this level: the argument has
            // already been decomposed, so the projection is the lowered
            // value itself, and the projection of `nil` is `nil`.
            Expr::Hd(arg) | Expr::Tl(arg) => self.lower_expr(arg),
            Expr::Call(name, args) => self.lower_call(name, args),
        }
    }

    /// `cons` is arity-driven: zero arguments collapse to `nil`, one
    /// argument to the argument itself; two or more right-fold into nested
    /// pair cells, deepest pair first.
    fn lower_cons(&mut self, args: &[Expr]) -> Value {
        match args {
            [] => Value::Nil,
            [only] => self.lower_expr(only),
            [head, tail] => {
                // Leaf pair: both children evaluated, then the cell filled
                // head slot first.
                let head = self.lower_expr(head);
                let tail = self.lower_expr(tail);
                let reg = self.regs.alloc();
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Head,
                    value: head,
                });
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Tail,
                    value: tail,
                });
                Value::Reg(reg)
            }
            [outer @ .., last] => {
                // Right-fold from the trailing argument outward; each fold
                // step writes the tail slot before the head slot.
                let mut acc = self.lower_expr(last);
                for arg in outer.iter().rev() {
                    let reg = self.regs.alloc();
                    self.emit(Instruction::AssignSlot {
                        reg,
                        slot: Slot::Tail,
                        value: acc,
                    });
                    let head = self.lower_expr(arg);
                    self.emit(Instruction::AssignSlot {
                        reg,
                        slot: Slot::Head,
                        value: head,
                    });
                    acc = Value::Reg(reg);
                }
                acc
            }
        }
    }

    /// `list` builds a nil-terminated chain, one cell per argument, filled
    /// from the tail end. Unlike `cons`, a one-element list still allocates
    /// its cell. The base cell writes its nil tail first; the wrapping
    /// cells (and the one-element case) write the element first.
    fn lower_list(&mut self, args: &[Expr]) -> Value {
        match args {
            [] => Value::Nil,
            [only] => {
                let value = self.lower_expr(only);
                let reg = self.regs.alloc();
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Head,
                    value,
                });
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Tail,
                    value: Value::Nil,
                });
                Value::Reg(reg)
            }
            [outer @ .., last] => {
                let reg = self.regs.alloc();
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Tail,
                    value: Value::Nil,
                });
                let value = self.lower_expr(last);
                self.emit(Instruction::AssignSlot {
                    reg,
                    slot: Slot::Head,
                    value,
                });
                let mut acc = Value::Reg(reg);
                for arg in outer.iter().rev() {
                    let value = self.lower_expr(arg);
                    let reg = self.regs.alloc();
                    self.emit(Instruction::AssignSlot {
                        reg,
                        slot: Slot::Head,
                        value,
                    });
                    self.emit(Instruction::AssignSlot {
                        reg,
                        slot: Slot::Tail,
                        value: acc,
                    });
                    acc = Value::Reg(reg);
                }
                acc
            }
        }
    }

    /// Calls stage each argument with `param` in order, invoke, then pull
    /// slot 0 of the returned tuple into a second fresh register.
    fn lower_call(&mut self, name: &str, args: &[Expr]) -> Value {
        for arg in args {
            let value = self.lower_expr(arg);
            self.emit(Instruction::Param { value });
        }
        let dest = self.regs.alloc();
        self.emit(Instruction::Call {
            dest,
            name: name.to_string(),
            argc: args.len(),
        });
        let ret = self.regs.alloc();
        self.emit(Instruction::IndexLoad {
            dest: ret,
            src: dest,
            slot: Slot::Head,
        });
        Value::Reg(ret)
    }
}
