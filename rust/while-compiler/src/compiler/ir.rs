//! IR data types for lowered `let` statements.
//! Three-operand instructions over fresh registers, each register modeling
//! a two-slot heap pair.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A fresh temporary register, numbered in allocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reg(pub u32);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R_{}", self.0)
    }
}

/// One of the two addressable fields of a register cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Slot {
    Head = 0,
    Tail = 1,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// The result of lowering one (sub)expression: a handle into either the
/// environment (variables) or the emitted instruction stream (registers).
/// Values never own instructions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Var(String),
    Nil,
    Reg(Reg),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Var(name) => write!(f, "{}", name),
            Value::Nil => write!(f, "nil"),
            Value::Reg(reg) => write!(f, "{}", reg),
        }
    }
}

/// A lowered instruction. Output order is significant and reproduces
/// execution order; no reordering happens after emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// `A = v`
    AssignVar { target: String, value: Value },
    /// `R_n[i] = v`
    AssignSlot { reg: Reg, slot: Slot, value: Value },
    /// `param v` — stage one call argument
    Param { value: Value },
    /// `R_n = call name argc`
    Call { dest: Reg, name: String, argc: usize },
    /// `R_d = R_s[i]` — extract a slot of a call's returned tuple
    IndexLoad { dest: Reg, src: Reg, slot: Slot },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::AssignVar { target, value } => write!(f, "{} = {}", target, value),
            Instruction::AssignSlot { reg, slot, value } => {
                write!(f, "{}[{}] = {}", reg, slot, value)
            }
            Instruction::Param { value } => write!(f, "param {}", value),
            Instruction::Call { dest, name, argc } => {
                write!(f, "{} = call {} {}", dest, name, argc)
            }
            Instruction::IndexLoad { dest, src, slot } => {
                write!(f, "{} = {}[{}]", dest, src, slot)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_instructions() {
        assert_eq!(
            Instruction::AssignVar {
                target: "A".to_string(),
                value: Value::Var("B".to_string()),
            }
            .to_string(),
            "A = B"
        );
        assert_eq!(
            Instruction::AssignSlot {
                reg: Reg(0),
                slot: Slot::Tail,
                value: Value::Nil,
            }
            .to_string(),
            "R_0[1] = nil"
        );
        assert_eq!(
            Instruction::Param {
                value: Value::Reg(Reg(3)),
            }
            .to_string(),
            "param R_3"
        );
        assert_eq!(
            Instruction::Call {
                dest: Reg(0),
                name: "name".to_string(),
                argc: 2,
            }
            .to_string(),
            "R_0 = call name 2"
        );
        assert_eq!(
            Instruction::IndexLoad {
                dest: Reg(1),
                src: Reg(0),
                slot: Slot::Head,
            }
            .to_string(),
            "R_1 = R_0[0]"
        );
    }
}
