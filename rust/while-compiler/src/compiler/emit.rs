//! Instruction sequence emission: reference text lines and JSON.

use crate::compiler::ir::Instruction;

/// Render each instruction in the reference textual form, one line per
/// instruction. This is the form downstream verification compares against.
pub fn render(code: &[Instruction]) -> Vec<String> {
    code.iter().map(|instr| instr.to_string()).collect()
}

/// Emit an instruction sequence as pretty JSON.
pub fn emit_json(code: &[Instruction]) -> String {
    serde_json::to_string_pretty(code).unwrap_or_else(|e| {
        panic!("Failed to serialize instruction sequence: {}", e);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::ir::{Reg, Slot, Value};

    #[test]
    fn test_render_lines() {
        let code = vec![
            Instruction::AssignSlot {
                reg: Reg(0),
                slot: Slot::Head,
                value: Value::Var("VAR1".to_string()),
            },
            Instruction::AssignVar {
                target: "A".to_string(),
                value: Value::Reg(Reg(0)),
            },
        ];
        assert_eq!(render(&code), &["R_0[0] = VAR1", "A = R_0"][..]);
    }

    #[test]
    fn test_emit_json_round_trips() {
        let code = vec![Instruction::Call {
            dest: Reg(0),
            name: "name".to_string(),
            argc: 1,
        }];
        let json = emit_json(&code);
        let back: Vec<Instruction> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }
}
