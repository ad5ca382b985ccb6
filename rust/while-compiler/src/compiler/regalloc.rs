//! Register allocator for the lowering pass.
//! Hands out fresh two-slot registers in strictly increasing order; one
//! allocator instance lives for exactly one `let` statement.

use crate::compiler::ir::Reg;

#[derive(Debug, Default)]
pub struct RegAlloc {
    next: u32,
}

impl RegAlloc {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate the next register. Ids are monotonically increasing and
    /// never reused within a statement.
    pub fn alloc(&mut self) -> Reg {
        let reg = Reg(self.next);
        self.next += 1;
        reg
    }

    /// Number of registers handed out so far.
    pub fn count(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regalloc_basic() {
        let mut regs = RegAlloc::new();
        assert_eq!(regs.alloc(), Reg(0));
        assert_eq!(regs.alloc(), Reg(1));
        assert_eq!(regs.alloc(), Reg(2));
        assert_eq!(regs.count(), 3);
    }

    #[test]
    fn test_fresh_allocator_restarts_at_zero() {
        let mut regs = RegAlloc::new();
        regs.alloc();
        regs.alloc();
        assert_eq!(RegAlloc::new().count(), 0);
        assert_eq!(regs.count(), 2);
    }
}
