use crate::instructions::operand::{pop_u16, push_u16};
use crate::instructions::Outcome;
use crate::memory::Memory;
use crate::regs::Registers;

/// PUSH rr, where index 3 selects AF instead of SP.
pub(crate) fn push(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
    let value = match (opcode >> 4) & 0x03 {
        0 => regs.bc(),
        1 => regs.de(),
        2 => regs.hl(),
        _ => regs.af(),
    };
    push_u16(regs, mem, value);
    Outcome::Next
}

/// POP rr. POP AF drops the low nibble of F.
pub(crate) fn pop(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
    let value = pop_u16(regs, mem);
    match (opcode >> 4) & 0x03 {
        0 => regs.set_bc(value),
        1 => regs.set_de(value),
        2 => regs.set_hl(value),
        _ => regs.set_af(value),
    }
    Outcome::Next
}
