use crate::instructions::operand::{read_r8, read_rp, write_r8, write_rp};
use crate::instructions::{alu, Outcome};
use crate::memory::Memory;
use crate::regs::Registers;

/// INC r / INC (HL)
pub(crate) fn inc_r(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let index = opcode >> 3;
    let value = read_r8(regs, mem, index);
    let result = alu::inc8(regs, value);
    write_r8(regs, mem, index, result);
    Outcome::Next
}

/// DEC r / DEC (HL)
pub(crate) fn dec_r(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let index = opcode >> 3;
    let value = read_r8(regs, mem, index);
    let result = alu::dec8(regs, value);
    write_r8(regs, mem, index, result);
    Outcome::Next
}

/// INC rr. No flags.
pub(crate) fn inc_rr(regs: &mut Registers, _mem: &mut Memory, opcode: u8) -> Outcome {
    let index = opcode >> 4;
    let value = read_rp(regs, index).wrapping_add(1);
    write_rp(regs, index, value);
    Outcome::Next
}

/// DEC rr. No flags.
pub(crate) fn dec_rr(regs: &mut Registers, _mem: &mut Memory, opcode: u8) -> Outcome {
    let index = opcode >> 4;
    let value = read_rp(regs, index).wrapping_sub(1);
    write_rp(regs, index, value);
    Outcome::Next
}
