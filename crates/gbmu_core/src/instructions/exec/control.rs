use crate::instructions::operand::{condition, imm16, imm8, pop_u16, push_u16};
use crate::instructions::Outcome;
use crate::memory::Memory;
use crate::regs::Registers;

/// Relative target: the displacement is signed and relative to the
/// address following the two-byte instruction.
fn relative_target(regs: &Registers, mem: &Memory) -> u16 {
    let offset = imm8(regs, mem) as i8;
    regs.pc.wrapping_add(2).wrapping_add(offset as i16 as u16)
}

/// JR r8
pub(crate) fn jr(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.pc = relative_target(regs, mem);
    Outcome::Jumped
}

/// JR cc,r8
pub(crate) fn jr_cc(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
    if !condition(regs, opcode) {
        return Outcome::Next;
    }
    regs.pc = relative_target(regs, mem);
    Outcome::Jumped
}

/// JP a16
pub(crate) fn jp(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.pc = imm16(regs, mem);
    Outcome::Jumped
}

/// JP cc,a16
pub(crate) fn jp_cc(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
    if !condition(regs, opcode) {
        return Outcome::Next;
    }
    regs.pc = imm16(regs, mem);
    Outcome::Jumped
}

/// JP (HL)
pub(crate) fn jp_hl(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.pc = regs.hl();
    Outcome::Jumped
}

fn call_to(regs: &mut Registers, mem: &mut Memory) {
    let target = imm16(regs, mem);
    let ret = regs.pc.wrapping_add(3);
    push_u16(regs, mem, ret);
    regs.pc = target;
}

/// CALL a16
pub(crate) fn call(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    call_to(regs, mem);
    Outcome::Jumped
}

/// CALL cc,a16
pub(crate) fn call_cc(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
    if !condition(regs, opcode) {
        return Outcome::Next;
    }
    call_to(regs, mem);
    Outcome::Jumped
}

/// RET
pub(crate) fn ret(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.pc = pop_u16(regs, mem);
    Outcome::Jumped
}

/// RET cc
pub(crate) fn ret_cc(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
    if !condition(regs, opcode) {
        return Outcome::Next;
    }
    regs.pc = pop_u16(regs, mem);
    Outcome::Jumped
}

/// RETI
pub(crate) fn reti(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.pc = pop_u16(regs, mem);
    Outcome::ReturnFromInterrupt
}

/// RST n: push the address of the next instruction, jump to `opcode & 0x38`.
pub(crate) fn rst(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(opcode & 0xC7 == 0xC7);
    let ret = regs.pc.wrapping_add(1);
    push_u16(regs, mem, ret);
    regs.pc = u16::from(opcode & 0x38);
    Outcome::Jumped
}
