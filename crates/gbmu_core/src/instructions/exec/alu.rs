use crate::instructions::alu::{self, Shift};
use crate::instructions::operand::{imm8, read_r8, read_rp};
use crate::instructions::Outcome;
use crate::memory::Memory;
use crate::regs::{Flags, Registers};

/// The eight accumulator operations in opcode order (bits 3–5).
fn apply(regs: &mut Registers, operation: u8, value: u8) {
    match operation & 0x07 {
        0 => alu::add8(regs, value, false),
        1 => alu::add8(regs, value, true),
        2 => alu::sub8(regs, value, false),
        3 => alu::sub8(regs, value, true),
        4 => alu::and8(regs, value),
        5 => alu::xor8(regs, value),
        6 => alu::or8(regs, value),
        _ => alu::cp8(regs, value),
    }
}

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP with a register or (HL).
pub(crate) fn alu_r(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!((0x80..=0xBF).contains(&opcode));
    let value = read_r8(regs, mem, opcode);
    apply(regs, opcode >> 3, value);
    Outcome::Next
}

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP with an immediate byte.
pub(crate) fn alu_d8(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(
        opcode,
        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
    ));
    let value = imm8(regs, mem);
    apply(regs, opcode >> 3, value);
    Outcome::Next
}

/// RLCA / RRCA / RLA / RRA. Unlike the prefixed forms Z is always cleared.
pub(crate) fn rotate_a(regs: &mut Registers, _mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
    let kind = Shift::from_index(opcode >> 3);
    let (result, carry) = alu::shift(kind, regs.a, regs.get_flag(Flags::C));
    regs.a = result;
    regs.set_flags(false, false, false, carry);
    Outcome::Next
}

/// ADD HL,rr
pub(crate) fn add_hl_rr(regs: &mut Registers, _mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
    let value = read_rp(regs, opcode >> 4);
    alu::add16_hl(regs, value);
    Outcome::Next
}

/// ADD SP,r8
pub(crate) fn add_sp_r8(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    let imm = imm8(regs, mem);
    let sp = regs.sp;
    regs.sp = alu::add16_signed(regs, sp, imm);
    Outcome::Next
}

pub(crate) fn daa(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    alu::daa(regs);
    Outcome::Next
}

pub(crate) fn cpl(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.a = !regs.a;
    regs.set_flag(Flags::N, true);
    regs.set_flag(Flags::H, true);
    Outcome::Next
}

pub(crate) fn scf(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.set_flag(Flags::N, false);
    regs.set_flag(Flags::H, false);
    regs.set_flag(Flags::C, true);
    Outcome::Next
}

pub(crate) fn ccf(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    let carry = regs.get_flag(Flags::C);
    regs.set_flag(Flags::N, false);
    regs.set_flag(Flags::H, false);
    regs.set_flag(Flags::C, !carry);
    Outcome::Next
}
