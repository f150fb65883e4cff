use crate::instructions::operand::{imm16, imm8, read_r8, write_r8, write_rp};
use crate::instructions::{alu, Outcome};
use crate::memory::Memory;
use crate::regs::Registers;

/// LD rr,d16
pub(crate) fn ld_rr_d16(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
    let value = imm16(regs, mem);
    write_rp(regs, opcode >> 4, value);
    Outcome::Next
}

/// Address for LD (BC/DE/HL+/HL-) forms, applying the HL post step.
fn indirect_addr(regs: &mut Registers, opcode: u8) -> u16 {
    match (opcode >> 4) & 0x03 {
        0 => regs.bc(),
        1 => regs.de(),
        2 => {
            let hl = regs.hl();
            regs.set_hl(hl.wrapping_add(1));
            hl
        }
        _ => {
            let hl = regs.hl();
            regs.set_hl(hl.wrapping_sub(1));
            hl
        }
    }
}

/// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
pub(crate) fn ld_indirect_a(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
    let addr = indirect_addr(regs, opcode);
    mem.write8(addr, regs.a);
    Outcome::Next
}

/// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
pub(crate) fn ld_a_indirect(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
    let addr = indirect_addr(regs, opcode);
    regs.a = mem.read8(addr);
    Outcome::Next
}

/// LD r,d8 (and LD (HL),d8)
pub(crate) fn ld_r_d8(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let value = imm8(regs, mem);
    write_r8(regs, mem, opcode >> 3, value);
    Outcome::Next
}

/// LD r1,r2 over 0x40–0x7F, including the (HL) forms. 0x76 is HALT.
pub(crate) fn ld_r_r(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
    let value = read_r8(regs, mem, opcode);
    write_r8(regs, mem, opcode >> 3, value);
    Outcome::Next
}

/// LD (a16),SP
pub(crate) fn ld_a16_sp(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    let addr = imm16(regs, mem);
    mem.write16(addr, regs.sp);
    Outcome::Next
}

/// LDH (a8),A / LDH A,(a8)
pub(crate) fn ldh_a8(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let addr = 0xFF00 | u16::from(imm8(regs, mem));
    match opcode {
        0xE0 => mem.write8(addr, regs.a),
        _ => regs.a = mem.read8(addr),
    }
    Outcome::Next
}

/// LD (C),A / LD A,(C)
pub(crate) fn ldh_c(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let addr = 0xFF00 | u16::from(regs.c);
    match opcode {
        0xE2 => mem.write8(addr, regs.a),
        _ => regs.a = mem.read8(addr),
    }
    Outcome::Next
}

/// LD (a16),A / LD A,(a16)
pub(crate) fn ld_a16_a(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
    let addr = imm16(regs, mem);
    match opcode {
        0xEA => mem.write8(addr, regs.a),
        _ => regs.a = mem.read8(addr),
    }
    Outcome::Next
}

/// LD HL,SP+r8
pub(crate) fn ld_hl_sp_r8(regs: &mut Registers, mem: &mut Memory, _opcode: u8) -> Outcome {
    let imm = imm8(regs, mem);
    let sp = regs.sp;
    let value = alu::add16_signed(regs, sp, imm);
    regs.set_hl(value);
    Outcome::Next
}

/// LD SP,HL
pub(crate) fn ld_sp_hl(regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    regs.sp = regs.hl();
    Outcome::Next
}
