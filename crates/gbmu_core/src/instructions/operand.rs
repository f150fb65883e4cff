use crate::memory::Memory;
use crate::regs::{Flags, Registers};

/// Read an 8-bit register or (HL) by index.
///
/// The encoding matches the standard Game Boy register order used by
/// opcode tables:
/// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[inline]
pub(crate) fn read_r8(regs: &Registers, mem: &Memory, index: u8) -> u8 {
    match index & 0x07 {
        0 => regs.b,
        1 => regs.c,
        2 => regs.d,
        3 => regs.e,
        4 => regs.h,
        5 => regs.l,
        6 => mem.read8(regs.hl()),
        _ => regs.a,
    }
}

/// Write an 8-bit register or (HL) by index. The encoding matches `read_r8`.
#[inline]
pub(crate) fn write_r8(regs: &mut Registers, mem: &mut Memory, index: u8, value: u8) {
    match index & 0x07 {
        0 => regs.b = value,
        1 => regs.c = value,
        2 => regs.d = value,
        3 => regs.e = value,
        4 => regs.h = value,
        5 => regs.l = value,
        6 => mem.write8(regs.hl(), value),
        _ => regs.a = value,
    }
}

/// Read a 16-bit pair by its `rp` index: 0=BC, 1=DE, 2=HL, 3=SP.
#[inline]
pub(crate) fn read_rp(regs: &Registers, index: u8) -> u16 {
    match index & 0x03 {
        0 => regs.bc(),
        1 => regs.de(),
        2 => regs.hl(),
        _ => regs.sp,
    }
}

#[inline]
pub(crate) fn write_rp(regs: &mut Registers, index: u8, value: u16) {
    match index & 0x03 {
        0 => regs.set_bc(value),
        1 => regs.set_de(value),
        2 => regs.set_hl(value),
        _ => regs.sp = value,
    }
}

/// Immediate byte following the opcode at PC.
#[inline]
pub(crate) fn imm8(regs: &Registers, mem: &Memory) -> u8 {
    mem.read8(regs.pc.wrapping_add(1))
}

/// Little-endian immediate word following the opcode at PC.
#[inline]
pub(crate) fn imm16(regs: &Registers, mem: &Memory) -> u16 {
    mem.read16(regs.pc.wrapping_add(1))
}

/// Push a word. Stack grows downward: memory[SP] = low, memory[SP+1] = high.
#[inline]
pub(crate) fn push_u16(regs: &mut Registers, mem: &mut Memory, value: u16) {
    let [lo, hi] = value.to_le_bytes();
    regs.sp = regs.sp.wrapping_sub(1);
    mem.write8(regs.sp, hi);
    regs.sp = regs.sp.wrapping_sub(1);
    mem.write8(regs.sp, lo);
}

#[inline]
pub(crate) fn pop_u16(regs: &mut Registers, mem: &Memory) -> u16 {
    let value = mem.read16(regs.sp);
    regs.sp = regs.sp.wrapping_add(2);
    value
}

/// Branch condition encoded in bits 3–4: NZ, Z, NC, C.
#[inline]
pub(crate) fn condition(regs: &Registers, opcode: u8) -> bool {
    match (opcode >> 3) & 0x03 {
        0 => !regs.get_flag(Flags::Z),
        1 => regs.get_flag(Flags::Z),
        2 => !regs.get_flag(Flags::C),
        _ => regs.get_flag(Flags::C),
    }
}
