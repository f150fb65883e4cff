//! Flag arithmetic shared by the transition functions.
//!
//! Every helper that documents a flag assigns it; flags a mnemonic leaves
//! unaffected are not touched.

use crate::regs::{Flags, Registers};

/// Carry out of bit 3 when adding `a` and `b`.
#[inline]
pub fn half_carry_add(a: u8, b: u8) -> bool {
    ((a & 0x0F) + (b & 0x0F)) & 0x10 != 0
}

/// Borrow into bit 3 when subtracting `b` from `a`.
#[inline]
pub fn half_carry_sub(a: u8, b: u8) -> bool {
    (a & 0x0F).wrapping_sub(b & 0x0F) & 0x10 != 0
}

/// Core 8-bit ADD/ADC operation on A.
///
/// `use_carry` selects between ADD (false) and ADC (true).
pub(crate) fn add8(regs: &mut Registers, value: u8, use_carry: bool) {
    let a = regs.a;
    let carry_in = u8::from(use_carry && regs.get_flag(Flags::C));

    let half = (a & 0x0F) + (value & 0x0F) + carry_in;
    let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
    let result = full as u8;

    regs.a = result;
    regs.set_flags(result == 0, false, half & 0x10 != 0, full > 0xFF);
}

/// Core 8-bit SUB/SBC operation on A.
///
/// `use_carry` selects between SUB (false) and SBC (true).
pub(crate) fn sub8(regs: &mut Registers, value: u8, use_carry: bool) {
    let a = regs.a;
    let (result, half, carry) = sub_with_borrow(a, value, use_carry && regs.get_flag(Flags::C));
    regs.a = result;
    regs.set_flags(result == 0, true, half, carry);
}

/// Compare A with `value`, setting flags as if `A - value` was performed.
/// A itself is not modified.
pub(crate) fn cp8(regs: &mut Registers, value: u8) {
    let (result, half, carry) = sub_with_borrow(regs.a, value, false);
    regs.set_flags(result == 0, true, half, carry);
}

fn sub_with_borrow(a: u8, value: u8, borrow: bool) -> (u8, bool, bool) {
    let borrow = u8::from(borrow);
    let half = (a & 0x0F).wrapping_sub(value & 0x0F).wrapping_sub(borrow) & 0x10 != 0;
    let full = i16::from(a) - i16::from(value) - i16::from(borrow);
    (full as u8, half, full < 0)
}

pub(crate) fn and8(regs: &mut Registers, value: u8) {
    regs.a &= value;
    regs.set_flags(regs.a == 0, false, true, false);
}

pub(crate) fn or8(regs: &mut Registers, value: u8) {
    regs.a |= value;
    regs.set_flags(regs.a == 0, false, false, false);
}

pub(crate) fn xor8(regs: &mut Registers, value: u8) {
    regs.a ^= value;
    regs.set_flags(regs.a == 0, false, false, false);
}

/// 8-bit increment used by INC r and INC (HL).
///
/// Updates Z, N, H while leaving C unchanged.
pub(crate) fn inc8(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_add(1);
    regs.set_flag(Flags::Z, result == 0);
    regs.set_flag(Flags::N, false);
    regs.set_flag(Flags::H, half_carry_add(value, 1));
    result
}

/// 8-bit decrement used by DEC r and DEC (HL).
///
/// Updates Z, N, H while leaving C unchanged.
pub(crate) fn dec8(regs: &mut Registers, value: u8) -> u8 {
    let result = value.wrapping_sub(1);
    regs.set_flag(Flags::Z, result == 0);
    regs.set_flag(Flags::N, true);
    regs.set_flag(Flags::H, half_carry_sub(value, 1));
    result
}

/// `ADD HL,rr`: Z unaffected, N cleared, H from bit 11, C from bit 15.
pub(crate) fn add16_hl(regs: &mut Registers, value: u16) {
    let hl = regs.hl();
    regs.set_flag(Flags::N, false);
    regs.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
    regs.set_flag(Flags::C, u32::from(hl) + u32::from(value) > 0xFFFF);
    regs.set_hl(hl.wrapping_add(value));
}

/// Signed 8-bit offset added to a 16-bit base (ADD SP,r8 and LD HL,SP+r8).
///
/// Z and N are cleared; H and C come from the unsigned low-byte addition.
pub(crate) fn add16_signed(regs: &mut Registers, base: u16, imm8: u8) -> u16 {
    let offset = imm8 as i8 as i16 as u16;
    regs.set_flags(
        false,
        false,
        (base & 0x000F) + (offset & 0x000F) > 0x000F,
        (base & 0x00FF) + (offset & 0x00FF) > 0x00FF,
    );
    base.wrapping_add(offset)
}

/// Decimal adjust accumulator after BCD addition/subtraction.
///
/// After an addition (N clear):
/// - C set or A > 0x99 adds 0x60 and sets C;
/// - H set or low nibble > 9 adds 0x06.
///
/// After a subtraction (N set) only the recorded H/C select the
/// correction, which is subtracted; C stays as it was.
///
/// Z follows the result, H is cleared, N is unaffected.
pub(crate) fn daa(regs: &mut Registers) {
    let mut a = regs.a;
    let mut adjust: u8 = if regs.get_flag(Flags::C) { 0x60 } else { 0x00 };
    if regs.get_flag(Flags::H) {
        adjust |= 0x06;
    }

    if !regs.get_flag(Flags::N) {
        if a & 0x0F > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a = a.wrapping_add(adjust);
    } else {
        a = a.wrapping_sub(adjust);
    }

    regs.set_flag(Flags::C, adjust >= 0x60);
    regs.set_flag(Flags::H, false);
    regs.set_flag(Flags::Z, a == 0);
    regs.a = a;
}

/// Shift/rotate kinds of the prefixed table, in opcode order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shift {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Shift {
    pub(crate) fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Shift::Rlc,
            1 => Shift::Rrc,
            2 => Shift::Rl,
            3 => Shift::Rr,
            4 => Shift::Sla,
            5 => Shift::Sra,
            6 => Shift::Swap,
            _ => Shift::Srl,
        }
    }
}

/// Apply a shift/rotate to `value`, returning the result and the bit
/// shifted out. `carry_in` is the previous C, used by RL and RR.
pub(crate) fn shift(kind: Shift, value: u8, carry_in: bool) -> (u8, bool) {
    match kind {
        Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
        Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
        Shift::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
        Shift::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
        Shift::Sla => (value << 1, value & 0x80 != 0),
        Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
        Shift::Swap => (value.rotate_left(4), false),
        Shift::Srl => (value >> 1, value & 0x01 != 0),
    }
}
