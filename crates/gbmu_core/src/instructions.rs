//! LR35902 instruction tables and the dispatcher that runs them.
//!
//! Every opcode is a row in one of two 256-entry tables: [`BASE`] for
//! single-byte opcodes and [`PREFIXED`] for the opcodes that follow 0xCB.
//! A row carries the assembler mnemonic, the encoded length, the cycle
//! cost and the transition function that applies the instruction.

pub(crate) mod alu;
mod base;
mod exec;
mod operand;
mod prefixed;

use std::fmt;

use crate::memory::Memory;
use crate::regs::Registers;
use crate::{Error, Result};

pub use alu::{half_carry_add, half_carry_sub};
pub use base::BASE;
pub use prefixed::PREFIXED;

/// Opcode that selects the prefixed table.
pub const PREFIX: u8 = 0xCB;

/// Mnemonic shared by every opcode hole.
pub const ILLEGAL_MNEMONIC: &str = "???";

/// Transition function: applies one instruction to the machine state.
///
/// The opcode byte is passed along so that a single function can serve a
/// whole opcode group. Operands are read relative to the PC of the opcode;
/// PC is only moved by the function itself when control transfers.
pub type Exec = fn(&mut Registers, &mut Memory, u8) -> Outcome;

/// How control continues after a transition function ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Fall through to the following instruction.
    Next,
    /// PC was set by the instruction (jump, call, return, restart).
    Jumped,
    /// HALT: suspend until an interrupt.
    Halt,
    /// STOP: suspend until a button press.
    Stop,
    /// DI / EI.
    SetIme(bool),
    /// RETI: PC was popped and interrupts are enabled again.
    ReturnFromInterrupt,
    /// The opcode is a hole in the table.
    Illegal,
}

/// One row of an opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    /// Encoded length in bytes, prefix included.
    pub length: u8,
    /// Cost in clock cycles when execution falls through.
    pub cycles: u32,
    /// Cost when a conditional branch is taken. Equal to `cycles` for
    /// everything else.
    pub branch_cycles: u32,
    exec: Exec,
}

impl Instruction {
    pub(crate) const fn new(mnemonic: &'static str, length: u8, cycles: u32, exec: Exec) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            branch_cycles: cycles,
            exec,
        }
    }

    pub(crate) const fn branch(
        mnemonic: &'static str,
        length: u8,
        cycles: u32,
        branch_cycles: u32,
        exec: Exec,
    ) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            branch_cycles,
            exec,
        }
    }

    pub fn is_illegal(&self) -> bool {
        self.mnemonic == ILLEGAL_MNEMONIC
    }

    /// Run the transition function without any PC bookkeeping.
    pub fn run(&self, regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Outcome {
        (self.exec)(regs, mem, opcode)
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .field("branch_cycles", &self.branch_cycles)
            .finish_non_exhaustive()
    }
}

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug)]
pub struct Executed {
    pub instruction: &'static Instruction,
    /// Table index of the row that ran (the byte after 0xCB for prefixed rows).
    pub opcode: u8,
    pub cycles: u32,
    pub outcome: Outcome,
}

/// Look up the table row for the instruction at `pc`.
///
/// Returns the row together with its index in the table it came from.
pub fn decode(mem: &Memory, pc: u16) -> (&'static Instruction, u8) {
    lookup(mem, pc, mem.read8(pc))
}

fn lookup(mem: &Memory, pc: u16, opcode: u8) -> (&'static Instruction, u8) {
    if opcode == PREFIX {
        let cb = mem.read8(pc.wrapping_add(1));
        (&PREFIXED[usize::from(cb)], cb)
    } else {
        (&BASE[usize::from(opcode)], opcode)
    }
}

/// Execute the instruction whose first byte is `opcode`, located at PC.
///
/// PC is advanced past the instruction unless the instruction transferred
/// control itself. The returned cycle count already accounts for taken
/// branches. An opcode hole leaves the registers untouched and yields
/// [`Error::IllegalOpcode`].
pub fn execute(regs: &mut Registers, mem: &mut Memory, opcode: u8) -> Result<Executed> {
    let pc = regs.pc;
    let (instruction, index) = lookup(mem, pc, opcode);

    let outcome = instruction.run(regs, mem, index);
    let cycles = match outcome {
        Outcome::Illegal => return Err(Error::IllegalOpcode { addr: pc, opcode }),
        Outcome::Jumped | Outcome::ReturnFromInterrupt => instruction.branch_cycles,
        Outcome::Next | Outcome::Halt | Outcome::Stop | Outcome::SetIme(_) => {
            regs.pc = pc.wrapping_add(u16::from(instruction.length));
            instruction.cycles
        }
    };

    Ok(Executed {
        instruction,
        opcode: index,
        cycles,
        outcome,
    })
}

/// A decoded instruction rendered as assembler text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Disassembly {
    pub addr: u16,
    pub text: String,
    pub length: u8,
}

impl fmt::Display for Disassembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}: {}", self.addr, self.text)
    }
}

/// Render the instruction at `addr`, substituting immediate operands.
///
/// Relative jumps show their absolute target.
pub fn disassemble(mem: &Memory, addr: u16) -> Disassembly {
    let (instruction, _) = decode(mem, addr);
    let m = instruction.mnemonic;
    let byte = mem.read8(addr.wrapping_add(1));
    let word = mem.read16(addr.wrapping_add(1));

    let text = if m.contains("d16") || m.contains("a16") {
        let w = format!("${word:04X}");
        m.replace("d16", &w).replace("a16", &w)
    } else if m.contains("d8") || m.contains("a8") {
        let b = format!("${byte:02X}");
        m.replace("d8", &b).replace("a8", &b)
    } else if m.starts_with("JR") {
        let target = addr
            .wrapping_add(2)
            .wrapping_add(byte as i8 as i16 as u16);
        m.replace("r8", &format!("${target:04X}"))
    } else if m.contains("SP+r8") {
        let offset = byte as i8;
        let sign = if offset < 0 { '-' } else { '+' };
        m.replace("+r8", &format!("{sign}{}", offset.unsigned_abs()))
    } else if m.contains("r8") {
        m.replace("r8", &(byte as i8).to_string())
    } else {
        m.to_string()
    };

    Disassembly {
        addr,
        text,
        length: instruction.length,
    }
}

#[cfg(test)]
mod tests;
