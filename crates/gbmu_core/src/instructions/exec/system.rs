use crate::instructions::Outcome;
use crate::memory::Memory;
use crate::regs::Registers;

pub(crate) fn nop(_regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    Outcome::Next
}

pub(crate) fn halt(_regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    Outcome::Halt
}

pub(crate) fn stop(_regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    Outcome::Stop
}

/// DI (0xF3) / EI (0xFB).
pub(crate) fn di_ei(_regs: &mut Registers, _mem: &mut Memory, opcode: u8) -> Outcome {
    Outcome::SetIme(opcode == 0xFB)
}

/// 0xCB never runs: `decode` resolves it through the prefixed table.
pub(crate) fn prefix(_regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    Outcome::Next
}

/// Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
pub(crate) fn illegal(_regs: &mut Registers, _mem: &mut Memory, _opcode: u8) -> Outcome {
    Outcome::Illegal
}
