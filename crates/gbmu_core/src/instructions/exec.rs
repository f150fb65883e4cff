//! Transition functions for the base opcode table.
//!
//! Each function has the [`Exec`](super::Exec) shape: it receives the
//! register file, memory and the opcode byte (so one function can serve a
//! whole opcode group), reads its operands relative to the PC of the opcode
//! and reports how control continues through an [`Outcome`](super::Outcome).

pub(super) mod alu;
pub(super) mod control;
pub(super) mod incdec;
pub(super) mod ld;
pub(super) mod stack;
pub(super) mod system;
