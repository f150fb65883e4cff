pub mod cartridge;
pub mod cpu;
mod error;
pub mod instructions;
pub mod memory;
pub mod regs;

pub use cartridge::{Cartridge, CartridgeType, ConsoleVariant, Destination, Header};
pub use cpu::Cpu;
pub use error::{Error, Result};
pub use instructions::{Instruction, Outcome};
pub use memory::Memory;
pub use regs::{Flags, Reg16, Reg8, Registers};

/// Address the CPU starts executing from after construction or reset.
pub const ENTRY_POINT: u16 = 0x0150;
/// Initial stack pointer.
pub const STACK_TOP: u16 = 0xFFFE;
