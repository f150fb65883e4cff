use thiserror::Error;

/// Failures surfaced by the core.
///
/// There is no out-of-bounds variant: every `u16` address indexes the
/// 64 KiB memory array, so such an access cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed cartridge: {len} bytes, the header needs at least {required}")]
    MalformedCartridge { len: usize, required: usize },
    #[error("illegal opcode 0x{opcode:02X} at 0x{addr:04X}")]
    IllegalOpcode { addr: u16, opcode: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
