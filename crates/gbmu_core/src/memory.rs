/// Total addressable memory for the Game Boy (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// Flat, byte-addressable memory.
///
/// The real hardware maps cartridge ROM/RAM, VRAM, WRAM, HRAM and IO
/// registers into this space. The core keeps one contiguous array so that
/// every `u16` address is a valid index.
#[derive(Clone)]
pub struct Memory {
    bytes: Box<[u8]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.bytes.len())
            .finish()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            bytes: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn read8(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    pub fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }

    /// Read a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The second address is computed in 16 bits, so a read at 0xFFFF takes
    /// its high byte from 0x0000. This wrap is deliberate: it is what the
    /// address bus does, and no out-of-range address exists to report.
    #[inline]
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a little-endian word. Like [`Memory::read16`], the high byte of
    /// a write at 0xFFFF lands at 0x0000.
    #[inline]
    pub fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }

    /// Copy `data` into memory starting at `offset`.
    ///
    /// Panics if the data does not fit below 0x10000.
    pub fn load(&mut self, offset: u16, data: &[u8]) {
        let start = offset as usize;
        self.bytes[start..start + data.len()].copy_from_slice(data);
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}
