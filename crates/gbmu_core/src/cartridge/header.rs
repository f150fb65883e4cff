//! Cartridge header layout (0x0100–0x014F).

/// Offset of the first header byte.
const HEADER_START: usize = 0x0100;
/// One past the last header byte; a readable cartridge is at least this long.
pub const HEADER_END: usize = 0x0150;

const ENTRY_POINT: usize = HEADER_START;
const LOGO: usize = 0x0104;
const TITLE: usize = 0x0134;
const CGB_FLAG: usize = 0x0143;
const NEW_LICENSEE: usize = 0x0144;
const SGB_FLAG: usize = 0x0146;
const CARTRIDGE_TYPE: usize = 0x0147;
const ROM_SIZE: usize = 0x0148;
const RAM_SIZE: usize = 0x0149;
const DESTINATION: usize = 0x014A;
const OLD_LICENSEE: usize = 0x014B;
const MASK_ROM_VERSION: usize = 0x014C;
const HEADER_CHECKSUM: usize = 0x014D;
const GLOBAL_CHECKSUM: usize = 0x014E;

pub const LOGO_LEN: usize = 0x30;
pub const TITLE_LEN: usize = 0x0F;

/// Bitmap the boot ROM compares against before handing over to the cartridge.
pub const BOOT_LOGO: [u8; LOGO_LEN] = [
    0xCE, 0xED, 0x66, 0x66, 0xCC, 0x0D, 0x00, 0x0B, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0C, 0x00, 0x0D,
    0x00, 0x08, 0x11, 0x1F, 0x88, 0x89, 0x00, 0x0E, 0xDC, 0xCC, 0x6E, 0xE6, 0xDD, 0xDD, 0xD9, 0x99,
    0xBB, 0xBB, 0x67, 0x63, 0x6E, 0x0E, 0xEC, 0xCC, 0xDD, 0xDC, 0x99, 0x9F, 0xBB, 0xB9, 0x33, 0x3E,
];

/// Parsed view of the cartridge header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Usually `NOP; JP $0150`.
    pub entry_point: [u8; 4],
    pub logo: [u8; LOGO_LEN],
    /// Raw title bytes, NUL padded.
    pub title: [u8; TITLE_LEN],
    /// 0x80 = color aware, 0xC0 = color required, anything else = monochrome.
    pub cgb_flag: u8,
    pub new_licensee_code: [u8; 2],
    pub sgb_flag: u8,
    pub cartridge_type: u8,
    pub rom_size: u8,
    pub ram_size: u8,
    pub destination_code: u8,
    pub old_licensee_code: u8,
    pub mask_rom_version: u8,
    pub header_checksum: u8,
    /// Stored big-endian.
    pub global_checksum: u16,
}

impl Header {
    /// Read the header fields out of a cartridge image.
    ///
    /// The caller guarantees `rom.len() >= HEADER_END`.
    pub(super) fn parse(rom: &[u8]) -> Self {
        debug_assert!(rom.len() >= HEADER_END);

        let mut entry_point = [0; 4];
        entry_point.copy_from_slice(&rom[ENTRY_POINT..ENTRY_POINT + 4]);
        let mut logo = [0; LOGO_LEN];
        logo.copy_from_slice(&rom[LOGO..LOGO + LOGO_LEN]);
        let mut title = [0; TITLE_LEN];
        title.copy_from_slice(&rom[TITLE..TITLE + TITLE_LEN]);

        Self {
            entry_point,
            logo,
            title,
            cgb_flag: rom[CGB_FLAG],
            new_licensee_code: [rom[NEW_LICENSEE], rom[NEW_LICENSEE + 1]],
            sgb_flag: rom[SGB_FLAG],
            cartridge_type: rom[CARTRIDGE_TYPE],
            rom_size: rom[ROM_SIZE],
            ram_size: rom[RAM_SIZE],
            destination_code: rom[DESTINATION],
            old_licensee_code: rom[OLD_LICENSEE],
            mask_rom_version: rom[MASK_ROM_VERSION],
            header_checksum: rom[HEADER_CHECKSUM],
            global_checksum: u16::from_be_bytes([rom[GLOBAL_CHECKSUM], rom[GLOBAL_CHECKSUM + 1]]),
        }
    }

    /// Title as text, cut at the first NUL.
    pub fn title(&self) -> String {
        let end = self
            .title
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(TITLE_LEN);
        String::from_utf8_lossy(&self.title[..end]).trim_end().to_string()
    }

    pub fn variant(&self) -> ConsoleVariant {
        ConsoleVariant::from_cgb_flag(self.cgb_flag)
    }

    pub fn kind(&self) -> CartridgeType {
        CartridgeType::from_code(self.cartridge_type)
    }

    pub fn destination(&self) -> Destination {
        match self.destination_code {
            0x00 => Destination::Japan,
            0x01 => Destination::Overseas,
            other => Destination::Unknown(other),
        }
    }

    /// ROM size in bytes: 32 KiB << code. `None` for codes outside 0..=8.
    pub fn rom_size_bytes(&self) -> Option<usize> {
        (self.rom_size <= 8).then(|| 0x8000 << self.rom_size)
    }

    /// External RAM size in bytes. `None` for unknown codes.
    pub fn ram_size_bytes(&self) -> Option<usize> {
        match self.ram_size {
            0x00 => Some(0),
            0x01 => Some(0x800),
            0x02 => Some(0x2000),
            0x03 => Some(0x8000),
            0x04 => Some(0x20000),
            0x05 => Some(0x10000),
            _ => None,
        }
    }

    /// Checksum over 0x0134..=0x014C as the boot ROM computes it.
    pub fn computed_header_checksum(&self) -> u8 {
        let tail = [
            self.cgb_flag,
            self.new_licensee_code[0],
            self.new_licensee_code[1],
            self.sgb_flag,
            self.cartridge_type,
            self.rom_size,
            self.ram_size,
            self.destination_code,
            self.old_licensee_code,
            self.mask_rom_version,
        ];
        self.title
            .iter()
            .chain(tail.iter())
            .fold(0u8, |x, &byte| x.wrapping_sub(byte).wrapping_sub(1))
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.computed_header_checksum() == self.header_checksum
    }

    pub fn has_valid_logo(&self) -> bool {
        self.logo == BOOT_LOGO
    }
}

/// Console variant selected from the header's compatibility byte.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ConsoleVariant {
    #[default]
    MonochromeOnly,
    /// Color features allowed, monochrome compatible (flag 0x80).
    Auto,
    /// Color hardware required (flag 0xC0).
    ColorRequired,
}

impl ConsoleVariant {
    pub fn from_cgb_flag(flag: u8) -> Self {
        match flag {
            0x80 => ConsoleVariant::Auto,
            0xC0 => ConsoleVariant::ColorRequired,
            _ => ConsoleVariant::MonochromeOnly,
        }
    }

    pub fn color_capable(self) -> bool {
        !matches!(self, ConsoleVariant::MonochromeOnly)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Destination {
    Japan,
    Overseas,
    Unknown(u8),
}

/// Cartridge hardware declared at 0x0147.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CartridgeType {
    RomOnly,
    Mbc1 { ram: bool, battery: bool },
    Mbc2 { battery: bool },
    RomRam { battery: bool },
    Mmm01 { ram: bool, battery: bool },
    Mbc3 { ram: bool, battery: bool, timer: bool },
    Mbc5 { ram: bool, battery: bool, rumble: bool },
    PocketCamera,
    BandaiTama5,
    HuC3,
    HuC1,
    Unknown(u8),
}

impl CartridgeType {
    pub fn from_code(code: u8) -> Self {
        use CartridgeType::*;
        match code {
            0x00 => RomOnly,
            0x01 => Mbc1 { ram: false, battery: false },
            0x02 => Mbc1 { ram: true, battery: false },
            0x03 => Mbc1 { ram: true, battery: true },
            0x05 => Mbc2 { battery: false },
            0x06 => Mbc2 { battery: true },
            0x08 => RomRam { battery: false },
            0x09 => RomRam { battery: true },
            0x0B => Mmm01 { ram: false, battery: false },
            0x0C => Mmm01 { ram: true, battery: false },
            0x0D => Mmm01 { ram: true, battery: true },
            0x0F => Mbc3 { ram: false, battery: true, timer: true },
            0x10 => Mbc3 { ram: true, battery: true, timer: true },
            0x11 => Mbc3 { ram: false, battery: false, timer: false },
            0x12 => Mbc3 { ram: true, battery: false, timer: false },
            0x13 => Mbc3 { ram: true, battery: true, timer: false },
            0x19 => Mbc5 { ram: false, battery: false, rumble: false },
            0x1A => Mbc5 { ram: true, battery: false, rumble: false },
            0x1B => Mbc5 { ram: true, battery: true, rumble: false },
            0x1C => Mbc5 { ram: false, battery: false, rumble: true },
            0x1D => Mbc5 { ram: true, battery: false, rumble: true },
            0x1E => Mbc5 { ram: true, battery: true, rumble: true },
            0xFC => PocketCamera,
            0xFD => BandaiTama5,
            0xFE => HuC3,
            0xFF => HuC1,
            other => Unknown(other),
        }
    }

    /// Whether the cartridge needs a bank controller to see past 32 KiB.
    pub fn has_controller(self) -> bool {
        !matches!(self, CartridgeType::RomOnly | CartridgeType::RomRam { .. })
    }
}
