mod header;

pub use header::{CartridgeType, ConsoleVariant, Destination, Header, BOOT_LOGO, HEADER_END};

use crate::{Error, Result};

/// Size of the unbanked ROM window (0x0000–0x7FFF) visible without a
/// bank controller.
pub const ROM_WINDOW: usize = 0x8000;

/// A loaded cartridge image together with its parsed header.
///
/// Loading is a one-shot parse: the header is read once and cached, and
/// nothing here refers back to the CPU that ends up running the image.
#[derive(Clone, Debug)]
pub struct Cartridge {
    image: Vec<u8>,
    header: Header,
    variant: ConsoleVariant,
}

impl Cartridge {
    /// Parse a raw cartridge image.
    ///
    /// Fails with [`Error::MalformedCartridge`] when the bytes are too short
    /// to contain the full header.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_END {
            return Err(Error::MalformedCartridge {
                len: bytes.len(),
                required: HEADER_END,
            });
        }

        let header = Header::parse(bytes);
        let variant = header.variant();

        if !header.has_valid_logo() {
            log::warn!("cartridge logo does not match the boot bitmap");
        }
        if !header.header_checksum_ok() {
            log::warn!(
                "cartridge header checksum mismatch: stored 0x{:02X}, computed 0x{:02X}",
                header.header_checksum,
                header.computed_header_checksum()
            );
        }

        Ok(Self {
            image: bytes.to_vec(),
            header,
            variant,
        })
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn variant_hint(&self) -> ConsoleVariant {
        self.variant
    }

    pub fn title(&self) -> String {
        self.header.title()
    }

    /// Bytes that map into the unbanked ROM window at address 0.
    pub fn rom_window(&self) -> &[u8] {
        &self.image[..self.image.len().min(ROM_WINDOW)]
    }

    pub fn into_parts(self) -> (Vec<u8>, Header, ConsoleVariant) {
        (self.image, self.header, self.variant)
    }
}
