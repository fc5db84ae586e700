mod bank_controller;

pub use bank_controller::{BankController, BankingMode};

use crate::MmuError;

/// Header byte selecting the cartridge's bank controller.
pub const CONTROLLER_CODE_ADDR: usize = 0x147;
/// Header byte encoding the external RAM size.
pub const RAM_SIZE_CODE_ADDR: usize = 0x149;
const TITLE_START: usize = 0x134;
const TITLE_END: usize = 0x143;

/// Bank controller wired on the cartridge board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BankControllerKind {
    /// Plain 32 KiB ROM, optional fixed RAM, no banking registers.
    RomOnly,
    Mbc1,
    Mbc1Ram,
    Mbc2,
}

impl BankControllerKind {
    /// Decode the header's controller code.
    ///
    /// Battery-backed variants share a controller with their plain
    /// counterparts; persistence is handled outside the bus.
    pub fn from_code(code: u8) -> Result<Self, MmuError> {
        match code {
            0x00 => Ok(Self::RomOnly),
            0x01 => Ok(Self::Mbc1),
            0x02 | 0x03 => Ok(Self::Mbc1Ram),
            0x05 | 0x06 => Ok(Self::Mbc2),
            other => Err(MmuError::UnsupportedBankController(other)),
        }
    }

    #[inline]
    pub fn is_banked(self) -> bool {
        self != Self::RomOnly
    }
}

/// Decode the header's RAM size code into a byte count.
pub fn external_ram_size(code: u8) -> Result<usize, MmuError> {
    match code {
        0x00 => Ok(0),
        0x01 => Ok(2048),
        0x02 => Ok(8192),
        other => Err(MmuError::UnsupportedRamSize(other)),
    }
}

/// Parsed cartridge image handed to [`crate::Mmu::new`].
#[derive(Clone, Debug)]
pub struct Cartridge {
    rom: Vec<u8>,
    controller_code: u8,
    ram_size_code: u8,
}

impl Cartridge {
    /// Build from a ROM whose header has already been parsed elsewhere.
    pub fn new(rom: Vec<u8>, controller_code: u8, ram_size_code: u8) -> Self {
        Self {
            rom,
            controller_code,
            ram_size_code,
        }
    }

    /// Build from a raw ROM image, reading the codes from its header.
    ///
    /// Images too short to carry a header are treated as ROM-only without RAM.
    pub fn from_rom(rom: Vec<u8>) -> Self {
        let controller_code = rom.get(CONTROLLER_CODE_ADDR).copied().unwrap_or(0);
        let ram_size_code = rom.get(RAM_SIZE_CODE_ADDR).copied().unwrap_or(0);
        Self::new(rom, controller_code, ram_size_code)
    }

    pub fn rom(&self) -> &[u8] {
        &self.rom
    }

    pub fn controller_code(&self) -> u8 {
        self.controller_code
    }

    pub fn ram_size_code(&self) -> u8 {
        self.ram_size_code
    }

    pub fn controller(&self) -> Result<BankControllerKind, MmuError> {
        BankControllerKind::from_code(self.controller_code)
    }

    pub fn external_ram_size(&self) -> Result<usize, MmuError> {
        external_ram_size(self.ram_size_code)
    }

    /// Upper-case ASCII title from the header, NUL padding stripped.
    pub fn title(&self) -> String {
        self.rom
            .get(TITLE_START..=TITLE_END)
            .unwrap_or_default()
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
            .collect()
    }

    pub(crate) fn into_rom(self) -> Vec<u8> {
        self.rom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_rom(controller: u8, ram: u8) -> Vec<u8> {
        let mut rom = vec![0u8; 0x8000];
        rom[CONTROLLER_CODE_ADDR] = controller;
        rom[RAM_SIZE_CODE_ADDR] = ram;
        rom
    }

    #[test]
    fn controller_codes_map_to_supported_kinds() {
        assert_eq!(BankControllerKind::from_code(0x00), Ok(BankControllerKind::RomOnly));
        assert_eq!(BankControllerKind::from_code(0x01), Ok(BankControllerKind::Mbc1));
        assert_eq!(BankControllerKind::from_code(0x03), Ok(BankControllerKind::Mbc1Ram));
        assert_eq!(BankControllerKind::from_code(0x05), Ok(BankControllerKind::Mbc2));
        // MBC3 is outside the supported set.
        assert_eq!(
            BankControllerKind::from_code(0x11),
            Err(MmuError::UnsupportedBankController(0x11))
        );
    }

    #[test]
    fn ram_size_codes() {
        assert_eq!(external_ram_size(0), Ok(0));
        assert_eq!(external_ram_size(1), Ok(2048));
        assert_eq!(external_ram_size(2), Ok(8192));
        assert_eq!(external_ram_size(3), Err(MmuError::UnsupportedRamSize(3)));
    }

    #[test]
    fn from_rom_reads_header_codes_and_title() {
        let mut rom = header_rom(0x02, 0x01);
        rom[TITLE_START..TITLE_START + 6].copy_from_slice(b"TETRIS");
        let cart = Cartridge::from_rom(rom);
        assert_eq!(cart.controller(), Ok(BankControllerKind::Mbc1Ram));
        assert_eq!(cart.external_ram_size(), Ok(2048));
        assert_eq!(cart.title(), "TETRIS");
    }

    #[test]
    fn short_image_is_rom_only() {
        let cart = Cartridge::from_rom(vec![0xAA; 0x100]);
        assert_eq!(cart.controller(), Ok(BankControllerKind::RomOnly));
        assert_eq!(cart.external_ram_size(), Ok(0));
        assert_eq!(cart.title(), "");
    }
}
