use super::BankControllerKind;
use crate::{RAM_BANK_SIZE, ROM_BANK_SIZE};

/// What the 0x4000–0x5FFF register selects.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum BankingMode {
    /// Bits 4-5 of the written value extend the ROM bank number.
    #[default]
    RomBanking,
    /// Bits 0-1 of the written value select the external RAM bank.
    RamBanking,
}

/// Banking registers of an MBC1/MBC2-style controller.
///
/// Only register state lives here: the ROM image and external RAM stay
/// with the bus, which asks for the current offsets on every access.
/// `rom_bank_offset` is the byte offset into the ROM image that backs the
/// 0x4000–0x7FFF window and is never below one bank, since a write
/// selecting bank 0 is coerced to bank 1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankController {
    kind: BankControllerKind,
    rom_bank_offset: u32,
    ram_bank_offset: u32,
    ram_enabled: bool,
    banking_mode: BankingMode,
}

impl BankController {
    pub fn new(kind: BankControllerKind) -> Self {
        Self {
            kind,
            rom_bank_offset: ROM_BANK_SIZE,
            ram_bank_offset: 0,
            ram_enabled: false,
            banking_mode: BankingMode::RomBanking,
        }
    }

    pub fn kind(&self) -> BankControllerKind {
        self.kind
    }

    pub fn rom_bank_offset(&self) -> u32 {
        self.rom_bank_offset
    }

    pub fn rom_bank(&self) -> u32 {
        self.rom_bank_offset / ROM_BANK_SIZE
    }

    pub fn ram_bank_offset(&self) -> u32 {
        self.ram_bank_offset
    }

    pub fn ram_enabled(&self) -> bool {
        self.ram_enabled
    }

    pub fn banking_mode(&self) -> BankingMode {
        self.banking_mode
    }

    /// Whether external RAM currently accepts reads and writes.
    ///
    /// ROM-only boards have no enable register, so their RAM never opens.
    pub fn ram_accessible(&self) -> bool {
        self.ram_enabled
    }

    /// Index into the ROM image for an offset inside the switchable window.
    #[inline]
    pub fn rom_index(&self, window_offset: u16) -> usize {
        self.rom_bank_offset as usize + window_offset as usize
    }

    /// Index into external RAM for an offset inside 0xA000–0xBFFF.
    #[inline]
    pub fn ram_index(&self, window_offset: u16) -> usize {
        self.ram_bank_offset as usize + window_offset as usize
    }

    /// Apply a CPU write to the cartridge ROM area (0x0000–0x7FFF).
    ///
    /// Invalid bit patterns are masked the way the real controller does;
    /// nothing here can fail.
    pub fn write_register(&mut self, addr: u16, value: u8) {
        if !self.kind.is_banked() {
            return;
        }

        match addr >> 12 {
            0x1 => {
                // RAM enable: lower nibble must be 0x0A.
                self.ram_enabled = (value & 0x0F) == 0x0A;
            }
            0x2 | 0x3 => {
                let bank = u32::from(value & 0x1F).max(1);
                self.rom_bank_offset = bank * ROM_BANK_SIZE;
                log::debug!("ROM bank {bank} selected");
            }
            0x4 | 0x5 => match self.banking_mode {
                BankingMode::RamBanking => {
                    self.ram_bank_offset = u32::from(value & 0x03) * RAM_BANK_SIZE;
                }
                BankingMode::RomBanking => {
                    let low = self.rom_bank() & 0x1F;
                    let high = u32::from((value >> 4) & 0x03);
                    self.rom_bank_offset = (low | (high << 5)) * ROM_BANK_SIZE;
                    log::debug!("ROM bank {} selected", self.rom_bank());
                }
            },
            0x6 | 0x7 => {
                self.banking_mode = if value & 0x01 != 0 {
                    BankingMode::RamBanking
                } else {
                    BankingMode::RomBanking
                };
            }
            _ => {
                log::debug!("ignoring write {value:#04X} to ROM area {addr:#06X}");
            }
        }
    }
}
