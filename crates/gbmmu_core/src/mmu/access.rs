use super::map::{decode, Decoded, Region};
use super::Mmu;
use crate::error::fatal;
use crate::{MmuError, Severity};

impl Mmu {
    /// Read one byte, reporting failures instead of acting on them.
    pub fn try_read_byte(&self, addr: u16) -> Result<u8, MmuError> {
        let Decoded { region, offset } = decode(addr, self.in_boot_overlay);
        let value = match region {
            Region::BootOverlay => self.boot_overlay[offset as usize],
            Region::RomBank0 => self.rom_byte(offset as usize),
            Region::RomBankN => self.rom_byte(self.controller.rom_index(offset)),
            Region::VideoRam => self.display.borrow().vram()[offset as usize],
            Region::ExternalRam => {
                let index = self.external_ram_index(addr, offset)?;
                if self.controller.ram_accessible() {
                    self.external_ram[index]
                } else {
                    0xFF
                }
            }
            Region::WorkingRam | Region::EchoRam => self.working_ram[offset as usize],
            Region::Oam => self.display.borrow().oam()[offset as usize],
            Region::Unusable => 0,
            Region::ZeroPage => self.zero_page[offset as usize],
            Region::Io => return self.read_io(addr),
        };
        Ok(value)
    }

    /// Write one byte, reporting failures instead of acting on them.
    ///
    /// A write to the DMA register runs the whole transfer before returning.
    pub fn try_write_byte(&mut self, addr: u16, value: u8) -> Result<(), MmuError> {
        let Decoded { region, offset } = decode(addr, self.in_boot_overlay);
        match region {
            // ROM is immutable; the bank controller interprets the write.
            Region::BootOverlay | Region::RomBank0 | Region::RomBankN => {
                self.controller.write_register(addr, value);
            }
            Region::VideoRam => self.display.borrow_mut().vram_mut()[offset as usize] = value,
            Region::ExternalRam => {
                let index = self.external_ram_index(addr, offset)?;
                if self.controller.ram_accessible() {
                    self.external_ram[index] = value;
                } else {
                    log::debug!("external RAM disabled, dropping write to {addr:#06X}");
                }
            }
            Region::WorkingRam | Region::EchoRam => self.working_ram[offset as usize] = value,
            Region::Oam => self.display.borrow_mut().oam_mut()[offset as usize] = value,
            Region::Unusable => {}
            Region::ZeroPage => self.zero_page[offset as usize] = value,
            Region::Io => return self.write_io(addr, value),
        }
        Ok(())
    }

    /// Read one byte. Unimplemented I/O reads as 0; a fatal access
    /// terminates the session.
    pub fn read_byte(&self, addr: u16) -> u8 {
        self.try_read_byte(addr).unwrap_or_else(|err| match err.severity() {
            Severity::Tolerated => {
                log::warn!("read from unhandled I/O {addr:#06X}, returning 0");
                0
            }
            Severity::Fatal => fatal(&err),
        })
    }

    /// Write one byte. Writes to unimplemented I/O are dropped; a fatal
    /// access terminates the session.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        if let Err(err) = self.try_write_byte(addr, value) {
            match err.severity() {
                Severity::Tolerated => {
                    log::warn!("write {value:#04X} to unhandled I/O {addr:#06X} ignored");
                }
                Severity::Fatal => fatal(&err),
            }
        }
    }

    /// Little-endian 16-bit read. The high byte comes from `addr + 1`,
    /// wrapping to 0x0000 at the top of the address space.
    pub fn read_word(&self, addr: u16) -> u16 {
        u16::from_le_bytes([self.read_byte(addr), self.read_byte(addr.wrapping_add(1))])
    }

    /// Two independent byte writes: low byte at `addr`, then high byte.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.write_byte(addr, low);
        self.write_byte(addr.wrapping_add(1), high);
    }

    /// Bytes past the end of a short ROM image read as open bus.
    fn rom_byte(&self, index: usize) -> u8 {
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    fn external_ram_index(&self, addr: u16, offset: u16) -> Result<usize, MmuError> {
        let size = self.external_ram.len();
        if size == 0 {
            return Err(MmuError::NoExternalRam { addr });
        }
        let index = self.controller.ram_index(offset);
        if index >= size {
            return Err(MmuError::ExternalRamOutOfRange {
                addr,
                offset: index,
                size,
            });
        }
        Ok(index)
    }
}
