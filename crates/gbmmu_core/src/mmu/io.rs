use super::Mmu;
use crate::peripherals::LcdRegister;
use crate::MmuError;

/// Named registers of the I/O page.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum IoRegister {
    Joypad,
    Divider,
    TimerCounter,
    TimerModulo,
    TimerControl,
    InterruptFlags,
    Lcd(LcdRegister),
    /// Write-only; starts an OAM DMA transfer.
    DmaTrigger,
    /// Clears the boot overlay. Reads report whether it is still mapped.
    BootOverlayLatch,
    InterruptEnable,
}

/// Register routing for 0xFF00–0xFF7F and 0xFFFF. Addresses missing from
/// this table are unimplemented. Zero page (0xFF80–0xFFFE) is decoded by
/// the memory map before the router is consulted.
pub const IO_REGISTERS: [(u16, IoRegister); 18] = [
    (0xFF00, IoRegister::Joypad),
    (0xFF04, IoRegister::Divider),
    (0xFF05, IoRegister::TimerCounter),
    (0xFF06, IoRegister::TimerModulo),
    (0xFF07, IoRegister::TimerControl),
    (0xFF0F, IoRegister::InterruptFlags),
    (0xFF40, IoRegister::Lcd(LcdRegister::Control)),
    (0xFF41, IoRegister::Lcd(LcdRegister::Status)),
    (0xFF42, IoRegister::Lcd(LcdRegister::ScrollY)),
    (0xFF43, IoRegister::Lcd(LcdRegister::ScrollX)),
    (0xFF44, IoRegister::Lcd(LcdRegister::Scanline)),
    (0xFF45, IoRegister::Lcd(LcdRegister::ScanlineCompare)),
    (0xFF46, IoRegister::DmaTrigger),
    (0xFF47, IoRegister::Lcd(LcdRegister::BackgroundPalette)),
    (0xFF48, IoRegister::Lcd(LcdRegister::ObjectPalette0)),
    (0xFF49, IoRegister::Lcd(LcdRegister::ObjectPalette1)),
    (0xFF50, IoRegister::BootOverlayLatch),
    (0xFFFF, IoRegister::InterruptEnable),
];

impl IoRegister {
    pub fn from_addr(addr: u16) -> Option<Self> {
        IO_REGISTERS
            .iter()
            .find(|&&(reg_addr, _)| reg_addr == addr)
            .map(|&(_, register)| register)
    }
}

impl Mmu {
    pub(super) fn read_io(&self, addr: u16) -> Result<u8, MmuError> {
        let register = IoRegister::from_addr(addr).ok_or(MmuError::UnimplementedIo { addr })?;
        let value = match register {
            IoRegister::Joypad => self.joypad.borrow().read_joypad(),
            IoRegister::Divider => self.timer.borrow().divider(),
            IoRegister::TimerCounter => self.timer.borrow().counter(),
            IoRegister::TimerModulo => self.timer.borrow().modulo(),
            IoRegister::TimerControl => self.timer.borrow().control(),
            IoRegister::InterruptFlags => self.interrupts.borrow().flags(),
            IoRegister::Lcd(lcd) => self.display.borrow().read_register(lcd),
            IoRegister::DmaTrigger => return Err(MmuError::UnimplementedIo { addr }),
            IoRegister::BootOverlayLatch => u8::from(self.in_boot_overlay),
            IoRegister::InterruptEnable => self.interrupts.borrow().enable(),
        };
        Ok(value)
    }

    pub(super) fn write_io(&mut self, addr: u16, value: u8) -> Result<(), MmuError> {
        let register = IoRegister::from_addr(addr).ok_or(MmuError::UnimplementedIo { addr })?;
        match register {
            IoRegister::Joypad => self.joypad.borrow_mut().write_joypad(value),
            IoRegister::Divider => self.timer.borrow_mut().reset_divider(),
            IoRegister::TimerCounter => self.timer.borrow_mut().set_counter(value),
            IoRegister::TimerModulo => self.timer.borrow_mut().set_modulo(value),
            IoRegister::TimerControl => self.timer.borrow_mut().set_control(value & 0x07),
            IoRegister::InterruptFlags => self.interrupts.borrow_mut().set_flags(value),
            IoRegister::Lcd(LcdRegister::Scanline) => {
                log::debug!("ignoring write {value:#04X} to LY");
            }
            IoRegister::Lcd(lcd) => self.display.borrow_mut().write_register(lcd, value),
            IoRegister::DmaTrigger => self.oam_dma(value),
            IoRegister::BootOverlayLatch => {
                if self.in_boot_overlay && value != 0 {
                    log::debug!("boot overlay disabled");
                    self.in_boot_overlay = false;
                }
            }
            IoRegister::InterruptEnable => self.interrupts.borrow_mut().set_enable(value),
        }
        Ok(())
    }
}
