pub mod cartridge;
mod error;
pub mod mmu;
pub mod peripherals;

pub use cartridge::{BankController, BankControllerKind, BankingMode, Cartridge};
pub use error::{MmuError, Severity};
pub use mmu::{IoRegister, Mmu, Region};
pub use peripherals::{
    DisplayPort, DisplayRegisters, Interrupt, InterruptPort, InterruptRegisters, JoypadButton,
    JoypadPort, JoypadRegisters, LcdRegister, Peripherals, TimerPort, TimerRegisters,
};

/// Size of the boot overlay mapped over 0x0000–0x00FF at power-on.
pub const BOOT_ROM_SIZE: usize = 0x100;
/// Working RAM backing both the primary (0xC000) and echo (0xE000) windows.
pub const WORKING_RAM_SIZE: usize = 0x2000;
/// High-page scratch RAM at 0xFF80–0xFFFE.
pub const ZERO_PAGE_SIZE: usize = 0x80;
/// Video RAM owned by the display subsystem.
pub const VIDEO_RAM_SIZE: usize = 0x2000;
/// Sprite attribute memory owned by the display subsystem.
pub const OAM_SIZE: usize = 0xA0;
/// Size of one switchable cartridge ROM bank.
pub const ROM_BANK_SIZE: u32 = 0x4000;
/// Size of one switchable external RAM bank.
pub const RAM_BANK_SIZE: u32 = 0x2000;
