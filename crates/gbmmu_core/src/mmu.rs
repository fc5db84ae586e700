use crate::cartridge::{BankController, Cartridge};
use crate::peripherals::{DisplayHandle, InterruptHandle, JoypadHandle, Peripherals, TimerHandle};
use crate::{MmuError, BOOT_ROM_SIZE, WORKING_RAM_SIZE, ZERO_PAGE_SIZE};

mod access;
mod boot;
mod dma;
mod io;
mod map;

pub use dma::OAM_DMA_LENGTH;
pub use io::{IoRegister, IO_REGISTERS};
pub use map::{decode, Decoded, Mapping, Region, MEMORY_MAP};

/// The Game Boy address space.
///
/// Owns the boot overlay, the cartridge ROM image and its banking state,
/// external RAM, working RAM and the zero page. Video RAM, OAM and the
/// timer/interrupt/joypad/LCD registers belong to their subsystems and are
/// reached through the shared handles in [`Peripherals`].
///
/// The bus is single-threaded: handles are `Rc<RefCell<_>>` and a
/// subsystem must not hold a mutable borrow of itself while calling in.
pub struct Mmu {
    boot_overlay: [u8; BOOT_ROM_SIZE],
    in_boot_overlay: bool,
    rom: Vec<u8>,
    controller: BankController,
    external_ram: Vec<u8>,
    working_ram: Box<[u8; WORKING_RAM_SIZE]>,
    zero_page: [u8; ZERO_PAGE_SIZE],
    display: DisplayHandle,
    timer: TimerHandle,
    interrupts: InterruptHandle,
    joypad: JoypadHandle,
}

impl std::fmt::Debug for Mmu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mmu")
            .field("in_boot_overlay", &self.in_boot_overlay)
            .field("rom_len", &self.rom.len())
            .field("controller", &self.controller)
            .field("external_ram_len", &self.external_ram.len())
            .finish_non_exhaustive()
    }
}

impl Mmu {
    /// Build the address space for a cartridge.
    ///
    /// Fails with a fatal [`MmuError`] when the header asks for a bank
    /// controller or RAM size the bus cannot model; no instance is produced.
    pub fn new(cartridge: Cartridge, peripherals: Peripherals) -> Result<Self, MmuError> {
        let kind = cartridge.controller()?;
        let ram_size = cartridge.external_ram_size()?;
        log::debug!(
            "cartridge: {kind:?}, {} bytes ROM, {ram_size} bytes external RAM",
            cartridge.rom().len()
        );

        let Peripherals {
            display,
            timer,
            interrupts,
            joypad,
        } = peripherals;

        Ok(Self {
            boot_overlay: boot::BOOT_ROM,
            in_boot_overlay: true,
            rom: cartridge.into_rom(),
            controller: BankController::new(kind),
            external_ram: vec![0; ram_size],
            working_ram: Box::new([0; WORKING_RAM_SIZE]),
            zero_page: [0; ZERO_PAGE_SIZE],
            display,
            timer,
            interrupts,
            joypad,
        })
    }

    pub fn attach_display(&mut self, display: DisplayHandle) {
        self.display = display;
    }

    pub fn attach_timer(&mut self, timer: TimerHandle) {
        self.timer = timer;
    }

    pub fn attach_interrupts(&mut self, interrupts: InterruptHandle) {
        self.interrupts = interrupts;
    }

    pub fn attach_joypad(&mut self, joypad: JoypadHandle) {
        self.joypad = joypad;
    }

    /// Force the boot overlay flag. Only meant for session reset; running
    /// software can clear the flag through 0xFF50 but never set it again.
    pub fn set_boot_overlay(&mut self, enabled: bool) {
        self.in_boot_overlay = enabled;
    }

    pub fn in_boot_overlay(&self) -> bool {
        self.in_boot_overlay
    }

    pub fn bank_controller(&self) -> &BankController {
        &self.controller
    }

    /// External RAM contents, e.g. for battery saves.
    pub fn external_ram(&self) -> &[u8] {
        &self.external_ram
    }

    /// Region an address currently decodes to.
    pub fn region(&self, addr: u16) -> Region {
        decode(addr, self.in_boot_overlay).region
    }
}
