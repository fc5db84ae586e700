use std::fmt::Write as _;

use anyhow::{Context, Result};
use gbmmu_core::peripherals::shared;
use gbmmu_core::{
    Cartridge, DisplayRegisters, InterruptRegisters, JoypadRegisters, Mmu, Peripherals,
    TimerRegisters,
};

/// Environment variable that unmaps the boot overlay before dumping.
pub const SKIP_BOOT_ENV: &str = "GBMMU_SKIP_BOOT";

/// What to show from the bus once the cartridge is mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpRange {
    pub start: u16,
    pub length: u16,
}

impl Default for DumpRange {
    fn default() -> Self {
        Self {
            start: 0x0100,
            length: 0x40,
        }
    }
}

/// Parse a hex address, with or without a `0x`/`$` prefix.
pub fn parse_hex(text: &str) -> Result<u16> {
    let digits = text
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('$');
    u16::from_str_radix(digits, 16).with_context(|| format!("'{text}' is not a 16-bit hex value"))
}

/// Map `rom` onto a freshly wired bus.
pub fn map_cartridge(rom: Vec<u8>, skip_boot: bool) -> Result<Mmu> {
    let cartridge = Cartridge::from_rom(rom);
    log::info!(
        "Cartridge '{}': controller {:#04X}, RAM size code {:#04X}, {} bytes",
        cartridge.title(),
        cartridge.controller_code(),
        cartridge.ram_size_code(),
        cartridge.rom().len()
    );

    let display = shared(DisplayRegisters::default());
    let timer = shared(TimerRegisters::default());
    let interrupts = shared(InterruptRegisters::default());
    let joypad = shared(JoypadRegisters::default());
    let peripherals = Peripherals::builder()
        .display(display)
        .timer(timer)
        .interrupts(interrupts)
        .joypad(joypad)
        .build();

    let mut mmu = Mmu::new(cartridge, peripherals).context("Unsupported cartridge")?;
    if skip_boot {
        mmu.set_boot_overlay(false);
    }
    Ok(mmu)
}

/// Hex dump of `range` as read through the bus, 16 bytes per line.
///
/// Unimplemented I/O shows up as the bus fallback; an access the bus
/// would treat as fatal is returned as an error instead.
pub fn dump(mmu: &Mmu, range: DumpRange) -> Result<String> {
    let mut out = String::new();
    let end = u32::from(range.start) + u32::from(range.length);
    let mut addr = u32::from(range.start);
    while addr < end.min(0x1_0000) {
        let _ = write!(out, "{addr:04X}:");
        let line_end = (addr + 16).min(end).min(0x1_0000);
        for a in addr..line_end {
            let _ = write!(out, " {:02X}", peek(mmu, a as u16)?);
        }
        out.push('\n');
        addr = line_end;
    }
    Ok(out)
}

fn peek(mmu: &Mmu, addr: u16) -> Result<u8> {
    match mmu.try_read_byte(addr) {
        Ok(value) => Ok(value),
        Err(err) if !err.is_fatal() => Ok(mmu.read_byte(addr)),
        Err(err) => Err(err).with_context(|| format!("Cannot read {addr:#06X}")),
    }
}

pub fn run(rom: Vec<u8>, range: DumpRange, skip_boot: bool) -> Result<()> {
    let mmu = map_cartridge(rom, skip_boot)?;
    log::info!(
        "Dumping {:#06X}..{:#06X} ({:?})",
        range.start,
        u32::from(range.start) + u32::from(range.length),
        mmu.region(range.start)
    );
    print!("{}", dump(&mmu, range)?);
    Ok(())
}
