use anyhow::{Context, Result};
use gbmmu::DumpRange;

fn main() {
    env_logger::init();

    if let Err(err) = real_main() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next() else {
        eprintln!(
            "No ROM path provided.\n\
             Usage: gbmmu <rom> [start] [length]\n\
             Example: gbmmu path/to/your.gb 0x0100 0x50"
        );
        std::process::exit(1);
    };

    let mut range = DumpRange::default();
    if let Some(start) = args.next() {
        range.start = gbmmu::parse_hex(&start)?;
    }
    if let Some(length) = args.next() {
        range.length = gbmmu::parse_hex(&length)?;
    }

    let skip_boot = std::env::var(gbmmu::SKIP_BOOT_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    log::info!("Loading ROM path: '{}'", rom_path);
    let rom = std::fs::read(&rom_path).with_context(|| format!("Failed to read ROM file '{rom_path}'"))?;

    gbmmu::run(rom, range, skip_boot)
}
