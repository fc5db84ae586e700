/// Storage behind a range of the 16-bit address space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Region {
    /// Boot ROM, only while the overlay is enabled.
    BootOverlay,
    /// Fixed cartridge ROM bank.
    RomBank0,
    /// Switchable cartridge ROM bank.
    RomBankN,
    VideoRam,
    ExternalRam,
    WorkingRam,
    /// Alias of the first 0x1E00 bytes of working RAM.
    EchoRam,
    Oam,
    /// 0xFEA0–0xFEFF: reads return 0, writes are dropped.
    Unusable,
    Io,
    ZeroPage,
}

/// One entry of [`MEMORY_MAP`]; `start..=end` is inclusive.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Mapping {
    pub start: u16,
    pub end: u16,
    pub region: Region,
}

const fn map(start: u16, end: u16, region: Region) -> Mapping {
    Mapping { start, end, region }
}

/// Address decoding, in priority order.
///
/// The first entry only applies while the boot overlay is enabled and
/// shadows the start of [`Region::RomBank0`]; every other pair of entries
/// is disjoint, and together they cover 0x0000–0xFFFF.
pub const MEMORY_MAP: [Mapping; 12] = [
    map(0x0000, 0x00FF, Region::BootOverlay),
    map(0x0000, 0x3FFF, Region::RomBank0),
    map(0x4000, 0x7FFF, Region::RomBankN),
    map(0x8000, 0x9FFF, Region::VideoRam),
    map(0xA000, 0xBFFF, Region::ExternalRam),
    map(0xC000, 0xDFFF, Region::WorkingRam),
    map(0xE000, 0xFDFF, Region::EchoRam),
    map(0xFE00, 0xFE9F, Region::Oam),
    map(0xFEA0, 0xFEFF, Region::Unusable),
    map(0xFF80, 0xFFFE, Region::ZeroPage),
    map(0xFF00, 0xFF7F, Region::Io),
    map(0xFFFF, 0xFFFF, Region::Io),
];

/// Result of decoding an address: the region and the zero-based offset
/// into the storage backing it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Decoded {
    pub region: Region,
    pub offset: u16,
}

pub fn decode(addr: u16, boot_overlay: bool) -> Decoded {
    MEMORY_MAP
        .iter()
        .filter(|m| boot_overlay || m.region != Region::BootOverlay)
        .find(|m| (m.start..=m.end).contains(&addr))
        .map(|m| Decoded {
            region: m.region,
            offset: addr - m.start,
        })
        .unwrap_or_else(|| unreachable!("memory map does not cover {addr:#06X}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_address_decodes_exactly_once_outside_the_overlay() {
        for addr in 0..=0xFFFFu16 {
            let hits = MEMORY_MAP[1..]
                .iter()
                .filter(|m| (m.start..=m.end).contains(&addr))
                .count();
            assert_eq!(hits, 1, "address {addr:#06X} matched {hits} regions");
        }
    }

    #[test]
    fn overlay_only_shadows_first_page() {
        assert_eq!(decode(0x00FF, true).region, Region::BootOverlay);
        assert_eq!(decode(0x00FF, false).region, Region::RomBank0);
        assert_eq!(decode(0x0100, true).region, Region::RomBank0);
    }

    #[test]
    fn echo_offsets_line_up_with_working_ram() {
        let primary = decode(0xC123, false);
        let echo = decode(0xE123, false);
        assert_eq!(primary.region, Region::WorkingRam);
        assert_eq!(echo.region, Region::EchoRam);
        assert_eq!(primary.offset, echo.offset);
    }

    #[test]
    fn high_page_split() {
        assert_eq!(decode(0xFE9F, false).region, Region::Oam);
        assert_eq!(decode(0xFEA0, false).region, Region::Unusable);
        assert_eq!(decode(0xFF00, false).region, Region::Io);
        assert_eq!(decode(0xFF7F, false).region, Region::Io);
        assert_eq!(decode(0xFF80, false), Decoded { region: Region::ZeroPage, offset: 0 });
        assert_eq!(decode(0xFFFE, false).offset, 0x7E);
        assert_eq!(decode(0xFFFF, false).region, Region::Io);
    }
}
