use super::Mmu;

/// Bytes copied by one OAM DMA transfer.
pub const OAM_DMA_LENGTH: u16 = 0xA0;
const OAM_START: u16 = 0xFE00;

impl Mmu {
    pub(super) fn oam_dma(&mut self, value: u8) {
        // OAM DMA: copy 160 bytes from XX00..XX9F to FE00..FE9F through the
        // regular decode path. Timing and bus conflicts are not modelled; the
        // transfer completes inside the triggering write.
        let source = u16::from(value) << 8;
        log::debug!("OAM DMA from {source:#06X}");
        for i in 0..OAM_DMA_LENGTH {
            let byte = self.read_byte(source.wrapping_add(i));
            self.write_byte(OAM_START + i, byte);
        }
    }
}
