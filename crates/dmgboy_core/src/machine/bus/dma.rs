use super::MemoryBus;

/// Start of the object attribute table.
const OAM_BASE: u16 = 0xFE00;
/// Bytes copied by one transfer.
const OAM_DMA_LEN: u16 = 0xA0;

impl MemoryBus {
    /// OAM DMA: copy XX00..XX9F to FE00..FE9F.
    ///
    /// Goes through `read_byte`/`write_byte` so banked sources are served
    /// by the cartridge. The transfer is instantaneous; the 160 M-cycle
    /// duration and bus conflicts are not modelled.
    pub(super) fn oam_dma(&mut self, page: u8) {
        let base = (page as u16) << 8;
        log::debug!("OAM DMA from {base:#06x}");
        for i in 0..OAM_DMA_LEN {
            let byte = self.read_byte(base.wrapping_add(i));
            self.write_byte(OAM_BASE + i, byte);
        }
    }
}
