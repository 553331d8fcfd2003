use super::super::MemoryBus;

impl MemoryBus {
    pub fn read_byte(&self, addr: u16) -> u8 {
        match addr {
            // Both banked windows go through the cartridge's ROM-bank read
            // path; the cartridge tells ROM and RAM apart by address.
            0x4000..=0x7FFF | 0xA000..=0xBFFF => self.cartridge.read_rom_bank(addr),
            _ => self.memory[addr as usize],
        }
    }
}
