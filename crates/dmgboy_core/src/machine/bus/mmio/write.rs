use super::super::{ClockFreq, MemoryBus};

/// Echo RAM sits exactly this far above the work RAM it mirrors.
const ECHO_OFFSET: u16 = 0x2000;

impl MemoryBus {
    /// Store a byte, applying the side effect owned by `addr` first.
    ///
    /// Arms are matched in order, so register addresses never reach the
    /// plain store at the bottom.
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        match addr {
            // Cartridge ROM area: interpreted by the mapper as banking
            // control, never stored locally.
            0x0000..=0x7FFF => self.cartridge.write_banking(addr, value),

            // External RAM window, owned by the cartridge.
            0xA000..=0xBFFF => self.cartridge.write_ram_bank(addr, value),

            // Echo RAM: keep the echo byte and write through to work RAM.
            0xE000..=0xFDFF => {
                self.memory[addr as usize] = value;
                self.write_byte(addr - ECHO_OFFSET, value);
            }

            // Unusable range.
            0xFEA0..=0xFEFE => {}

            // DIV and LY reset on any write.
            0xFF04 | 0xFF44 => self.memory[addr as usize] = 0,

            // OAM DMA. The trigger value itself is not stored.
            0xFF46 => self.oam_dma(value),

            0xFF07 => {
                let old = self.clock_freq();
                let new = ClockFreq::from_tac(value);
                self.memory[addr as usize] = value;
                if old != new {
                    log::debug!("TAC write {value:#04x}: timer clock {old} -> {new}");
                    self.scheduler.set_clock_freq(new);
                }
            }

            _ => self.memory[addr as usize] = value,
        }
    }
}
