use crate::cpu::Bus;

use super::MemoryBus;

impl Bus for MemoryBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read_byte(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write_byte(addr, value)
    }

    fn tick(&mut self, cycles: u32) {
        self.scheduler.tick(cycles);
    }
}
