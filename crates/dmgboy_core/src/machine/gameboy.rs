use crate::cpu::{Bus, Cpu, CpuFault};

use super::{load_cartridge, Cartridge, ClockScheduler, MemoryBus, TimerScheduler};

/// High-level Game Boy machine.
///
/// Owns one CPU core and its bus. Instances share nothing, so any number
/// can run side by side.
pub struct GameBoy {
    pub cpu: Cpu,
    pub bus: MemoryBus,
}

impl GameBoy {
    /// Power on with the mapper named in the ROM header and the reference
    /// timer scheduler.
    pub fn new(rom: &[u8]) -> Self {
        Self::with_collaborators(load_cartridge(rom), Box::<TimerScheduler>::default())
    }

    pub fn with_collaborators(
        cartridge: Box<dyn Cartridge>,
        scheduler: Box<dyn ClockScheduler>,
    ) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: MemoryBus::new(cartridge, scheduler),
        }
    }

    /// Run one instruction boundary: enter a pending interrupt if IME
    /// allows it, otherwise dispatch one instruction. The elapsed cycles
    /// are fed to the bus scheduler.
    pub fn step(&mut self) -> Result<u32, CpuFault> {
        let cycles = match self.cpu.handle_interrupts(&mut self.bus) {
            Some(cycles) => cycles,
            None => self.cpu.step(&mut self.bus)?,
        };
        self.bus.tick(cycles);
        Ok(cycles)
    }

    /// Step until at least `cycle_budget` T-cycles have elapsed and return
    /// the exact count.
    pub fn run_for(&mut self, cycle_budget: u64) -> Result<u64, CpuFault> {
        let mut elapsed = 0u64;
        while elapsed < cycle_budget {
            elapsed += u64::from(self.step()?);
        }
        Ok(elapsed)
    }

    pub fn read_byte(&self, addr: u16) -> u8 {
        self.bus.read_byte(addr)
    }

    pub fn write_byte(&mut self, addr: u16, value: u8) {
        self.bus.write_byte(addr, value)
    }

    pub fn stack_push(&mut self, value: u16) {
        self.bus.stack_push(&mut self.cpu.regs.sp, value);
    }

    pub fn stack_pop(&mut self) -> u16 {
        self.bus.stack_pop(&mut self.cpu.regs.sp)
    }
}
