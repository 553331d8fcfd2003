use super::{
    cartridge::Cartridge,
    timer::{ClockFreq, ClockScheduler},
    MEMORY_SIZE,
};

mod dma;
mod init;
mod mmio;
mod traits;

/// The DMG address space.
///
/// A flat 64 KiB array plus the two collaborators the bus talks to: the
/// cartridge (banked windows and banking writes) and the timer-frequency
/// scheduler (notified when TAC selects a new input clock).
pub struct MemoryBus {
    pub(crate) memory: [u8; MEMORY_SIZE],
    cartridge: Box<dyn Cartridge>,
    scheduler: Box<dyn ClockScheduler>,
}

impl MemoryBus {
    /// Build a bus in its power-on state: the start of the ROM image is
    /// copied into 0x0000..0x7FFF and the I/O registers take their
    /// post-boot values.
    pub fn new(cartridge: Box<dyn Cartridge>, scheduler: Box<dyn ClockScheduler>) -> Self {
        let mut bus = Self {
            memory: [0; MEMORY_SIZE],
            cartridge,
            scheduler,
        };
        bus.load_rom();
        bus.apply_dmg_initial_io_state();
        bus
    }

    pub fn cartridge(&self) -> &dyn Cartridge {
        self.cartridge.as_ref()
    }

    /// Input clock currently selected by the stored TAC byte.
    #[inline]
    pub fn clock_freq(&self) -> ClockFreq {
        ClockFreq::from_tac(self.memory[0xFF07])
    }
}
