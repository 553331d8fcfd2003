mod bus;
mod cartridge;
mod gameboy;
mod timer;

pub use bus::MemoryBus;
pub use cartridge::{load_cartridge, Cartridge, Mbc1, RomOnly};
pub use gameboy::GameBoy;
pub use timer::{ClockFreq, ClockScheduler, TimerScheduler};

/// Total addressable memory for the Game Boy (64 KiB).
///
/// Every region lives in one flat array; the two banked windows are routed
/// to the cartridge instead of being read from here.
const MEMORY_SIZE: usize = 0x10000;
