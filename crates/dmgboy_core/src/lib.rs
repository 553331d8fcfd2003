pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, CpuFault};
pub use machine::GameBoy;

/// Master clock of the DMG CPU in T-cycles per second.
pub const CPU_CLOCK_HZ: u32 = 4_194_304;
