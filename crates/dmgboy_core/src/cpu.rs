mod alu;
mod bus;
mod cb;
mod dispatch;
mod exec;
mod fault;
mod flags;
mod helpers;
mod init;
mod interrupts;
mod regs;
pub mod table;

pub use bus::Bus;
pub use fault::CpuFault;
pub use flags::{FlagBits, Flags};
pub use regs::Registers;
pub use table::{OpHandler, OpcodeEntry, OpcodeTable, DMG_OPCODES};

/// DI. Clears IME once the following instruction has executed.
pub const OPCODE_DI: u8 = 0xF3;
/// EI. Sets IME once the following instruction has executed.
pub const OPCODE_EI: u8 = 0xFB;
/// Prefix byte selecting the extended (bit/rotate/shift) instruction page.
pub const OPCODE_CB_PREFIX: u8 = 0xCB;

/// LR35902 CPU core.
///
/// Holds the register file, the condition/interrupt flags and the opcode
/// table used for dispatch. Memory and I/O live behind the [`Bus`] passed
/// into every operation, so several independent cores can coexist.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub flags: Flags,
    /// Set by HALT (and approximated STOP). A halted CPU idles until an
    /// enabled interrupt is requested.
    pub halted: bool,
    /// Latched once an unassigned opcode is decoded; the core stays dead
    /// until it is rebuilt.
    fault: Option<CpuFault>,
    table: &'static OpcodeTable,
}

#[cfg(test)]
mod tests;
