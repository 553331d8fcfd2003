use std::fmt;

/// Unrecoverable conditions raised by the dispatch engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuFault {
    /// The byte at `pc` decodes to an opcode with no table entry.
    UnassignedOpcode { opcode: u8, pc: u16 },
}

impl CpuFault {
    /// Address of the instruction that raised the fault.
    pub fn pc(&self) -> u16 {
        match *self {
            CpuFault::UnassignedOpcode { pc, .. } => pc,
        }
    }
}

impl fmt::Display for CpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CpuFault::UnassignedOpcode { opcode, pc } => {
                write!(f, "unable to resolve opcode 0x{opcode:02X} at PC=0x{pc:04X}")
            }
        }
    }
}

impl std::error::Error for CpuFault {}
