use super::{Bus, Cpu};

const IF_ADDR: u16 = 0xFF0F;
const IE_ADDR: u16 = 0xFFFF;
/// Cost of the interrupt entry sequence in T-cycles.
const INTERRUPT_ENTRY_CYCLES: u32 = 20;

impl Cpu {
    /// Interrupt lines that are both requested (IF) and enabled (IE).
    pub fn pending_interrupts(&self, bus: &mut dyn Bus) -> u8 {
        bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F
    }

    /// Service the highest-priority pending interrupt if IME is set.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken, or `None` otherwise.
    /// Must only be called on an instruction boundary.
    pub fn handle_interrupts(&mut self, bus: &mut dyn Bus) -> Option<u32> {
        if !self.flags.interrupt_master || self.fault.is_some() {
            return None;
        }

        let pending = self.pending_interrupts(bus);
        if pending == 0 {
            return None;
        }

        // VBlank > LCD STAT > Timer > Serial > Joypad.
        let index = pending.trailing_zeros() as u16;
        let vector = 0x0040 + index * 8;

        self.flags.interrupt_master = false;
        self.halted = false;

        let pc = self.regs.pc;
        self.push_u16(bus, pc);

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !(1 << index));

        log::debug!(
            "interrupt: idx={} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            index,
            vector,
            pc,
            self.regs.sp,
        );

        self.regs.pc = vector;
        Some(INTERRUPT_ENTRY_CYCLES)
    }
}
