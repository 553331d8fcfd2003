use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_halt(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.halted = true;
        0
    }

    pub(in crate::cpu) fn exec_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        // STOP is a 2-byte instruction; the padding byte is discarded.
        // The low-power state is approximated by HALT, woken by the next
        // enabled interrupt rather than by the joypad lines.
        let _padding = self.fetch_imm8(bus);
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        self.halted = true;
        0
    }

    /// DI only arms the request; the dispatch engine clears IME after the
    /// next instruction.
    pub(in crate::cpu) fn exec_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.flags.pending_interrupt_disabled = true;
        self.flags.pending_interrupt_enabled = false;
        0
    }

    pub(in crate::cpu) fn exec_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.flags.pending_interrupt_enabled = true;
        self.flags.pending_interrupt_disabled = false;
        0
    }
}
