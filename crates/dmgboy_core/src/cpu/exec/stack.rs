use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_push_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl,
            _ => self.regs.af(),
        };
        self.push_u16(bus, value);
        0
    }

    pub(in crate::cpu) fn exec_pop_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.hl = value,
            _ => self.load_af(value),
        }
        0
    }
}
