use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_inc8_reg(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C),
            "unexpected INC r opcode {opcode:#04x}"
        );

        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
        0
    }

    pub(in crate::cpu) fn exec_dec8_reg(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D),
            "unexpected DEC r opcode {opcode:#04x}"
        );

        let reg = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
        0
    }

    /// INC rr / DEC rr. No flags are affected.
    pub(in crate::cpu) fn exec_incdec16_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode & 0xCF, 0x03 | 0x0B));

        let delta: u16 = if opcode & 0x08 == 0 { 1 } else { 0xFFFF };
        match opcode >> 4 {
            0 => self.regs.set_bc(self.regs.bc().wrapping_add(delta)),
            1 => self.regs.set_de(self.regs.de().wrapping_add(delta)),
            2 => self.regs.hl = self.regs.hl.wrapping_add(delta),
            _ => self.regs.sp = self.regs.sp.wrapping_add(delta),
        }
        0
    }
}
