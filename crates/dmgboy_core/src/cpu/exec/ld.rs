use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        0
    }

    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));

        let value = self.fetch_imm16(bus);
        match opcode >> 4 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.hl = value,
            _ => self.regs.sp = value,
        }
        0
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E
        ));

        let value = self.fetch_imm8(bus);
        self.write_reg8(bus, (opcode >> 3) & 0x07, value);
        0
    }

    /// LD r, r' for 0x40-0x7F, excluding 0x76 (HALT).
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let value = self.read_reg8(bus, opcode & 0x07);
        self.write_reg8(bus, (opcode >> 3) & 0x07, value);
        0
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let addr = self.fetch_imm16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
        0
    }

    /// LDH (a8),A / LDH A,(a8)
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));

        let offset = self.fetch_imm8(bus) as u16;
        let addr = 0xFF00 | offset;
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    /// LD (C),A / LD A,(C)
    pub(in crate::cpu) fn exec_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    /// LD (a16),A / LD A,(a16)
    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));

        let addr = self.fetch_imm16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        0
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));

        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        0
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));

        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        0
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl;
        0
    }

    /// Resolve the (BC)/(DE)/(HL+)/(HL-) operand, applying the HL
    /// post-increment or post-decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match opcode >> 4 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_add(1);
                addr
            }
            _ => {
                let addr = self.regs.hl;
                self.regs.hl = addr.wrapping_sub(1);
                addr
            }
        }
    }
}
