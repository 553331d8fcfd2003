use super::{Bus, Cpu};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard register order used by opcode
    /// tables: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h(),
            5 => self.regs.l(),
            6 => bus.read8(self.regs.hl),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.set_h(value),
            5 => self.regs.set_l(value),
            6 => bus.write8(self.regs.hl, value),
            _ => self.regs.a = value,
        }
    }

    /// Read the byte at PC and advance PC by one.
    #[inline]
    pub fn fetch_imm8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Read a little-endian word at PC and advance PC by two.
    #[inline]
    pub fn fetch_imm16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch_imm8(bus);
        let hi = self.fetch_imm8(bus);
        u16::from_le_bytes([lo, hi])
    }

    #[inline]
    pub fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        bus.stack_push(&mut self.regs.sp, value);
    }

    #[inline]
    pub fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        bus.stack_pop(&mut self.regs.sp)
    }

    /// Evaluate a 2-bit condition code: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.flags.zero,
            1 => self.flags.zero,
            2 => !self.flags.carry,
            _ => self.flags.carry,
        }
    }

    /// Relative jump helper used by JR/JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand. Returns whether the branch was taken.
    pub(super) fn jr(&mut self, bus: &mut dyn Bus, cond: bool) -> bool {
        let offset = self.fetch_imm8(bus) as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        }
        cond
    }

    /// Absolute jump helper used by JP/JP cc.
    pub(super) fn jp_cond(&mut self, bus: &mut dyn Bus, cond: bool) -> bool {
        let addr = self.fetch_imm16(bus);
        if cond {
            self.regs.pc = addr;
        }
        cond
    }

    /// Call helper used by CALL/CALL cc.
    pub(super) fn call_cond(&mut self, bus: &mut dyn Bus, cond: bool) -> bool {
        let addr = self.fetch_imm16(bus);
        if cond {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
        }
        cond
    }

    /// Return helper used by RET/RET cc.
    pub(super) fn ret_cond(&mut self, bus: &mut dyn Bus, cond: bool) -> bool {
        if cond {
            self.regs.pc = self.pop_u16(bus);
        }
        cond
    }
}
