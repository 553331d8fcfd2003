use super::Cpu;

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.flags.carry) as u8;

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = a as u16 + value as u16 + carry_in as u16;
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, false, half & 0x10 != 0, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = (use_carry && self.flags.carry) as i16;

        let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry_in;
        let full = a as i16 - value as i16 - carry_in;
        let result = full as u8;

        self.regs.a = result;
        self.set_flags(result == 0, true, half < 0, full < 0);
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.set_flags(result == 0, false, true, false);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.set_flags(result == 0, false, false, false);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.set_flags(result == 0, false, false, false);
    }

    /// CP: flags as if `A - value` was performed, A unchanged.
    ///
    /// Routed through `compare` with the operands swapped, which yields
    /// C = A < value and H = low nibble borrow.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.compare(value, self.regs.a);
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// Updates A, Z, H, C; leaves N unchanged.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.flags.carry { 0x60 } else { 0x00 };
        if self.flags.half_carry {
            adjust |= 0x06;
        }

        if !self.flags.sub {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.regs.a = a;
        self.set_flags(a == 0, self.flags.sub, false, adjust >= 0x60);
    }

    /// 8-bit increment used by INC r and INC (HL). C is left unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flags(result == 0, false, (value & 0x0F) == 0x0F, self.flags.carry);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is left unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flags(result == 0, true, (value & 0x0F) == 0, self.flags.carry);
        result
    }

    /// 16-bit add for `ADD HL,rr`. Z is unaffected.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl;
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        let carry = hl as u32 + value as u32 > 0xFFFF;
        self.regs.hl = hl.wrapping_add(value);
        self.set_flags(self.flags.zero, false, half, carry);
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,r8 and
    /// LD HL,SP+r8). H and C come from the low byte; Z and N are cleared.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let half = (base & 0x000F) + (offset & 0x000F) > 0x000F;
        let carry = (base & 0x00FF) + (offset & 0x00FF) > 0x00FF;
        self.set_flags(false, false, half, carry);
        base.wrapping_add(offset)
    }

    /// Shared rotate/shift core for the CB page and the A-register rotates.
    ///
    /// `op` follows the CB encoding: 0=RLC 1=RRC 2=RL 3=RR 4=SLA 5=SRA
    /// 6=SWAP 7=SRL. Returns the result and the carry-out.
    pub(super) fn alu_shift(&self, op: u8, value: u8) -> (u8, bool) {
        match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | self.flags.carry as u8, value & 0x80 != 0),
            3 => ((value >> 1) | ((self.flags.carry as u8) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        }
    }
}
