use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, r (0x80-0xBF).
    pub(in crate::cpu) fn exec_alu_reg_group(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode & 0x07);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        0
    }

    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A, d8.
    pub(in crate::cpu) fn exec_alu_imm(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch_imm8(bus);
        self.alu_dispatch((opcode >> 3) & 0x07, value);
        0
    }

    fn alu_dispatch(&mut self, operation: u8, value: u8) {
        match operation {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// RLCA/RRCA/RLA/RRA. Unlike the CB forms, Z is always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let (result, carry) = self.alu_shift((opcode >> 3) & 0x03, self.regs.a);
        self.regs.a = result;
        self.set_flags(false, false, false, carry);
        0
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = match opcode >> 4 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl,
            _ => self.regs.sp,
        };
        self.alu_add16_hl(value);
        0
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch_imm8(bus);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        0
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        let imm = self.fetch_imm8(bus);
        self.regs.hl = self.alu_add16_signed(self.regs.sp, imm);
        0
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.alu_daa();
        0
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flags(self.flags.zero, true, true, self.flags.carry);
        0
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flags(self.flags.zero, false, false, true);
        0
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.set_flags(self.flags.zero, false, false, !self.flags.carry);
        0
    }
}
