use crate::cpu::{Bus, Cpu};

// Surcharges for taken branches, on top of the not-taken table cost.
const JR_TAKEN: u32 = 4;
const JP_TAKEN: u32 = 4;
const CALL_TAKEN: u32 = 12;
const RET_TAKEN: u32 = 12;

impl Cpu {
    pub(in crate::cpu) fn exec_jr_r8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jr(bus, true);
        0
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cond = self.cc_condition((opcode >> 3) & 0x03);
        if self.jr(bus, cond) {
            JR_TAKEN
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.jp_cond(bus, true);
        0
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cond = self.cc_condition((opcode >> 3) & 0x03);
        if self.jp_cond(bus, cond) {
            JP_TAKEN
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl;
        0
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.call_cond(bus, true);
        0
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cond = self.cc_condition((opcode >> 3) & 0x03);
        if self.call_cond(bus, cond) {
            CALL_TAKEN
        } else {
            0
        }
    }

    pub(in crate::cpu) fn exec_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ret_cond(bus, true);
        0
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cond = self.cc_condition((opcode >> 3) & 0x03);
        if self.ret_cond(bus, cond) {
            RET_TAKEN
        } else {
            0
        }
    }

    /// RETI enables IME immediately, without the EI delay.
    pub(in crate::cpu) fn exec_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> u32 {
        self.ret_cond(bus, true);
        self.flags.interrupt_master = true;
        self.flags.pending_interrupt_enabled = false;
        0
    }

    pub(in crate::cpu) fn exec_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        0
    }
}
