//! Table-driven opcode dispatch.
//!
//! Each of the 256 unprefixed opcodes maps to an [`OpcodeEntry`] holding
//! the base T-cycle cost and the handler. A base cost of zero marks an
//! unassigned opcode; decoding one is fatal.

use std::fmt;

use lazy_static::lazy_static;

use super::{Bus, Cpu, OPCODE_CB_PREFIX, OPCODE_DI, OPCODE_EI};

/// Opcode handler. Receives the opcode byte that selected it and returns
/// the T-cycles spent beyond the entry's base cost.
pub type OpHandler = fn(&mut Cpu, &mut dyn Bus, u8) -> u32;

#[derive(Clone, Copy)]
pub struct OpcodeEntry {
    pub mnemonic: &'static str,
    /// Base cost in T-cycles. Zero marks an unassigned opcode.
    pub cycles: u32,
    pub handler: OpHandler,
}

fn unassigned(_cpu: &mut Cpu, _bus: &mut dyn Bus, _opcode: u8) -> u32 {
    0
}

impl fmt::Debug for OpcodeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpcodeEntry")
            .field("mnemonic", &self.mnemonic)
            .field("cycles", &self.cycles)
            .finish_non_exhaustive()
    }
}

impl OpcodeEntry {
    pub const UNASSIGNED: OpcodeEntry = OpcodeEntry {
        mnemonic: "???",
        cycles: 0,
        handler: unassigned,
    };

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.cycles != 0
    }
}

pub struct OpcodeTable {
    entries: [OpcodeEntry; 256],
}

lazy_static! {
    /// The unprefixed LR35902 instruction set used by [`Cpu::new`].
    pub static ref DMG_OPCODES: OpcodeTable = OpcodeTable::dmg();
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for OpcodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpcodeTable")
            .field("assigned", &self.assigned_count())
            .finish()
    }
}

impl OpcodeTable {
    /// A table where every opcode is unassigned.
    pub fn empty() -> Self {
        Self {
            entries: [OpcodeEntry::UNASSIGNED; 256],
        }
    }

    pub fn set(
        &mut self,
        opcode: u8,
        mnemonic: &'static str,
        cycles: u32,
        handler: OpHandler,
    ) -> &mut Self {
        self.entries[opcode as usize] = OpcodeEntry {
            mnemonic,
            cycles,
            handler,
        };
        self
    }

    /// Mark an opcode as unassigned.
    pub fn clear(&mut self, opcode: u8) -> &mut Self {
        self.entries[opcode as usize] = OpcodeEntry::UNASSIGNED;
        self
    }

    #[inline]
    pub fn entry(&self, opcode: u8) -> &OpcodeEntry {
        &self.entries[opcode as usize]
    }

    pub fn assigned_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_assigned()).count()
    }

    /// Build the full DMG table.
    ///
    /// Conditional JR/JP/CALL/RET carry their not-taken cost here; the
    /// handlers report the taken surcharge. The opcode holes D3, DB, DD,
    /// E3, E4, EB, EC, ED, F4, FC and FD stay unassigned.
    pub fn dmg() -> Self {
        const ALU_NAMES: [&str; 8] = [
            "ADD A,r", "ADC A,r", "SUB r", "SBC A,r", "AND r", "XOR r", "OR r", "CP r",
        ];
        const ALU_IMM_NAMES: [&str; 8] = [
            "ADD A,d8", "ADC A,d8", "SUB d8", "SBC A,d8", "AND d8", "XOR d8", "OR d8", "CP d8",
        ];

        let mut t = Self::empty();

        t.set(0x00, "NOP", 4, Cpu::exec_nop)
            .set(0x08, "LD (a16),SP", 20, Cpu::exec_ld_a16_sp)
            .set(0x10, "STOP", 4, Cpu::exec_stop)
            .set(0x18, "JR r8", 12, Cpu::exec_jr_r8)
            .set(0x27, "DAA", 4, Cpu::exec_daa)
            .set(0x2F, "CPL", 4, Cpu::exec_cpl)
            .set(0x37, "SCF", 4, Cpu::exec_scf)
            .set(0x3F, "CCF", 4, Cpu::exec_ccf)
            .set(0x76, "HALT", 4, Cpu::exec_halt)
            .set(0xC3, "JP a16", 16, Cpu::exec_jp_a16)
            .set(0xC9, "RET", 16, Cpu::exec_ret)
            .set(OPCODE_CB_PREFIX, "PREFIX CB", 4, Cpu::exec_cb_prefix)
            .set(0xCD, "CALL a16", 24, Cpu::exec_call_a16)
            .set(0xD9, "RETI", 16, Cpu::exec_reti)
            .set(0xE0, "LDH (a8),A", 12, Cpu::exec_ldh_a8)
            .set(0xF0, "LDH A,(a8)", 12, Cpu::exec_ldh_a8)
            .set(0xE2, "LD (C),A", 8, Cpu::exec_ldh_c)
            .set(0xF2, "LD A,(C)", 8, Cpu::exec_ldh_c)
            .set(0xE8, "ADD SP,r8", 16, Cpu::exec_add_sp_r8)
            .set(0xE9, "JP (HL)", 4, Cpu::exec_jp_hl)
            .set(0xEA, "LD (a16),A", 16, Cpu::exec_ld_a16_a)
            .set(0xFA, "LD A,(a16)", 16, Cpu::exec_ld_a16_a)
            .set(OPCODE_DI, "DI", 4, Cpu::exec_di)
            .set(OPCODE_EI, "EI", 4, Cpu::exec_ei)
            .set(0xF8, "LD HL,SP+r8", 12, Cpu::exec_ld_hl_sp_r8)
            .set(0xF9, "LD SP,HL", 8, Cpu::exec_ld_sp_hl);

        t.set(0x07, "RLCA", 4, Cpu::exec_rotate_a)
            .set(0x0F, "RRCA", 4, Cpu::exec_rotate_a)
            .set(0x17, "RLA", 4, Cpu::exec_rotate_a)
            .set(0x1F, "RRA", 4, Cpu::exec_rotate_a);

        // Register-pair rows: BC, DE, HL, SP (AF for PUSH/POP).
        for row in 0u8..4 {
            let base = row << 4;
            t.set(base | 0x01, "LD rr,d16", 12, Cpu::exec_ld_rr_d16)
                .set(base | 0x03, "INC rr", 8, Cpu::exec_incdec16_rr)
                .set(base | 0x09, "ADD HL,rr", 8, Cpu::exec_add_hl_rr)
                .set(base | 0x0B, "DEC rr", 8, Cpu::exec_incdec16_rr)
                .set(0xC1 | base, "POP rr", 12, Cpu::exec_pop_rr)
                .set(0xC5 | base, "PUSH rr", 16, Cpu::exec_push_rr);
        }

        for op in [0x02, 0x12, 0x22, 0x32] {
            t.set(op, "LD (rr),A", 8, Cpu::exec_ld_indirect_a);
        }
        for op in [0x0A, 0x1A, 0x2A, 0x3A] {
            t.set(op, "LD A,(rr)", 8, Cpu::exec_ld_a_indirect);
        }

        // Conditional control flow: NZ, Z, NC, C.
        for cc in 0u8..4 {
            let y = cc << 3;
            t.set(0x20 | y, "JR cc,r8", 8, Cpu::exec_jr_cc)
                .set(0xC0 | y, "RET cc", 8, Cpu::exec_ret_cc)
                .set(0xC2 | y, "JP cc,a16", 12, Cpu::exec_jp_cc)
                .set(0xC4 | y, "CALL cc,a16", 12, Cpu::exec_call_cc);
        }

        for reg in 0u8..8 {
            let y = reg << 3;
            let on_hl = reg == 6;
            t.set(0x04 | y, "INC r", if on_hl { 12 } else { 4 }, Cpu::exec_inc8_reg)
                .set(0x05 | y, "DEC r", if on_hl { 12 } else { 4 }, Cpu::exec_dec8_reg)
                .set(0x06 | y, "LD r,d8", if on_hl { 12 } else { 8 }, Cpu::exec_ld_r_d8)
                .set(0xC6 | y, ALU_IMM_NAMES[reg as usize], 8, Cpu::exec_alu_imm)
                .set(0xC7 | y, "RST", 16, Cpu::exec_rst);
        }

        for op in 0x40u8..=0x7F {
            if op == 0x76 {
                continue;
            }
            let touches_hl = (op >> 3) & 0x07 == 6 || op & 0x07 == 6;
            t.set(op, "LD r,r'", if touches_hl { 8 } else { 4 }, Cpu::exec_ld_r_r);
        }

        for op in 0x80u8..=0xBF {
            let cycles = if op & 0x07 == 6 { 8 } else { 4 };
            let name = ALU_NAMES[((op >> 3) & 0x07) as usize];
            t.set(op, name, cycles, Cpu::exec_alu_reg_group);
        }

        t
    }
}
