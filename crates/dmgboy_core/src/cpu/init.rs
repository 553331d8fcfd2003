use super::{Cpu, CpuFault, Flags, OpcodeTable, Registers, DMG_OPCODES};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_table(&DMG_OPCODES)
    }

    /// Build a CPU that decodes through a caller-provided opcode table.
    pub fn with_table(table: &'static OpcodeTable) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            flags: Flags::default(),
            halted: false,
            fault: None,
            table,
        };
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// Reset the CPU to its post-boot-ROM state, keeping the opcode table.
    pub fn reset(&mut self) {
        self.halted = false;
        self.fault = None;
        self.apply_dmg_boot_state();
    }

    pub fn table(&self) -> &'static OpcodeTable {
        self.table
    }

    /// Fault latched by the last unassigned opcode, if any.
    pub fn fault(&self) -> Option<CpuFault> {
        self.fault
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code.
    ///
    /// AF=$01B0, BC=$0013, DE=$00D8, HL=$014D, SP=$FFFE, PC=$0100.
    fn apply_dmg_boot_state(&mut self) {
        self.regs = Registers {
            a: 0x01,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            f: 0xB0,
            hl: 0x014D,
            pc: 0x0100,
            sp: 0xFFFE,
        };

        // Z, H, C set; N clear. This is exactly F=0xB0.
        // IME is clear when control is handed to the cartridge at 0x0100.
        self.flags = Flags {
            zero: true,
            sub: false,
            half_carry: true,
            carry: true,
            interrupt_master: false,
            pending_interrupt_disabled: false,
            pending_interrupt_enabled: false,
        };
    }
}
